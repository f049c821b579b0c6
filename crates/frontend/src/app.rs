use crate::layout::Shell;
use crate::usecases::u601_afp_query::QueryWidget;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Shell>
            <QueryWidget />
        </Shell>
    }
}
