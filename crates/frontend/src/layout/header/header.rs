use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <h1 class="header__title">"🏦 Consultas AFP - Cuarto Retiro"</h1>
            <p class="header__subtitle">
                "Obtén información sobre el procedimiento y plazos del cuarto retiro de AFP"
            </p>
        </header>
    }
}
