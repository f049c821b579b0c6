pub mod footer;
pub mod header;

use footer::Footer;
use header::Header;
use leptos::prelude::*;

/// Page shell: header, main content, footer.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app">
            <Header />
            <main class="main">
                {children()}
            </main>
            <Footer />
        </div>
    }
}
