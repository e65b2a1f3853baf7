//! Home Page

use leptos::prelude::*;
use leptos_router::components::A;
use lib_client::state::nav::CATALOG_PATH;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="page hero">
            <h1>"Welcome to LibraryHub"</h1>
            <p>
                "Search the catalog from the bar above, pick a book and see which libraries
                have a copy on the shelf. Borrow it in one click."
            </p>
            <A href=CATALOG_PATH>
                <span class="btn btn-primary">"Browse the catalog"</span>
            </A>
        </section>
    }
}
