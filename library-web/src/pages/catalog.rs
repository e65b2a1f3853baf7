//! Catalog Page

use leptos::prelude::*;

use crate::components::SearchBox;

#[component]
pub fn CatalogPage() -> impl IntoView {
    view! {
        <section class="page">
            <h1>"Catalog"</h1>
            <p>"Type a title or an author. Results update as you type."</p>
            <div class="catalog-search">
                <SearchBox solid=true/>
            </div>
        </section>
    }
}
