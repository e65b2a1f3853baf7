//! Orders Page
//!
//! Books borrowed since the page was loaded. The list lives in memory only.

use leptos::prelude::*;

use crate::state::use_app_context;

#[component]
pub fn OrdersPage() -> impl IntoView {
    let ctx = use_app_context();
    let borrowed = move || ctx.modal.with(|m| m.borrowed().to_vec());

    view! {
        <section class="page">
            <h1>"Your Orders"</h1>
            <p class="muted">"Books borrowed during this visit. This list resets when the page reloads."</p>
            <Show
                when=move || !borrowed().is_empty()
                fallback=|| view! { <p>"You have not borrowed any books yet."</p> }
            >
                <ul class="orders-list">
                    {move || borrowed()
                        .into_iter()
                        .map(|book_id| view! { <li class="order">{book_id}</li> })
                        .collect_view()}
                </ul>
            </Show>
        </section>
    }
}
