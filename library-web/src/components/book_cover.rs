//! Cover thumbnail with placeholder fallback

use leptos::prelude::*;
use lib_client::client_config;
use shared::resolve_image_url;

use crate::utils::dom::use_placeholder_cover;

#[component]
pub fn BookCover(image: Option<String>, title: String) -> impl IntoView {
    match resolve_image_url(image.as_deref(), &client_config().api_base) {
        Some(src) => view! {
            <img
                class="book-cover"
                src=src
                alt=title
                on:error=move |ev| use_placeholder_cover(&ev)
            />
        }
        .into_any(),
        None => view! {
            <div class="book-cover book-cover-empty">
                <span class="book-glyph">"📖"</span>
            </div>
        }
        .into_any(),
    }
}
