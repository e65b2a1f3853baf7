//! Search input and results dropdown

use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use lib_client::client_config;
use lib_client::state::nav::SEARCH_PATH;
use lib_client::state::search::{run_search, SearchAction, SearchOutcome};
use shared::Book;

use crate::components::library_modal::open_library_modal;
use crate::components::BookCover;
use crate::state::{use_app_context, SignalCell};

/// Search field. `solid` forces the light look used inside the mobile menu.
#[component]
pub fn SearchBox(#[prop(optional)] solid: bool) -> impl IntoView {
    let ctx = use_app_context();

    let on_input = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        let Some(SearchAction::Schedule(ticket)) = ctx.search.try_update(|s| s.set_query(value)) else {
            return;
        };

        let api = ctx.api();
        let quiet = TimeoutFuture::new(client_config().search_debounce_ms);
        spawn_local(async move {
            let query = ticket.query().to_string();
            match run_search(&api, &SignalCell(ctx.search), ticket, quiet).await {
                SearchOutcome::Applied { count } => log::debug!("{} results for {:?}", count, query),
                SearchOutcome::Failed => log::warn!("Search for {:?} failed", query),
                SearchOutcome::Superseded => {}
            }
        });
    };

    let light = move || solid || ctx.nav.with(|nav| nav.is_scrolled());
    let searching = move || ctx.search.with(|s| s.is_searching());

    view! {
        <div class="search">
            <div class="search-input-wrap">
                <span class="search-icon" class:pulsing=searching>"🔍"</span>
                <input
                    type="text"
                    class="search-input"
                    class:light=light
                    placeholder="Search books..."
                    prop:value=move || ctx.search.with(|s| s.query().to_string())
                    on:input=on_input
                />
                <Show when=searching>
                    <div class="search-spinner"></div>
                </Show>
            </div>
            <SearchResults/>
        </div>
    }
}

#[component]
pub fn SearchResults() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <Show when=move || ctx.search.with(|s| s.results_visible())>
            <div class="search-results">
                <div class="search-results-list">
                    <For
                        each=move || ctx.search.with(|s| s.results().to_vec())
                        key=|book: &Book| book.id.clone()
                        children=move |book: Book| view! { <SearchResultRow book=book/> }
                    />
                </div>
                <div class="search-results-footer">
                    <A href=SEARCH_PATH>
                        {move || format!("View all {} results", ctx.search.with(|s| s.results().len()))}
                    </A>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn SearchResultRow(book: Book) -> impl IntoView {
    let ctx = use_app_context();
    let selected = StoredValue::new(book.clone());
    let select = move || open_library_modal(ctx, selected.get_value());

    view! {
        <div
            class="search-result"
            role="option"
            tabindex="0"
            on:click=move |_| select()
            on:keydown=move |ev| {
                if ev.key() == "Enter" {
                    select();
                }
            }
        >
            <BookCover image=book.image.clone() title=book.title.clone()/>
            <div class="search-result-text">
                <h4>{book.title.clone()}</h4>
                <p>{book.author.clone()}</p>
            </div>
        </div>
    }
}
