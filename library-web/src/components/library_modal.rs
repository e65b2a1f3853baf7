//! Library/borrow modal

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lib_client::state::library::{
    borrow_from_library, open_for_book, BorrowOutcome, OpenOutcome, BORROW_SUCCEEDED, LIBRARY_LOOKUP_FAILED,
    LOCATION_UNAVAILABLE, NO_LIBRARIES,
};
use shared::{Book, LibraryListing};

use crate::components::BookCover;
use crate::services::LocalStorageSession;
use crate::state::{use_app_context, AppContext, SignalCell};
use crate::utils::constants::OPENING_HOURS;
use crate::utils::dom::{alert, open_in_new_tab};

/// Look up who holds `book` and open the modal if anybody does.
pub fn open_library_modal(ctx: AppContext, book: Book) {
    let api = ctx.api();
    spawn_local(async move {
        let title = book.title.clone();
        match open_for_book(&api, &SignalCell(ctx.modal), &LocalStorageSession, book).await {
            OpenOutcome::Opened { admin_ids } => {
                log::debug!("{:?} held by {} libraries", title, admin_ids.len());
            }
            OpenOutcome::Empty => alert(NO_LIBRARIES),
            OpenOutcome::Failed => alert(LIBRARY_LOOKUP_FAILED),
            OpenOutcome::Superseded => {}
        }
    });
}

#[component]
pub fn LibraryModal() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <Show when=move || ctx.modal.with(|m| m.is_open())>
            <div class="modal-backdrop">
                <div class="modal">
                    <div class="modal-header">
                        <h2>"Available Libraries"</h2>
                        <button class="modal-close" on:click=move |_| ctx.modal.update(|m| m.close())>
                            "×"
                        </button>
                    </div>

                    {move || {
                        ctx.modal
                            .with(|m| m.selected().cloned())
                            .map(|book| {
                                view! {
                                    <div class="modal-book">
                                        <BookCover image=book.image title=book.title.clone()/>
                                        <div>
                                            <h3>{book.title}</h3>
                                            <p>{book.author}</p>
                                        </div>
                                    </div>
                                }
                            })
                    }}

                    <div class="modal-body">
                        <For
                            each=move || ctx.modal.with(|m| m.libraries().to_vec())
                            key=|library: &LibraryListing| library.id.clone()
                            children=move |library: LibraryListing| view! { <LibraryRow library=library/> }
                        />
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn LibraryRow(library: LibraryListing) -> impl IntoView {
    let ctx = use_app_context();
    let admin_id = library.admin_id().map(str::to_string);
    let library_id = StoredValue::new(library.id.clone());

    let show_on_map = move |_: ev::MouseEvent| {
        match ctx.modal.with_untracked(|m| m.map_link(admin_id.as_deref())) {
            Some(url) => open_in_new_tab(&url),
            None => alert(LOCATION_UNAVAILABLE),
        }
    };

    let borrow = move |_: ev::MouseEvent| {
        let api = ctx.api();
        let library_id = library_id.get_value();
        spawn_local(async move {
            match borrow_from_library(&api, &SignalCell(ctx.modal), &LocalStorageSession, &library_id).await {
                BorrowOutcome::Borrowed { book_id } => {
                    log::info!("Borrowed {} from {}", book_id, library_id);
                    alert(BORROW_SUCCEEDED);
                }
                BorrowOutcome::Failed(message) => alert(&message),
                BorrowOutcome::Discarded => {}
            }
        });
    };

    view! {
        <div class="library-row">
            <div class="library-info">
                <h3>{library.display_name().to_string()}</h3>
                <button class="library-address" on:click=show_on_map>
                    <span class="icon">"📍"</span>
                    <span>{library.display_address().to_string()}</span>
                </button>
                <div class="library-hours">
                    <span class="icon">"🕘"</span>
                    <span>{OPENING_HOURS}</span>
                </div>
            </div>
            <div class="library-actions">
                <div class="library-stock">{format!("{} copies available", library.copies())}</div>
                <button
                    class="btn borrow-btn"
                    disabled=move || ctx.modal.with(|m| m.is_borrowing())
                    on:click=borrow
                >
                    "Borrow Now"
                </button>
            </div>
        </div>
    }
}
