//! Signed-in shell: header, routed page, footer, library modal.

use leptos::ev;
use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::{Footer, LibraryModal, Navbar};
use crate::state::provide_app_context;
use crate::utils::dom::scroll_y;

#[component]
pub fn LibraryLayout() -> impl IntoView {
    let ctx = provide_app_context();

    let scroll_handle = window_event_listener(ev::scroll, move |_| {
        let offset = scroll_y();
        ctx.nav.maybe_update(|nav| nav.on_scroll(offset));
    });
    on_cleanup(move || scroll_handle.remove());

    view! {
        <div class="shell">
            <Navbar/>
            <main class="shell-main">
                <Outlet/>
            </main>
            <Footer/>
            <LibraryModal/>
        </div>
    }
}
