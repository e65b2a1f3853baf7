//! Navigation Bar Component

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use lib_client::state::account::load_account;
use lib_client::state::nav::{ACCOUNT_PATH, BRAND, HOME_PATH, NAV_LINKS, ORDERS_PATH};

use crate::components::{AccountPopup, SearchBox};
use crate::state::{use_app_context, SignalCell};
use crate::utils::constants::ACCOUNT_BUTTON_CLASS;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app_context();
    let scrolled = move || ctx.nav.with(|nav| nav.is_scrolled());
    let menu_open = move || ctx.nav.with(|nav| nav.is_menu_open());

    let toggle_account = move |_: ev::MouseEvent| {
        let Some(Some(ticket)) = ctx.account.try_update(|popup| popup.toggle()) else {
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            load_account(&api, &SignalCell(ctx.account), ticket).await;
        });
    };

    view! {
        <nav class="navbar" class:scrolled=scrolled>
            <div class="navbar-inner">
                <A href=HOME_PATH attr:class="brand">
                    <span class="brand-glyph">"📖"</span>
                    <span class="brand-name">{BRAND}</span>
                </A>

                <div class="navbar-desktop">
                    <div class="nav-links">
                        {NAV_LINKS
                            .iter()
                            .map(|link| view! { <A href=link.href attr:class="nav-link">{link.label}</A> })
                            .collect_view()}
                    </div>
                    <SearchBox/>
                    <div class="nav-actions">
                        <A href=ORDERS_PATH attr:class="nav-orders">
                            <span class="icon">"🛒"</span>
                        </A>
                        <button class=ACCOUNT_BUTTON_CLASS on:click=toggle_account>
                            <span class="icon">"👤"</span>
                            <span>"Account"</span>
                        </button>
                        <button class="menu-toggle" on:click=move |_| ctx.nav.update(|nav| nav.toggle_menu())>
                            {move || if menu_open() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>

                <Show when=menu_open>
                    <MobileMenu/>
                </Show>
            </div>
            <AccountPopup/>
        </nav>
    }
}

#[component]
fn MobileMenu() -> impl IntoView {
    let ctx = use_app_context();
    let close = move |_: ev::MouseEvent| ctx.nav.update(|nav| nav.close_menu());

    view! {
        <div class="mobile-menu">
            {NAV_LINKS
                .iter()
                .map(|link| {
                    let label = link.label[..1].to_string() + &link.label[1..].to_lowercase();
                    view! {
                        <A href=link.href attr:class="mobile-link" on:click=close>
                            {label}
                        </A>
                    }
                })
                .collect_view()}
            <SearchBox solid=true/>
            <div class="mobile-actions">
                <A href=ORDERS_PATH attr:class="mobile-link" on:click=close>
                    <span class="icon">"🛒"</span>
                    <span>"Orders"</span>
                </A>
                <A href=ACCOUNT_PATH attr:class="mobile-link" on:click=close>
                    <span class="icon">"👤"</span>
                    <span>"Account"</span>
                </A>
            </div>
        </div>
    }
}
