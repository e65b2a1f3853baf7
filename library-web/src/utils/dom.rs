//! Thin wrappers over browser APIs.

use lib_client::state::PointerTarget;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlImageElement};

use crate::utils::constants::{ACCOUNT_BUTTON_CLASS, ACCOUNT_POPUP_CLASS, PLACEHOLDER_COVER};

/// Blocking notice.
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        log::warn!("alert failed: {:?}", e);
    }
}

pub fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.open_with_url_and_target(url, "_blank") {
        log::warn!("Could not open {}: {:?}", url, e);
    }
}

/// Full page load, for surfaces outside this app.
pub fn navigate_full(path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(path) {
        log::error!("Navigation to {} failed: {:?}", path, e);
    }
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

/// Classify a pointer press against the account button and popover.
pub fn pointer_target(event: &web_sys::MouseEvent) -> PointerTarget {
    let Some(element) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return PointerTarget::Outside;
    };
    let inside = |class: &str| {
        element
            .closest(&format!(".{}", class))
            .ok()
            .flatten()
            .is_some()
    };

    if inside(ACCOUNT_POPUP_CLASS) {
        PointerTarget::Popover
    } else if inside(ACCOUNT_BUTTON_CLASS) {
        PointerTarget::Trigger
    } else {
        PointerTarget::Outside
    }
}

/// `error` handler for cover images: swap in the placeholder, once.
pub fn use_placeholder_cover(event: &web_sys::Event) {
    let Some(image) = event
        .target()
        .and_then(|t| t.dyn_into::<HtmlImageElement>().ok())
    else {
        return;
    };
    if !image.src().ends_with(PLACEHOLDER_COVER) {
        image.set_src(PLACEHOLDER_COVER);
    }
}

/// Hide the static loading screen from index.html.
pub fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("No document available");
        return;
    };

    match document.get_element_by_id("leptos-loading") {
        Some(element) => {
            if let Some(html_element) = element.dyn_ref::<HtmlElement>() {
                html_element.class_list().add_1("hidden").ok();
            }
            element.set_attribute("style", "display: none !important;").ok();
        }
        None => log::warn!("Loading element not found"),
    }
}
