//! Navigation shell state and route table.

use shared::link_slug;

/// Vertical offset past which the header switches to its compact look.
pub const SCROLL_THRESHOLD_PX: f64 = 10.0;

pub const BRAND: &str = "LibraryHub";
pub const HOME_PATH: &str = "/loginhome";
pub const CATALOG_PATH: &str = "/loginhome/catalog";
pub const ABOUT_PATH: &str = "/loginhome/about";
pub const ORDERS_PATH: &str = "/loginhome/orders";
pub const ACCOUNT_PATH: &str = "/account";
pub const SEARCH_PATH: &str = "/search";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 3] = [
    NavLink { label: "HOME", href: HOME_PATH },
    NavLink { label: "CATALOG", href: CATALOG_PATH },
    NavLink { label: "ABOUT", href: ABOUT_PATH },
];

pub const FOOTER_QUICK_LINKS: [&str; 4] = ["Book Borrowing", "Research Help", "Study Spaces", "Digital Library"];

/// Footer quick links as `(label, href)`.
pub fn footer_links() -> Vec<(&'static str, String)> {
    FOOTER_QUICK_LINKS
        .iter()
        .map(|label| (*label, link_slug(label)))
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    scrolled: bool,
    menu_open: bool,
}

impl NavState {
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Returns true when the scroll mode changed.
    pub fn on_scroll(&mut self, offset_y: f64) -> bool {
        let scrolled = offset_y > SCROLL_THRESHOLD_PX;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_threshold() {
        let mut nav = NavState::default();

        assert!(!nav.on_scroll(10.0));
        assert!(!nav.is_scrolled());
        assert!(nav.on_scroll(10.5));
        assert!(nav.is_scrolled());
        assert!(!nav.on_scroll(300.0));
        assert!(nav.on_scroll(0.0));
    }

    #[test]
    fn test_menu_toggle() {
        let mut nav = NavState::default();

        nav.toggle_menu();
        assert!(nav.is_menu_open());
        nav.close_menu();
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_footer_links_use_slugs() {
        let links = footer_links();

        assert_eq!(links[0], ("Book Borrowing", "/book-borrowing".to_string()));
        assert_eq!(links[3].1, "/digital-library");
    }
}
