//! Application constants

/// Shown when a cover image fails to load
pub const PLACEHOLDER_COVER: &str = "/placeholder-book.png";

/// Class of the account button; pointer presses inside it never close the popup
pub const ACCOUNT_BUTTON_CLASS: &str = "account-button";
/// Class of the account popover body
pub const ACCOUNT_POPUP_CLASS: &str = "account-popup";

pub const OPENING_HOURS: &str = "9:00 AM - 6:00 PM";

// Footer
pub const FOOTER_BLURB: &str = "Discover a world of knowledge through our comprehensive collection of books, research materials, and educational resources.";
pub const CONTACT_STREET: &str = "123 Library Street";
pub const CONTACT_CITY: &str = "City, State 12345";
pub const CONTACT_PHONE: &str = "(555) 123-4567";
pub const CONTACT_PHONE_HREF: &str = "tel:+15551234567";
pub const CONTACT_EMAIL: &str = "info@libraryhub.com";
pub const FOOTER_HOURS: &[&str] = &[
    "Monday - Friday: 8AM - 9PM",
    "Saturday: 9AM - 6PM",
    "Sunday: 11AM - 5PM",
];
