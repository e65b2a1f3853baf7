//! UI Components

pub mod account_popup;
pub mod book_cover;
pub mod footer;
pub mod layout;
pub mod library_modal;
pub mod navbar;
pub mod search;

pub use account_popup::AccountPopup;
pub use book_cover::BookCover;
pub use footer::Footer;
pub use layout::LibraryLayout;
pub use library_modal::LibraryModal;
pub use navbar::Navbar;
pub use search::SearchBox;
