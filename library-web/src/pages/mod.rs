//! Page modules

pub mod about;
pub mod catalog;
pub mod home;
pub mod orders;
pub mod signup;

pub use about::AboutPage;
pub use catalog::CatalogPage;
pub use home::HomePage;
pub use orders::OrdersPage;
pub use signup::SignupPage;
