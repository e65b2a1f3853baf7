//! Browser-backed services

pub mod session;

pub use session::LocalStorageSession;
