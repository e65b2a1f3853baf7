//! Reactive state for the signed-in shell

pub mod context;
pub mod signal_cell;

pub use context::{provide_app_context, use_app_context, AppContext};
pub use signal_cell::SignalCell;
