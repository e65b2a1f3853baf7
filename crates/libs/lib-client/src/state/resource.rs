//! Per-fetch state.

/// Lifecycle of one remote resource.
///
/// A single tagged value instead of separate loading/error flags, so a resource can
/// never be loading and failed at the same time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Resource<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Resource<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Resource::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Resource::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Resource::Failed(message) => Some(message),
            _ => None,
        }
    }
}
