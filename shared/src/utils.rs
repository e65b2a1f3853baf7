//! # Shared Utility Functions
//!
//! URL helpers used by the client library and the web app.
//!
//! - [`resolve_image_url`] - Resolve a backend asset path against the API origin
//! - [`maps_link`] - Map link for a pair of coordinates
//! - [`link_slug`] - Footer link target for a human-readable label
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{link_slug, maps_link};
//!
//! assert_eq!(maps_link(51.5, -0.12), "https://www.google.com/maps?q=51.5,-0.12");
//! assert_eq!(link_slug("Book Borrowing"), "/book-borrowing");
//! ```

/// Base of the map links opened from the library modal.
pub const MAPS_BASE_URL: &str = "https://www.google.com/maps";

/// Resolve an image path returned by the backend.
///
/// Absolute URLs (anything starting with `http`) are returned unchanged. Relative
/// paths are joined onto `api_base`, dropping one leading `/` from the path and any
/// trailing `/` from the base. Missing or empty paths resolve to `None`.
///
/// # Examples
///
/// ```rust
/// use shared::utils::resolve_image_url;
///
/// let base = "http://localhost:3002";
/// assert_eq!(resolve_image_url(Some("/uploads/a.png"), base).as_deref(), Some("http://localhost:3002/uploads/a.png"));
/// assert_eq!(resolve_image_url(Some("https://cdn.example/a.png"), base).as_deref(), Some("https://cdn.example/a.png"));
/// assert_eq!(resolve_image_url(None, base), None);
/// ```
pub fn resolve_image_url(path: Option<&str>, api_base: &str) -> Option<String> {
    let path = path.filter(|p| !p.is_empty())?;

    if path.starts_with("http") {
        return Some(path.to_string());
    }

    let relative = path.strip_prefix('/').unwrap_or(path);
    Some(format!("{}/{}", api_base.trim_end_matches('/'), relative))
}

/// Build a map link centred on `latitude,longitude`.
pub fn maps_link(latitude: f64, longitude: f64) -> String {
    format!("{}?q={},{}", MAPS_BASE_URL, latitude, longitude)
}

/// Turn a footer label into its link target (`"Study Spaces"` → `"/study-spaces"`).
///
/// Only the first space is replaced, matching the routes the site already serves.
pub fn link_slug(label: &str) -> String {
    format!("/{}", label.to_lowercase().replacen(' ', "-", 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:3002";

    #[test]
    fn test_resolve_relative_paths() {
        assert_eq!(
            resolve_image_url(Some("uploads/cover.jpg"), BASE).as_deref(),
            Some("http://localhost:3002/uploads/cover.jpg")
        );
        assert_eq!(
            resolve_image_url(Some("/uploads/cover.jpg"), "http://localhost:3002/").as_deref(),
            Some("http://localhost:3002/uploads/cover.jpg")
        );
    }

    #[test]
    fn test_resolve_only_strips_one_leading_slash() {
        assert_eq!(
            resolve_image_url(Some("//uploads/cover.jpg"), BASE).as_deref(),
            Some("http://localhost:3002//uploads/cover.jpg")
        );
    }

    #[test]
    fn test_resolve_absolute_and_missing() {
        assert_eq!(
            resolve_image_url(Some("http://img.example/c.jpg"), BASE).as_deref(),
            Some("http://img.example/c.jpg")
        );
        assert_eq!(resolve_image_url(Some(""), BASE), None);
        assert_eq!(resolve_image_url(None, BASE), None);
    }

    #[test]
    fn test_link_slug() {
        assert_eq!(link_slug("Research Help"), "/research-help");
        assert_eq!(link_slug("Digital Library"), "/digital-library");
        assert_eq!(link_slug("Catalog"), "/catalog");
    }
}
