//! Catalog DTOs: search results, per-book library listings and library locations.

use serde::{Deserialize, Serialize};

/// Placeholder shown when a listing has no populated admin name
pub const LIBRARY_NAME_UNAVAILABLE: &str = "Library Name Not Available";
/// Placeholder shown when a listing has no populated admin address
pub const ADDRESS_UNAVAILABLE: &str = "Address Not Available";

/// A book as returned by `GET /bookquery`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    /// Cover path, relative to the API origin unless already absolute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Owning library account, populated into each listing by the backend
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LibraryAdmin {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(rename = "Library_name", default)]
    pub library_name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// A library holding a given book (`GET /libraries/{title}`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LibraryListing {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "adminId", default)]
    pub admin: Option<LibraryAdmin>,
    #[serde(default)]
    pub stock: Option<u32>,
}

impl LibraryListing {
    /// Id of the owning admin account, if the backend populated it
    pub fn admin_id(&self) -> Option<&str> {
        self.admin
            .as_ref()
            .and_then(|admin| admin.id.as_deref())
            .filter(|id| !id.is_empty())
    }

    pub fn display_name(&self) -> &str {
        self.admin
            .as_ref()
            .and_then(|admin| admin.library_name.as_deref())
            .filter(|name| !name.is_empty())
            .unwrap_or(LIBRARY_NAME_UNAVAILABLE)
    }

    pub fn display_address(&self) -> &str {
        self.admin
            .as_ref()
            .and_then(|admin| admin.address.as_deref())
            .filter(|address| !address.is_empty())
            .unwrap_or(ADDRESS_UNAVAILABLE)
    }

    /// Copies on the shelf; a missing stock counts as none
    pub fn copies(&self) -> u32 {
        self.stock.unwrap_or(0)
    }
}

/// Geographic position of a library admin (`GET /locations`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Location {
    #[serde(rename = "adminId")]
    pub admin_id: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl Location {
    /// `(latitude, longitude)` when both coordinates are known
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) if lat.is_finite() && lng.is_finite() => Some((lat, lng)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_accepts_either_id_spelling() {
        let from_store: Book = serde_json::from_str(r#"{"_id":"a1","title":"Dune","author":"Herbert"}"#).unwrap();
        let plain: Book = serde_json::from_str(r#"{"id":"a1","title":"Dune","author":"Herbert"}"#).unwrap();

        assert_eq!(from_store, plain);
        assert_eq!(from_store.image, None);
    }

    #[test]
    fn test_listing_with_populated_admin() {
        let listing: LibraryListing = serde_json::from_str(
            r#"{"_id":"l1","adminId":{"_id":"adm1","Library_name":"Central","address":"1 Main St"},"stock":4}"#,
        )
        .unwrap();

        assert_eq!(listing.admin_id(), Some("adm1"));
        assert_eq!(listing.display_name(), "Central");
        assert_eq!(listing.display_address(), "1 Main St");
        assert_eq!(listing.copies(), 4);
    }

    #[test]
    fn test_listing_without_admin_uses_placeholders() {
        let listing: LibraryListing = serde_json::from_str(r#"{"_id":"l2","adminId":null,"stock":null}"#).unwrap();

        assert_eq!(listing.admin_id(), None);
        assert_eq!(listing.display_name(), LIBRARY_NAME_UNAVAILABLE);
        assert_eq!(listing.display_address(), ADDRESS_UNAVAILABLE);
        assert_eq!(listing.copies(), 0);
    }

    #[test]
    fn test_location_coordinates_require_both_values() {
        let full = Location {
            admin_id: "adm1".to_string(),
            latitude: Some(51.5),
            longitude: Some(-0.12),
        };
        let partial = Location {
            longitude: None,
            ..full.clone()
        };

        assert_eq!(full.coordinates(), Some((51.5, -0.12)));
        assert_eq!(partial.coordinates(), None);
    }
}
