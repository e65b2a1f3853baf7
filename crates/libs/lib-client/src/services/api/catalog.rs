//! # Catalog Endpoints
//!
//! Book search, libraries holding a book, and library locations.

use shared::{Book, LibraryListing, Location};

use super::client::{self, ApiClient};
use crate::core::error::Result;

/// Search books matching `query`.
#[tracing::instrument(skip(client), fields(query = %query))]
pub async fn search_books(client: &ApiClient, query: &str) -> Result<Vec<Book>> {
    let response = client::send(client.get("/bookquery").query(&[("query", query)])).await?;
    let books: Vec<Book> = client::parse_json(response).await?;

    tracing::debug!(count = books.len(), "Search results received");
    Ok(books)
}

/// Libraries holding the book titled `title`.
#[tracing::instrument(skip(client, token), fields(title = %title))]
pub async fn libraries_for_book(
    client: &ApiClient,
    title: &str,
    token: Option<&str>,
) -> Result<Vec<LibraryListing>> {
    let path = format!("/libraries/{}", urlencoding::encode(title));
    let request = client::with_bearer(client.get(&path), token);

    let response = client::send(request).await?;
    let libraries: Vec<LibraryListing> = client::parse_json(response).await?;

    tracing::debug!(count = libraries.len(), "Library listings received");
    Ok(libraries)
}

/// Coordinates for the given admin ids, sent as one comma-separated parameter.
#[tracing::instrument(skip(client), fields(count = admin_ids.len()))]
pub async fn locations(client: &ApiClient, admin_ids: &[String]) -> Result<Vec<Location>> {
    let csv = admin_ids.join(",");
    let response = client::send(client.get("/locations").query(&[("adminIds", csv.as_str())])).await?;

    client::parse_json(response).await
}
