//! # Account Endpoints
//!
//! Current user info and borrowing.

use shared::{AccountInfo, BorrowRequest};

use super::client::{self, ApiClient};
use crate::core::error::Result;

/// Account info for the signed-in user.
#[tracing::instrument(skip(client))]
pub async fn account_info(client: &ApiClient) -> Result<AccountInfo> {
    let response = client::send(client.get("/user")).await?;
    client::parse_json(response).await
}

/// Borrow `request.book_id` from `request.library_id`.
#[tracing::instrument(skip(client, request, token), fields(book_id = %request.book_id, library_id = %request.library_id))]
pub async fn borrow(client: &ApiClient, request: &BorrowRequest, token: Option<&str>) -> Result<()> {
    let http_request = client::with_bearer(client.post("/borrow"), token).json(request);

    let response = client::send(http_request).await?;
    client::expect_success(response).await?;

    tracing::info!("Borrow accepted");
    Ok(())
}
