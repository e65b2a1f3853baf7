//! # Authentication Endpoints
//!
//! Admin signup and session logout. Login itself is handled by a separate flow.

use shared::AdminSignupRequest;

use super::client::{self, ApiClient};
use crate::core::error::Result;

/// Register a new library admin.
///
/// Any 2xx status is returned to the caller, which decides whether it is the
/// creation status it expects.
#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn admin_signup(client: &ApiClient, request: &AdminSignupRequest) -> Result<u16> {
    tracing::info!("Submitting admin signup");

    let response = client::send(client.post("/adminsignup").json(request)).await?;
    let status = response.status();

    if status.is_success() {
        tracing::info!(status = status.as_u16(), "Admin signup accepted");
        Ok(status.as_u16())
    } else {
        Err(client::remote_error(response).await)
    }
}

/// End the server-side session.
#[tracing::instrument(skip(client))]
pub async fn logout(client: &ApiClient) -> Result<()> {
    let response = client::send(client.post("/logout").json(&serde_json::json!({}))).await?;
    client::expect_success(response).await?;

    tracing::info!("Logged out");
    Ok(())
}
