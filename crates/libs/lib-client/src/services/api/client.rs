//! # API Client
//!
//! Main HTTP client for backend API communication.

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::{AccountInfo, AdminSignupRequest, Book, BorrowRequest, LibraryListing, Location, MessageResponse};

use crate::config::ClientConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::LibraryApi;

/// HTTP client for the library-management backend.
///
/// Every request carries the session cookie: in the browser through
/// `credentials: include`, elsewhere through reqwest's cookie store. Endpoints that
/// also want a bearer token take it as an argument.
#[derive(Clone, Debug)]
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the configured API origin.
    pub fn new(config: &ClientConfig) -> Self {
        let builder = Client::builder();

        // fetch has neither a timeout nor a cookie jar of its own to configure
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .cookie_store(true);

        let client = builder.build().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Falling back to default HTTP client");
            Client::new()
        });

        Self {
            client,
            base_url: config.api_base.trim_end_matches('/').to_string(),
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        with_credentials(self.client.get(self.url(path)))
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        with_credentials(self.client.post(self.url(path)))
    }
}

#[cfg(target_arch = "wasm32")]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request
}

/// Attach `Authorization: Bearer <token>` when a token is stored.
pub(crate) fn with_bearer(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) if !token.is_empty() => request.bearer_auth(token),
        _ => request,
    }
}

/// Send a request, mapping transport failures to [`AppError::Network`].
pub(crate) async fn send(request: RequestBuilder) -> Result<Response> {
    let response = request
        .send()
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Network error"))?;
    Ok(response)
}

/// Decode a success body, or turn the response into an [`AppError::Remote`].
pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    if response.status().is_success() {
        let body = response
            .json::<T>()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Response parse error"))?;
        Ok(body)
    } else {
        Err(remote_error(response).await)
    }
}

/// Succeed on any 2xx status, ignoring the body.
pub(crate) async fn expect_success(response: Response) -> Result<()> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(remote_error(response).await)
    }
}

/// Build a remote error, keeping the server's `message` when the body has one.
pub(crate) async fn remote_error(response: Response) -> AppError {
    let status = response.status().as_u16();
    let message = response
        .json::<MessageResponse>()
        .await
        .ok()
        .and_then(|body| body.message);

    tracing::warn!(status, message = ?message, "Backend returned an error status");
    AppError::Remote { status, message }
}

#[async_trait::async_trait(?Send)]
impl LibraryApi for ApiClient {
    async fn admin_signup(&self, request: &AdminSignupRequest) -> Result<u16> {
        crate::services::api::auth::admin_signup(self, request).await
    }

    async fn search_books(&self, query: &str) -> Result<Vec<Book>> {
        crate::services::api::catalog::search_books(self, query).await
    }

    async fn libraries_for_book(&self, title: &str, token: Option<&str>) -> Result<Vec<LibraryListing>> {
        crate::services::api::catalog::libraries_for_book(self, title, token).await
    }

    async fn locations(&self, admin_ids: &[String]) -> Result<Vec<Location>> {
        crate::services::api::catalog::locations(self, admin_ids).await
    }

    async fn borrow(&self, request: &BorrowRequest, token: Option<&str>) -> Result<()> {
        crate::services::api::account::borrow(self, request, token).await
    }

    async fn account_info(&self) -> Result<AccountInfo> {
        crate::services::api::account::account_info(self).await
    }

    async fn logout(&self) -> Result<()> {
        crate::services::api::auth::logout(self).await
    }
}
