//! # Client Configuration
//!
//! Settings for the web client. A browser has no process environment, so values
//! are taken from the build environment with `option_env!` and fall back to
//! defaults that match the development backend.
//!
//! | Variable | Default |
//! |---|---|
//! | `LIBRARYHUB_API_BASE` | `http://localhost:3002` |
//! | `LIBRARYHUB_SEARCH_DEBOUNCE_MS` | `300` |
//! | `LIBRARYHUB_REQUEST_TIMEOUT_SECS` | `10` |
//!
//! ## Global Config Access
//!
//! Call [`init_config()`] once at start-up, then read it anywhere with
//! [`client_config()`]:
//!
//! ```rust,no_run
//! use lib_client::config::{client_config, init_config};
//!
//! init_config().expect("invalid build configuration");
//! let base = &client_config().api_base;
//! ```

use std::sync::OnceLock;

use crate::core::error::{AppError, Result};

pub const DEFAULT_API_BASE: &str = "http://localhost:3002";
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 300;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Where logout sends the user
pub const LOGIN_PATH: &str = "/login";
/// Where a successful admin signup sends the user
pub const ADMIN_LOGIN_PATH: &str = "/adminlogin";

const MAX_SEARCH_DEBOUNCE_MS: u32 = 5_000;

/// Web client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin of the library-management API, also used to resolve image paths
    pub api_base: String,

    /// Quiet period before a search query is sent
    pub search_debounce_ms: u32,

    /// Per-request timeout (ignored in the browser, where fetch has none)
    pub request_timeout_secs: u64,

    pub login_path: String,
    pub admin_login_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            login_path: LOGIN_PATH.to_string(),
            admin_login_path: ADMIN_LOGIN_PATH.to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from the build environment.
    pub fn from_build_env() -> Result<Self> {
        Self::from_values(
            option_env!("LIBRARYHUB_API_BASE"),
            option_env!("LIBRARYHUB_SEARCH_DEBOUNCE_MS"),
            option_env!("LIBRARYHUB_REQUEST_TIMEOUT_SECS"),
        )
    }

    /// Build a configuration from optional raw values, applying defaults.
    pub fn from_values(
        api_base: Option<&str>,
        search_debounce_ms: Option<&str>,
        request_timeout_secs: Option<&str>,
    ) -> Result<Self> {
        let mut config = Self::default();

        if let Some(base) = api_base.map(str::trim).filter(|b| !b.is_empty()) {
            config.api_base = base.trim_end_matches('/').to_string();
        }

        if let Some(raw) = search_debounce_ms {
            config.search_debounce_ms = raw.trim().parse().map_err(|e| {
                AppError::Config(format!("LIBRARYHUB_SEARCH_DEBOUNCE_MS must be a valid number: {}", e))
            })?;
        }

        if let Some(raw) = request_timeout_secs {
            config.request_timeout_secs = raw.trim().parse().map_err(|e| {
                AppError::Config(format!("LIBRARYHUB_REQUEST_TIMEOUT_SECS must be a valid number: {}", e))
            })?;
        }

        Ok(config)
    }

    /// Override the API origin (used by tests pointing at a local server).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !(self.api_base.starts_with("http://") || self.api_base.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "API base must be an http(s) URL, got '{}'",
                self.api_base
            )));
        }

        if self.search_debounce_ms == 0 || self.search_debounce_ms > MAX_SEARCH_DEBOUNCE_MS {
            return Err(AppError::Config(format!(
                "Search debounce must be between 1 and {} ms",
                MAX_SEARCH_DEBOUNCE_MS
            )));
        }

        if self.request_timeout_secs == 0 {
            return Err(AppError::Config("Request timeout must be at least 1 second".to_string()));
        }

        Ok(())
    }
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// Initialize the global configuration from the build environment.
///
/// # Errors
///
/// Returns an error if a build variable is malformed, validation fails, or the
/// config has already been initialized.
pub fn init_config() -> Result<()> {
    let config = ClientConfig::from_build_env()?;
    config.validate()?;

    CONFIG
        .set(config)
        .map_err(|_| AppError::Config("Config has already been initialized".to_string()))
}

/// Get the global configuration, or the defaults if [`init_config()`] was never called.
pub fn client_config() -> &'static ClientConfig {
    CONFIG.get_or_init(ClientConfig::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = ClientConfig::default();

        assert_eq!(config.api_base, "http://localhost:3002");
        assert_eq!(config.search_debounce_ms, 300);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_values_overrides_and_trims_base() {
        let config = ClientConfig::from_values(Some("https://api.libraryhub.org/"), Some("250"), None).unwrap();

        assert_eq!(config.api_base, "https://api.libraryhub.org");
        assert_eq!(config.search_debounce_ms, 250);
        assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn test_from_values_rejects_malformed_numbers() {
        let err = ClientConfig::from_values(None, Some("fast"), None).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let no_scheme = ClientConfig::default().with_api_base("localhost:3002");
        assert!(no_scheme.validate().is_err());

        let zero_debounce = ClientConfig {
            search_debounce_ms: 0,
            ..ClientConfig::default()
        };
        assert!(zero_debounce.validate().is_err());

        let zero_timeout = ClientConfig {
            request_timeout_secs: 0,
            ..ClientConfig::default()
        };
        assert!(zero_timeout.validate().is_err());
    }
}
