//! # Backend Configuration
//!
//! Resolves the URL of the admin gRPC backend. The value comes from the
//! [`BACKEND_URL_ENV`] environment variable and falls back to [`DEFAULT_BACKEND_URL`]
//! when the variable is not set.
use std::env::{self, VarError};

/// Environment variable holding the backend base URL.
pub const BACKEND_URL_ENV: &str = "AVORED_BACKEND_BASE_URL";

/// Backend used when [`BACKEND_URL_ENV`] is not set.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:50051";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid backend url '{url}': '{source}'")]
    InvalidUrl {
        url: String,
        source: http::uri::InvalidUri,
    },
    #[error("Backend url '{0}' must be absolute (e.g. http://localhost:50051)")]
    NotAbsolute(String),
    #[error("Environment variable {BACKEND_URL_ENV} is not valid unicode")]
    NotUnicode,
}

/// Location of the gRPC backend the hooks talk to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    url: String,
}

impl BackendConfig {
    /// Validates `url` and wraps it. The URL needs both a scheme and an authority.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let uri = url
            .parse::<http::Uri>()
            .map_err(|source| ConfigError::InvalidUrl {
                url: url.clone(),
                source,
            })?;

        if uri.scheme().is_none() || uri.authority().is_none() {
            return Err(ConfigError::NotAbsolute(url));
        }

        Ok(Self { url })
    }

    /// Reads [`BACKEND_URL_ENV`], falling back to [`DEFAULT_BACKEND_URL`] when unset.
    ///
    /// A variable that is set but empty is not treated as unset and fails validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        let value = match env::var(BACKEND_URL_ENV) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => return Err(ConfigError::NotUnicode),
        };

        Self::resolve(value)
    }

    fn resolve(value: Option<String>) -> Result<Self, ConfigError> {
        let url = value.unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        tracing::debug!(%url, "resolved admin backend url");
        Self::new(url)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}
