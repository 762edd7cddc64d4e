//! # Admin Context
//!
//! The collaborators every hook needs: a gRPC transport, the local storage holding
//! the bearer token and the navigator performing redirects.
//!
//! The transport is generic so tests can plug an in-process tonic server straight
//! in, the same way a `Channel` is used in production. Hooks clone it into a new
//! generated client on every call.
use crate::config::{BackendConfig, ConfigError};
use crate::navigation::Navigator;
use crate::storage::LocalStorage;
use std::sync::Arc;
use tonic::transport::{Channel, Endpoint};

/// Errors that can occur when preparing the connection to the backend.
#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Invalid URL '{0}': {1}")]
    InvalidUrl(String, #[source] tonic::transport::Error),
}

#[derive(Clone)]
pub struct AdminContext<S = Channel> {
    service: S,
    storage: Arc<dyn LocalStorage>,
    navigator: Arc<dyn Navigator>,
}

impl AdminContext<Channel> {
    /// Builds a context whose channel connects on first use.
    ///
    /// The backend URL is fixed here, once per context. Every hook built from the
    /// context shares this channel and creates its own client per call, so changing
    /// the environment afterwards only affects contexts built later.
    ///
    /// Must be called from within a tokio runtime.
    pub fn connect_lazy(
        config: &BackendConfig,
        storage: Arc<dyn LocalStorage>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ConnectError> {
        let endpoint = Endpoint::new(config.url().to_string())
            .map_err(|e| ConnectError::InvalidUrl(config.url().to_string(), e))?;

        tracing::debug!(url = config.url(), "prepared admin backend channel");

        Ok(Self::from_service(
            endpoint.connect_lazy(),
            storage,
            navigator,
        ))
    }

    /// Resolves the backend from the environment, then behaves like [`Self::connect_lazy`].
    pub fn from_env(
        storage: Arc<dyn LocalStorage>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ConnectError> {
        let config = BackendConfig::from_env()?;
        Self::connect_lazy(&config, storage, navigator)
    }
}

impl<S> AdminContext<S> {
    /// Creates a context from an existing Tonic service/channel.
    pub fn from_service(
        service: S,
        storage: Arc<dyn LocalStorage>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            service,
            storage,
            navigator,
        }
    }

    pub fn storage(&self) -> &dyn LocalStorage {
        self.storage.as_ref()
    }

    pub fn navigator(&self) -> &dyn Navigator {
        self.navigator.as_ref()
    }
}

impl<S: Clone> AdminContext<S> {
    pub(crate) fn service(&self) -> S {
        self.service.clone()
    }
}
