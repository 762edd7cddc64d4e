//! # Admin Hooks
//!
//! `admin_hooks` binds the AvoRed admin gRPC services to small query and mutation
//! adapters ("hooks"). A hook builds a fresh generated client, forwards the bearer
//! token kept in local storage, issues exactly one unary call and reacts to the
//! response `status` flag by navigating or logging.
//!
//! ## Key Components
//!
//! * **[`AdminContext`]:** Bundles the transport, the [`LocalStorage`] holding the token
//!   and the [`Navigator`] used for redirects. Every hook is created from it.
//! * **Hooks:** [`RoleOptionQuery`], [`ContentPaginateQuery`] and [`GetContentQuery`]
//!   return the plain JSON form of a successful response. [`ForgotPasswordMutation`],
//!   [`DeleteContentMutation`] and [`PutContentIdentifierMutation`] redirect on success.
//! * **[`QueryState`]:** The `Idle -> Pending -> Success | Error` lifecycle each hook
//!   publishes through a `tokio::sync::watch` channel.
//!
//! ## Example
//!
//! ```rust,no_run
//! use admin_hooks::{AdminContext, BackendConfig, History, MemoryStorage, RoleOptionQuery};
//! use admin_hooks::proto::admin_user::RoleOptionRequest;
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = BackendConfig::from_env()?;
//! let ctx = AdminContext::connect_lazy(
//!     &config,
//!     Arc::new(MemoryStorage::default()),
//!     Arc::new(History::default()),
//! )?;
//!
//! let _roles = RoleOptionQuery::new(&ctx).fetch(RoleOptionRequest {}).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Re-exports
//!
//! The generated bindings are re-exported as [`proto`], together with `tonic`, so
//! consumers build requests against the same versions the hooks use.
pub mod auth;
pub mod config;
pub mod context;
pub mod hooks;
pub mod lifecycle;
pub mod navigation;
pub mod object;
pub mod storage;

pub use config::{BackendConfig, ConfigError};
pub use context::{AdminContext, ConnectError};
pub use hooks::{
    ContentPaginateQuery, DeleteContentMutation, ForgotPasswordMutation, GetContentQuery,
    HookError, PutContentIdentifierMutation, RoleOptionQuery,
};
pub use lifecycle::QueryState;
pub use navigation::{History, Navigator, Route};
pub use storage::{FileStorage, LocalStorage, MemoryStorage, StorageError, TOKEN_KEY};

// Re-exports
pub use admin_proto as proto;
pub use tonic;

/// Type alias for the standard boxed error used in generic bounds.
type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;
