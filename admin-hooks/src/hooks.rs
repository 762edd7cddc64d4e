//! # Hooks
//!
//! One adapter per admin RPC. All of them share the same shape:
//!
//! 1. Build a fresh generated client over the context's transport.
//! 2. Issue exactly one unary call, with `authorization: Bearer <token>` when the
//!    endpoint sits behind the backend's auth interceptor.
//! 3. Inspect the response `status` flag.
//!
//! Queries return the plain JSON form of a truthy response and `None` (with a
//! warning) for a falsy one. Mutations redirect on a truthy response and stay put
//! otherwise. A falsy status is never an error; only a failed call is. Nothing is
//! retried.
mod content_paginate;
mod delete_content;
mod forgot_password;
mod get_content;
mod put_content_identifier;
mod role_option;

pub use content_paginate::ContentPaginateQuery;
pub use delete_content::DeleteContentMutation;
pub use forgot_password::ForgotPasswordMutation;
pub use get_content::GetContentQuery;
pub use put_content_identifier::PutContentIdentifierMutation;
pub use role_option::RoleOptionQuery;

use crate::lifecycle::Lifecycle;
use crate::navigation::{Navigator, Route};
use crate::object::{ObjectError, to_object};
use admin_proto::{admin_user, auth, content};
use prost::{Message, Name};
use std::sync::Arc;
use tonic::metadata::errors::InvalidMetadataValue;

/// Errors surfaced by a hook call. Clonable so it can live in a [`crate::QueryState`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum HookError {
    #[error("Stored token cannot be sent as a bearer header: '{0}'")]
    InvalidToken(#[source] Arc<InvalidMetadataValue>),
    #[error("gRPC call failed: '{0}'")]
    Status(#[from] tonic::Status),
    #[error("Failed to render response as a plain object: '{0}'")]
    Object(#[source] Arc<ObjectError>),
}

impl From<InvalidMetadataValue> for HookError {
    fn from(err: InvalidMetadataValue) -> Self {
        HookError::InvalidToken(Arc::new(err))
    }
}

impl From<ObjectError> for HookError {
    fn from(err: ObjectError) -> Self {
        HookError::Object(Arc::new(err))
    }
}

/// The success flag every admin response carries.
pub trait StatusFlag {
    fn succeeded(&self) -> bool;
}

macro_rules! impl_status_flag {
    ($($ty:path),+ $(,)?) => {
        $(
            impl StatusFlag for $ty {
                fn succeeded(&self) -> bool {
                    self.status
                }
            }
        )+
    };
}

impl_status_flag!(
    admin_user::RoleOptionResponse,
    auth::ForgotPasswordResponse,
    content::ContentPaginateResponse,
    content::GetContentResponse,
    content::DeleteContentResponse,
    content::PutContentIdentifierResponse,
);

/// Drives a query call through its lifecycle.
async fn run_query<R>(
    query_key: &str,
    lifecycle: &Lifecycle<Option<serde_json::Value>>,
    call: impl Future<Output = Result<R, HookError>>,
) -> Result<Option<serde_json::Value>, HookError>
where
    R: Message + Name + StatusFlag,
{
    let generation = lifecycle.pending();

    let result = match call.await {
        Ok(response) if response.succeeded() => {
            to_object(&response).map(Some).map_err(Into::into)
        }
        Ok(_) => {
            tracing::warn!(query_key, "query answered with a falsy status, returning no data");
            Ok(None)
        }
        Err(err) => Err(err),
    };

    if let Err(err) = &result {
        tracing::error!(query_key, %err, "query failed");
    }

    lifecycle.settle(generation, &result);
    result
}

/// Drives a mutation call through its lifecycle, redirecting to `on_success` when the
/// response status is truthy.
async fn run_mutation<R>(
    mutation: &str,
    lifecycle: &Lifecycle<R>,
    navigator: &dyn Navigator,
    on_success: Route,
    call: impl Future<Output = Result<R, HookError>>,
) -> Result<R, HookError>
where
    R: Clone + StatusFlag,
{
    let generation = lifecycle.pending();

    let result = call.await;
    match &result {
        Ok(response) if response.succeeded() => navigator.navigate(on_success),
        Ok(_) => tracing::debug!(mutation, "mutation answered with a falsy status"),
        Err(err) => tracing::error!(mutation, %err, "mutation failed"),
    }

    lifecycle.settle(generation, &result);
    result
}
