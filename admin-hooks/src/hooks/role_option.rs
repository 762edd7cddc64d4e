use super::{HookError, run_query};
use crate::{BoxError, QueryState, auth::authorized, context::AdminContext, lifecycle::Lifecycle};
use admin_proto::admin_user::{RoleOptionRequest, admin_user_client::AdminUserClient};
use http_body::Body as HttpBody;
use tokio::sync::watch;
use tonic::transport::Channel;

/// Fetches the role options offered when creating or editing an admin user.
pub struct RoleOptionQuery<S = Channel> {
    ctx: AdminContext<S>,
    lifecycle: Lifecycle<Option<serde_json::Value>>,
}

impl<S: Clone> RoleOptionQuery<S> {
    pub const QUERY_KEY: &'static str = "role-option";

    pub fn new(ctx: &AdminContext<S>) -> Self {
        Self {
            ctx: ctx.clone(),
            lifecycle: Lifecycle::new(),
        }
    }

    pub fn state(&self) -> QueryState<Option<serde_json::Value>> {
        self.lifecycle.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<QueryState<Option<serde_json::Value>>> {
        self.lifecycle.subscribe()
    }
}

impl<S> RoleOptionQuery<S>
where
    S: tonic::client::GrpcService<tonic::body::Body> + Clone,
    S::Error: Into<BoxError>,
    S::ResponseBody: HttpBody<Data = tonic::codegen::Bytes> + Send + 'static,
    <S::ResponseBody as HttpBody>::Error: Into<BoxError> + Send,
{
    /// Calls `AdminUser/RoleOption` with the stored bearer token.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Value))` - The response as a plain object, when its status is truthy.
    /// * `Ok(None)` - The backend answered with a falsy status.
    /// * `Err(HookError)` - The token could not be sent or the call failed.
    pub async fn fetch(
        &self,
        request: RoleOptionRequest,
    ) -> Result<Option<serde_json::Value>, HookError> {
        let mut client = AdminUserClient::new(self.ctx.service());
        let storage = self.ctx.storage();

        run_query(Self::QUERY_KEY, &self.lifecycle, async move {
            let request = authorized(request, storage)?;
            Ok::<_, HookError>(client.role_option(request).await?.into_inner())
        })
        .await
    }
}
