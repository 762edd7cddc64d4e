use super::{HookError, run_mutation};
use crate::{
    BoxError, QueryState, context::AdminContext, lifecycle::Lifecycle, navigation::Route,
};
use admin_proto::auth::{ForgotPasswordRequest, ForgotPasswordResponse, auth_client::AuthClient};
use http_body::Body as HttpBody;
use tokio::sync::watch;
use tonic::transport::Channel;

/// Requests a password reset email, then sends the user back to the login page.
pub struct ForgotPasswordMutation<S = Channel> {
    ctx: AdminContext<S>,
    lifecycle: Lifecycle<ForgotPasswordResponse>,
}

impl<S: Clone> ForgotPasswordMutation<S> {
    pub fn new(ctx: &AdminContext<S>) -> Self {
        Self {
            ctx: ctx.clone(),
            lifecycle: Lifecycle::new(),
        }
    }

    pub fn state(&self) -> QueryState<ForgotPasswordResponse> {
        self.lifecycle.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<QueryState<ForgotPasswordResponse>> {
        self.lifecycle.subscribe()
    }
}

impl<S> ForgotPasswordMutation<S>
where
    S: tonic::client::GrpcService<tonic::body::Body> + Clone,
    S::Error: Into<BoxError>,
    S::ResponseBody: HttpBody<Data = tonic::codegen::Bytes> + Send + 'static,
    <S::ResponseBody as HttpBody>::Error: Into<BoxError> + Send,
{
    /// Calls `Auth/ForgotPassword`. The endpoint is public, so no bearer token is sent.
    ///
    /// Redirects to `/admin/login` when the response status is truthy.
    pub async fn mutate(
        &self,
        request: ForgotPasswordRequest,
    ) -> Result<ForgotPasswordResponse, HookError> {
        let mut client = AuthClient::new(self.ctx.service());

        run_mutation(
            "forgot-password",
            &self.lifecycle,
            self.ctx.navigator(),
            Route::Login,
            async move {
                Ok::<_, HookError>(client.forgot_password(request).await?.into_inner())
            },
        )
        .await
    }
}
