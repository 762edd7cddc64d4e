use super::{HookError, run_mutation};
use crate::{
    BoxError, QueryState, auth::authorized, context::AdminContext, lifecycle::Lifecycle,
    navigation::Route,
};
use admin_proto::content::{
    PutContentIdentifierRequest, PutContentIdentifierResponse, content_client::ContentClient,
};
use http_body::Body as HttpBody;
use tokio::sync::watch;
use tonic::transport::Channel;

/// Renames the identifier of a content entry, then returns to the content listing.
pub struct PutContentIdentifierMutation<S = Channel> {
    ctx: AdminContext<S>,
    lifecycle: Lifecycle<PutContentIdentifierResponse>,
}

impl<S: Clone> PutContentIdentifierMutation<S> {
    pub fn new(ctx: &AdminContext<S>) -> Self {
        Self {
            ctx: ctx.clone(),
            lifecycle: Lifecycle::new(),
        }
    }

    pub fn state(&self) -> QueryState<PutContentIdentifierResponse> {
        self.lifecycle.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<QueryState<PutContentIdentifierResponse>> {
        self.lifecycle.subscribe()
    }
}

impl<S> PutContentIdentifierMutation<S>
where
    S: tonic::client::GrpcService<tonic::body::Body> + Clone,
    S::Error: Into<BoxError>,
    S::ResponseBody: HttpBody<Data = tonic::codegen::Bytes> + Send + 'static,
    <S::ResponseBody as HttpBody>::Error: Into<BoxError> + Send,
{
    /// Calls `Content/PutContentIdentifier` with the stored bearer token.
    ///
    /// Redirects to `/admin/content` when the response status is truthy, whatever the
    /// returned content looks like.
    pub async fn mutate(
        &self,
        request: PutContentIdentifierRequest,
    ) -> Result<PutContentIdentifierResponse, HookError> {
        let mut client = ContentClient::new(self.ctx.service());
        let storage = self.ctx.storage();

        run_mutation(
            "put-content-identifier",
            &self.lifecycle,
            self.ctx.navigator(),
            Route::content_list(),
            async move {
                let request = authorized(request, storage)?;
                Ok::<_, HookError>(client.put_content_identifier(request).await?.into_inner())
            },
        )
        .await
    }
}
