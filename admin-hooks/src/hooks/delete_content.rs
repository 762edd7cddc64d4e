use super::{HookError, run_mutation};
use crate::{
    BoxError, QueryState, auth::authorized, context::AdminContext, lifecycle::Lifecycle,
    navigation::Route,
};
use admin_proto::content::{
    DeleteContentRequest, DeleteContentResponse, content_client::ContentClient,
};
use http_body::Body as HttpBody;
use tokio::sync::watch;
use tonic::transport::Channel;

/// Deletes a content entry, then returns to the listing of its content type.
pub struct DeleteContentMutation<S = Channel> {
    ctx: AdminContext<S>,
    lifecycle: Lifecycle<DeleteContentResponse>,
}

impl<S: Clone> DeleteContentMutation<S> {
    pub fn new(ctx: &AdminContext<S>) -> Self {
        Self {
            ctx: ctx.clone(),
            lifecycle: Lifecycle::new(),
        }
    }

    pub fn state(&self) -> QueryState<DeleteContentResponse> {
        self.lifecycle.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<QueryState<DeleteContentResponse>> {
        self.lifecycle.subscribe()
    }
}

impl<S> DeleteContentMutation<S>
where
    S: tonic::client::GrpcService<tonic::body::Body> + Clone,
    S::Error: Into<BoxError>,
    S::ResponseBody: HttpBody<Data = tonic::codegen::Bytes> + Send + 'static,
    <S::ResponseBody as HttpBody>::Error: Into<BoxError> + Send,
{
    /// Calls `Content/DeleteContent` with the stored bearer token.
    ///
    /// Redirects to `/admin/content?type=<content_type>` when the response status is
    /// truthy, using the content type of `request`.
    pub async fn mutate(
        &self,
        request: DeleteContentRequest,
    ) -> Result<DeleteContentResponse, HookError> {
        let on_success = Route::content_list_of(request.content_type.clone());
        let mut client = ContentClient::new(self.ctx.service());
        let storage = self.ctx.storage();

        run_mutation(
            "delete-content",
            &self.lifecycle,
            self.ctx.navigator(),
            on_success,
            async move {
                let request = authorized(request, storage)?;
                Ok::<_, HookError>(client.delete_content(request).await?.into_inner())
            },
        )
        .await
    }
}
