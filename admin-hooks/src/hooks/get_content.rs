use super::{HookError, run_query};
use crate::{BoxError, QueryState, auth::authorized, context::AdminContext, lifecycle::Lifecycle};
use admin_proto::content::{GetContentRequest, content_client::ContentClient};
use http_body::Body as HttpBody;
use tokio::sync::watch;
use tonic::transport::Channel;

/// Fetches a single content entry, as shown on its edit page.
pub struct GetContentQuery<S = Channel> {
    ctx: AdminContext<S>,
    lifecycle: Lifecycle<Option<serde_json::Value>>,
}

impl<S: Clone> GetContentQuery<S> {
    pub fn new(ctx: &AdminContext<S>) -> Self {
        Self {
            ctx: ctx.clone(),
            lifecycle: Lifecycle::new(),
        }
    }

    pub fn query_key(request: &GetContentRequest) -> String {
        format!("content-{}", request.content_id)
    }

    pub fn state(&self) -> QueryState<Option<serde_json::Value>> {
        self.lifecycle.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<QueryState<Option<serde_json::Value>>> {
        self.lifecycle.subscribe()
    }
}

impl<S> GetContentQuery<S>
where
    S: tonic::client::GrpcService<tonic::body::Body> + Clone,
    S::Error: Into<BoxError>,
    S::ResponseBody: HttpBody<Data = tonic::codegen::Bytes> + Send + 'static,
    <S::ResponseBody as HttpBody>::Error: Into<BoxError> + Send,
{
    /// Calls `Content/GetContent` with the stored bearer token.
    pub async fn fetch(
        &self,
        request: GetContentRequest,
    ) -> Result<Option<serde_json::Value>, HookError> {
        let query_key = Self::query_key(&request);
        let mut client = ContentClient::new(self.ctx.service());
        let storage = self.ctx.storage();

        run_query(&query_key, &self.lifecycle, async move {
            let request = authorized(request, storage)?;
            Ok::<_, HookError>(client.get_content(request).await?.into_inner())
        })
        .await
    }
}
