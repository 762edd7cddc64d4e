use super::{HookError, run_query};
use crate::{BoxError, QueryState, auth::authorized, context::AdminContext, lifecycle::Lifecycle};
use admin_proto::content::{ContentPaginateRequest, content_client::ContentClient};
use http_body::Body as HttpBody;
use tokio::sync::watch;
use tonic::transport::Channel;

/// Fetches one page of the content listing for a content type.
pub struct ContentPaginateQuery<S = Channel> {
    ctx: AdminContext<S>,
    lifecycle: Lifecycle<Option<serde_json::Value>>,
}

impl<S: Clone> ContentPaginateQuery<S> {
    pub fn new(ctx: &AdminContext<S>) -> Self {
        Self {
            ctx: ctx.clone(),
            lifecycle: Lifecycle::new(),
        }
    }

    /// Cache key of the listing, one per content type and page.
    pub fn query_key(request: &ContentPaginateRequest) -> String {
        format!(
            "content-table-{}-{}",
            request.content_type,
            request.page.unwrap_or(0)
        )
    }

    pub fn state(&self) -> QueryState<Option<serde_json::Value>> {
        self.lifecycle.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<QueryState<Option<serde_json::Value>>> {
        self.lifecycle.subscribe()
    }
}

impl<S> ContentPaginateQuery<S>
where
    S: tonic::client::GrpcService<tonic::body::Body> + Clone,
    S::Error: Into<BoxError>,
    S::ResponseBody: HttpBody<Data = tonic::codegen::Bytes> + Send + 'static,
    <S::ResponseBody as HttpBody>::Error: Into<BoxError> + Send,
{
    /// Calls `Content/ContentPaginate` with the stored bearer token.
    ///
    /// A missing `page` is the first page; `order` takes the form `column:direction`.
    pub async fn fetch(
        &self,
        request: ContentPaginateRequest,
    ) -> Result<Option<serde_json::Value>, HookError> {
        let query_key = Self::query_key(&request);
        let mut client = ContentClient::new(self.ctx.service());
        let storage = self.ctx.storage();

        run_query(&query_key, &self.lifecycle, async move {
            let request = authorized(request, storage)?;
            Ok::<_, HookError>(client.content_paginate(request).await?.into_inner())
        })
        .await
    }
}
