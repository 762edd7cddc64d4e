use admin_backend_impl::AdminBackendImpl;
use admin_hooks::proto::content::content_server::ContentServer;
use admin_hooks::proto::content::{
    ContentPaginateRequest, DeleteContentRequest, GetContentRequest, PutContentIdentifierRequest,
};
use admin_hooks::{
    AdminContext, ContentPaginateQuery, DeleteContentMutation, GetContentQuery, History,
    MemoryStorage, PutContentIdentifierMutation,
};
use serde_json::json;
use std::sync::Arc;
use tonic::Code;


fn setup(
    backend: &AdminBackendImpl,
) -> (AdminContext<ContentServer<AdminBackendImpl>>, Arc<History>) {
    let history = Arc::new(History::starting_at("/admin/content/c1"));
    let ctx = AdminContext::from_service(
        ContentServer::new(backend.clone()),
        Arc::new(MemoryStorage::with_token("secret")),
        history.clone(),
    );
    (ctx, history)
}

#[tokio::test]
async fn test_delete_redirects_to_listing_of_its_type() {
    let backend = AdminBackendImpl::answering(true);
    let (ctx, history) = setup(&backend);

    DeleteContentMutation::new(&ctx)
        .mutate(DeleteContentRequest {
            content_id: "c1".to_string(),
            content_type: "article".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(history.location(), "/admin/content?type=article");
    assert_eq!(
        backend.seen_authorization(),
        vec![Some("Bearer secret".to_string())]
    );
}

#[tokio::test]
async fn test_delete_with_falsy_status_stays_on_page() {
    let backend = AdminBackendImpl::answering(false);
    let (ctx, history) = setup(&backend);

    let response = DeleteContentMutation::new(&ctx)
        .mutate(DeleteContentRequest {
            content_id: "c1".to_string(),
            content_type: "article".to_string(),
        })
        .await
        .unwrap();

    assert!(!response.status);
    assert_eq!(history.entries(), vec!["/admin/content/c1"]);
}

#[tokio::test]
async fn test_delete_failure_does_not_redirect() {
    let backend = AdminBackendImpl::failing(Code::PermissionDenied);
    let (ctx, history) = setup(&backend);
    let mutation = DeleteContentMutation::new(&ctx);

    let result = mutation
        .mutate(DeleteContentRequest {
            content_id: "c1".to_string(),
            content_type: "page".to_string(),
        })
        .await;

    assert!(result.is_err());
    assert_eq!(history.location(), "/admin/content/c1");
    assert!(mutation.state().is_error());
}

#[tokio::test]
async fn test_put_identifier_redirects_to_listing() {
    let backend = AdminBackendImpl::answering(true);
    let (ctx, history) = setup(&backend);
    let mutation = PutContentIdentifierMutation::new(&ctx);

    let response = mutation
        .mutate(PutContentIdentifierRequest {
            content_id: "c1".to_string(),
            identifier: "about-us-new".to_string(),
            content_type: "page".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(response.data.unwrap().identifier, "about-us-new");
    // The content type of the request does not filter the listing.
    assert_eq!(history.location(), "/admin/content");
    assert_eq!(
        backend.seen_authorization(),
        vec![Some("Bearer secret".to_string())]
    );
    assert!(mutation.state().is_success());
}

#[tokio::test]
async fn test_paginate_returns_plain_object() {
    let backend = AdminBackendImpl::answering(true);
    let (ctx, history) = setup(&backend);
    let query = ContentPaginateQuery::new(&ctx);

    let value = query
        .fetch(ContentPaginateRequest {
            content_type: "article".to_string(),
            page: None,
            order: Some("name:asc".to_string()),
        })
        .await
        .unwrap()
        .expect("truthy status should return data");

    assert_eq!(value["status"], json!(true));
    assert_eq!(value["data"]["pagination"]["total"], json!(1));
    assert_eq!(value["data"]["dataList"][0]["contentType"], json!("article"));
    assert_eq!(value["data"]["dataList"][0]["createdAt"], json!(1_700_000_000));
    // Queries never navigate.
    assert_eq!(history.entries(), vec!["/admin/content/c1"]);
}

#[tokio::test]
async fn test_get_content_with_falsy_status_returns_nothing() {
    let backend = AdminBackendImpl::answering(false);
    let (ctx, _history) = setup(&backend);
    let query = GetContentQuery::new(&ctx);

    let value = query
        .fetch(GetContentRequest {
            content_id: "c1".to_string(),
            content_type: "page".to_string(),
        })
        .await
        .unwrap();

    assert!(value.is_none());
    assert_eq!(
        backend.seen_authorization(),
        vec![Some("Bearer secret".to_string())]
    );
}

#[tokio::test]
async fn test_get_content_returns_entry() {
    let backend = AdminBackendImpl::answering(true);
    let (ctx, _history) = setup(&backend);
    let query = GetContentQuery::new(&ctx);

    let value = query
        .fetch(GetContentRequest {
            content_id: "c42".to_string(),
            content_type: "page".to_string(),
        })
        .await
        .unwrap()
        .expect("truthy status should return data");

    assert_eq!(value["data"]["id"], json!("c42"));
    assert_eq!(value["data"]["identifier"], json!("about-us"));
    assert_eq!(value["data"]["contentFieldsList"], json!([]));
}

#[test]
fn test_query_keys() {
    let request = ContentPaginateRequest {
        content_type: "article".to_string(),
        page: Some(2),
        order: None,
    };
    assert_eq!(
        ContentPaginateQuery::<ContentServer<AdminBackendImpl>>::query_key(&request),
        "content-table-article-2"
    );

    let request = GetContentRequest {
        content_id: "c1".to_string(),
        content_type: "page".to_string(),
    };
    assert_eq!(
        GetContentQuery::<ContentServer<AdminBackendImpl>>::query_key(&request),
        "content-c1"
    );
}
