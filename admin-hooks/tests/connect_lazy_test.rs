use admin_backend_impl::AdminBackendImpl;
use admin_hooks::proto::admin_user::RoleOptionRequest;
use admin_hooks::proto::admin_user::admin_user_server::AdminUserServer;
use admin_hooks::{
    AdminContext, BackendConfig, HookError, History, MemoryStorage, RoleOptionQuery,
};
use std::sync::Arc;
use tonic::Code;
use tonic::transport::Server;


async fn spawn_server(backend: AdminBackendImpl) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();

    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        Server::builder()
            .add_service(AdminUserServer::new(backend))
            .serve_with_incoming(tokio_stream::wrappers::TcpListenerStream::new(listener))
            .await
            .unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_role_option_over_lazy_channel() {
    let backend = AdminBackendImpl::answering(true);
    let url = spawn_server(backend.clone()).await;

    let config = BackendConfig::new(url).unwrap();
    let ctx = AdminContext::connect_lazy(
        &config,
        Arc::new(MemoryStorage::with_token("t")),
        Arc::new(History::default()),
    )
    .unwrap();
    let query = RoleOptionQuery::new(&ctx);

    let value = query
        .fetch(RoleOptionRequest {})
        .await
        .unwrap()
        .expect("truthy status should return data");

    assert_eq!(value["status"], serde_json::json!(true));
    assert_eq!(
        value["dataList"][0]["value"],
        serde_json::json!("administrator")
    );
    assert_eq!(
        backend.seen_authorization(),
        vec![Some("Bearer t".to_string())]
    );
    assert!(query.state().is_success());
}

#[tokio::test]
async fn test_unreachable_backend_moves_to_error_state() {
    // Nothing listens on port 1.
    let config = BackendConfig::new("http://127.0.0.1:1").unwrap();
    let ctx = AdminContext::connect_lazy(
        &config,
        Arc::new(MemoryStorage::with_token("t")),
        Arc::new(History::default()),
    )
    .unwrap();
    let query = RoleOptionQuery::new(&ctx);

    let err = query.fetch(RoleOptionRequest {}).await.unwrap_err();

    match err {
        HookError::Status(status) => assert_eq!(status.code(), Code::Unavailable),
        other => panic!("Expected a status error, got {other:?}"),
    }
    assert!(query.state().is_error());
}
