use admin_backend_impl::AdminBackendImpl;
use admin_hooks::proto::auth::ForgotPasswordRequest;
use admin_hooks::proto::auth::auth_server::AuthServer;
use admin_hooks::{AdminContext, ForgotPasswordMutation, History, MemoryStorage};
use std::sync::Arc;
use tonic::Code;


fn setup(
    backend: &AdminBackendImpl,
) -> (
    ForgotPasswordMutation<AuthServer<AdminBackendImpl>>,
    Arc<History>,
) {
    let history = Arc::new(History::starting_at("/admin/forgot-password"));
    let ctx = AdminContext::from_service(
        AuthServer::new(backend.clone()),
        Arc::new(MemoryStorage::with_token("secret")),
        history.clone(),
    );
    (ForgotPasswordMutation::new(&ctx), history)
}

fn request() -> ForgotPasswordRequest {
    ForgotPasswordRequest {
        email: "admin@avored.com".to_string(),
    }
}

#[tokio::test]
async fn test_truthy_status_redirects_to_login() {
    let backend = AdminBackendImpl::answering(true);
    let (mutation, history) = setup(&backend);
    let location = history.subscribe();

    let response = mutation.mutate(request()).await.unwrap();

    assert!(response.status);
    assert_eq!(history.location(), "/admin/login");
    assert!(location.has_changed().unwrap());
    assert!(mutation.state().is_success());
}

#[tokio::test]
async fn test_falsy_status_stays_on_page() {
    let backend = AdminBackendImpl::answering(false);
    let (mutation, history) = setup(&backend);

    let response = mutation.mutate(request()).await.unwrap();

    assert!(!response.status);
    assert_eq!(history.entries(), vec!["/admin/forgot-password"]);
}

#[tokio::test]
async fn test_public_endpoint_sends_no_authorization() {
    let backend = AdminBackendImpl::answering(true);
    let (mutation, _history) = setup(&backend);

    mutation.mutate(request()).await.unwrap();

    assert_eq!(backend.seen_authorization(), vec![None]);
}

#[tokio::test]
async fn test_error_does_not_redirect() {
    let backend = AdminBackendImpl::failing(Code::Internal);
    let (mutation, history) = setup(&backend);

    let result = mutation.mutate(request()).await;

    assert!(result.is_err());
    assert_eq!(history.location(), "/admin/forgot-password");
    assert!(mutation.state().is_error());
}
