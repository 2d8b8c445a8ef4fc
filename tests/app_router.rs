mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use tower::ServiceExt;

async fn send(
    repo: std::sync::Arc<shorty::infrastructure::persistence::SqliteUrlRepository>,
    method: Method,
    uri: &str,
    body: &str,
) -> (StatusCode, Option<String>) {
    let app = common::create_test_app(repo);
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    (response.status(), location)
}

#[tokio::test]
async fn test_redirect_through_app_router() {
    let (repo, _dir) = common::setup_database().await;

    let (status, location) = send(repo, Method::GET, "/test", "").await;

    assert_eq!(status, StatusCode::PERMANENT_REDIRECT);
    assert_eq!(location.as_deref(), Some("https://test.local/"));
}

#[tokio::test]
async fn test_redirect_with_extra_leading_slash() {
    let (repo, _dir) = common::setup_database().await;

    let (status, location) = send(repo, Method::GET, "//test", "").await;

    assert_eq!(status, StatusCode::PERMANENT_REDIRECT);
    assert_eq!(location.as_deref(), Some("https://test.local/"));
}

#[tokio::test]
async fn test_redirect_with_trailing_slash() {
    let (repo, _dir) = common::setup_database().await;

    let (status, location) = send(repo, Method::GET, "/test/", "").await;

    assert_eq!(status, StatusCode::PERMANENT_REDIRECT);
    assert_eq!(location.as_deref(), Some("https://test.local/"));
}

#[tokio::test]
async fn test_add_then_redirect_through_app_router() {
    let (repo, _dir) = common::open_empty_database().await;

    let (status, _) = send(
        repo.clone(),
        Method::POST,
        "/add",
        r#"{"Shorthand":"foo","Target":"https://bar.local/"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, location) = send(repo, Method::GET, "/foo", "").await;
    assert_eq!(status, StatusCode::PERMANENT_REDIRECT);
    assert_eq!(location.as_deref(), Some("https://bar.local/"));
}

#[tokio::test]
async fn test_reserved_shorthand_rejected_through_app_router() {
    let (repo, _dir) = common::open_empty_database().await;

    let (status, _) = send(
        repo,
        Method::POST,
        "/add",
        r#"{"Shorthand":"add","Target":"https://bar.local/"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
