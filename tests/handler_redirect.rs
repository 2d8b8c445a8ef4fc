mod common;

#[tokio::test]
async fn test_redirect_success() {
    let (repo, _dir) = common::setup_database().await;
    let server = common::create_test_server(repo);

    let response = server.get("/test").await;

    assert_eq!(response.status_code(), 308);

    let location = response.header("location");
    assert_eq!(location, "https://test.local/");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (repo, _dir) = common::setup_database().await;
    let server = common::create_test_server(repo);

    let response = server.get("/unknown").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["shorthand"], "unknown");
}

#[tokio::test]
async fn test_redirect_on_empty_registry() {
    let (repo, _dir) = common::open_empty_database().await;
    let server = common::create_test_server(repo);

    let response = server.get("/foo").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_nested_shorthand() {
    let (repo, _dir) = common::open_empty_database().await;
    let server = common::create_test_server(repo);

    server
        .post("/add")
        .json(&serde_json::json!({ "Shorthand": "docs/intro", "Target": "https://docs.local/" }))
        .await
        .assert_status_ok();

    let response = server.get("/docs/intro").await;

    assert_eq!(response.status_code(), 308);
    assert_eq!(response.header("location"), "https://docs.local/");
}

#[tokio::test]
async fn test_redirect_store_failure_returns_500() {
    let (repo, _dir) = common::setup_database().await;
    repo.close().await;
    let server = common::create_test_server(repo);

    let response = server.get("/test").await;

    assert_eq!(response.status_code(), 500);
}
