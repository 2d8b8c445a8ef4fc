mod common;

#[tokio::test]
async fn test_health_endpoint_success() {
    let (repo, _dir) = common::open_empty_database().await;
    let server = common::create_test_server(repo);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_health_endpoint_degraded() {
    let (repo, _dir) = common::open_empty_database().await;
    repo.close().await;
    let server = common::create_test_server(repo);

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 503);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
}
