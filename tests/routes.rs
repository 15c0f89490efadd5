use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
use axum_coworking_api::{
    error::AppError,
    routes::{health::health_check, sitemap::sitemap},
};

#[tokio::test]
async fn health_check_returns_ok() {
    let response = health_check().await;
    assert_eq!(response.0.status, "ok");
}

#[tokio::test]
async fn sitemap_lists_every_resource_route() {
    let response = sitemap().await;
    let routes = response.0;

    for path in [
        "/enterprises",
        "/enterprise/{id}",
        "/brands",
        "/brand/{id}",
        "/schedules",
        "/schedule/{id}",
        "/spaces",
        "/space/{id}",
        "/spacetypes",
        "/spacetype/{id}",
        "/equipments",
        "/equipment/{id}",
    ] {
        assert!(
            routes.iter().any(|r| r.path == path),
            "missing route {path}"
        );
    }

    let collection = routes.iter().find(|r| r.path == "/enterprises").unwrap();
    assert_eq!(collection.methods, ["GET", "POST"]);
    let item = routes.iter().find(|r| r.path == "/enterprise/{id}").unwrap();
    assert_eq!(item.methods, ["GET", "PUT"]);
}

#[tokio::test]
async fn not_found_error_uses_message_and_status_code_body() {
    let response = AppError::NotFound("Enterprise").into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["message"], "Enterprise not found");
    assert_eq!(body["status_code"], 404);
}
