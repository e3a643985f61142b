//! Shared helpers for products-axum integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use products_axum::{AxumContext, CorsConfig, create_router};
use products_db::TestDb;

/// Build a router over a fresh in-memory database.
pub async fn test_app() -> Router {
    let db = TestDb::new().await.expect("in-memory database");
    let ctx = AxumContext::new(Arc::new(db.app_core()));
    create_router(ctx, &CorsConfig::AllowAll)
}

/// Send a request and return the status and the raw body.
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

/// Send a request and decode a JSON response body.
pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    let value = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Create a product through the API and return its id.
pub async fn create_product(app: &Router, name: &str, price: &str) -> i64 {
    let body = format!(r#"{{"name":"{name}","price":"{price}"}}"#);
    let (status, json) = send_json(app, "POST", "/products", Some(&body)).await;
    assert_eq!(status, StatusCode::OK);
    json["id"].as_i64().unwrap()
}
