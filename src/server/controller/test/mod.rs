use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::server::{router, state::AppState};


fn app(db: &DatabaseConnection) -> Router {
    router::router(AppState::new(db.clone()))
}

/// Sends `request` through a clone of `app` and decodes the JSON body.
///
/// An empty body decodes to `Value::Null`. Every other body must be JSON.
async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn with_json(method: Method, uri: &str, body: Value) -> Request<Body> {
    with_raw_json(method, uri, body.to_string())
}

fn with_raw_json(method: Method, uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}
