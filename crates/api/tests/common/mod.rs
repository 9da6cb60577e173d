#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use streetcode_api::config::ServerConfig;
use streetcode_api::router::build_app_router;
use streetcode_api::state::AppState;
use streetcode_db::memory::MemoryRepositories;
use streetcode_services::blob::MemoryBlobStorage;
use streetcode_services::context::AppContext;
use streetcode_services::dispatch::Dispatcher;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        blob_storage_path: "./blobs".to_string(),
        blob_encryption_key: None,
    }
}

/// Application under test plus handles to its backing stores for seeding
/// and assertions.
pub struct TestApp {
    pub router: Router,
    pub repos: MemoryRepositories,
    pub blobs: Arc<MemoryBlobStorage>,
}

/// Build the full application router over the in-memory repositories.
///
/// Goes through [`build_app_router`] so integration tests exercise the same
/// middleware stack (CORS, request ID, timeout, tracing, panic recovery)
/// that production uses.
pub fn build_test_app() -> TestApp {
    let config = test_config();
    let repos = MemoryRepositories::new();
    let blobs = Arc::new(MemoryBlobStorage::new());

    let ctx = AppContext::new(Arc::new(repos.clone()), blobs.clone());
    let state = AppState {
        dispatcher: Arc::new(Dispatcher::new(ctx)),
        config: Arc::new(config.clone()),
    };

    TestApp {
        router: build_app_router(state, &config),
        repos,
        blobs,
    }
}

pub async fn get(app: &TestApp, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: &TestApp, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: &TestApp, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: &TestApp, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

async fn send(app: &TestApp, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.router.clone().oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}
