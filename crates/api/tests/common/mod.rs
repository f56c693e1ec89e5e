#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use http_body_util::BodyExt;
use museum_api::auth::basic::ApiCredentials;
use museum_api::config::ServerConfig;
use museum_api::router::build_app_router;
use museum_api::state::AppState;
use museum_db::ConnectionProvider;
use sqlx::PgPool;
use tower::ServiceExt;

pub const TEST_USERNAME: &str = "curator";
pub const TEST_PASSWORD: &str = "s3cret";

/// Build a test `ServerConfig` with safe defaults and known credentials.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_connect_timeout_secs: 5,
        db_statement_timeout_secs: 10,
        credentials: ApiCredentials::new(TEST_USERNAME, TEST_PASSWORD),
    }
}

/// Build the full application router against the test database behind `pool`.
///
/// Handlers open their own connections from the pool's connect options, so
/// this exercises the same per-request connection lifecycle production uses.
pub fn build_test_app(pool: &PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        db: ConnectionProvider::new((*pool.connect_options()).clone()),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// `Authorization` header value for the given credentials.
pub fn basic_header(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
}

/// `Authorization` header value the test app accepts.
pub fn valid_auth() -> String {
    basic_header(TEST_USERNAME, TEST_PASSWORD)
}

/// Send a request with an optional auth header and optional JSON body.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    auth: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(auth) = auth {
        builder = builder.header(AUTHORIZATION, auth);
    }

    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.oneshot(request).await.unwrap()
}

/// Unauthenticated GET.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

/// Authenticated GET.
pub async fn get_auth(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(valid_auth().as_str()), None).await
}

/// Authenticated POST with a JSON body.
pub async fn post_json_auth(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(valid_auth().as_str()), Some(body)).await
}

/// Authenticated PUT with a JSON body.
pub async fn put_json_auth(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(valid_auth().as_str()), Some(body)).await
}

/// Authenticated DELETE.
pub async fn delete_auth(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(valid_auth().as_str()), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The Louvre payload used throughout the scenario tests.
pub fn louvre() -> serde_json::Value {
    serde_json::json!({
        "name": "Louvre",
        "location": "Paris",
        "description": "Art museum",
        "image_url": "http://x/img.png",
    })
}
