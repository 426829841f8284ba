//! Shared harness for API integration tests.
//!
//! Builds the application through [`build_app_router`] so tests exercise
//! the exact middleware stack production uses, plus small request helpers
//! so individual tests stay focused on behaviour.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use carteira_api::config::ServerConfig;
use carteira_api::router::build_app_router;
use carteira_api::state::AppState;
use carteira_api::store::ClientStore;

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
    }
}

/// Build the shared application state over the given pool.
///
/// The store starts with an empty cache, exactly like a fresh boot before
/// the initial load; call `state.store.load()` or hit `/clients/reload`
/// to populate it.
pub fn build_test_state(pool: PgPool) -> AppState {
    let event_bus = Arc::new(carteira_events::EventBus::default());
    let store = Arc::new(ClientStore::new(pool.clone(), Arc::clone(&event_bus)));

    AppState {
        pool,
        config: Arc::new(test_config()),
        store,
        event_bus,
    }
}

/// Build the full application router over a fresh state.
pub fn build_test_app(pool: PgPool) -> Router {
    app_from_state(build_test_state(pool))
}

/// Build the router over an existing state, for tests that also need to
/// reach into the store or event bus behind it.
pub fn app_from_state(state: AppState) -> Router {
    let config = test_config();
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request and return the raw response.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::POST, uri, body).await
}

/// Send a PUT request with a JSON body.
pub async fn put(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send_json(app, Method::PUT, uri, body).await
}

/// Send a DELETE request.
pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

async fn send_json(app: Router, method: Method, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert a response is an error with the given status and `code` field,
/// returning the parsed body for further message checks.
pub async fn assert_error(
    response: Response,
    status: StatusCode,
    code: &str,
) -> serde_json::Value {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert_eq!(json["code"], code);
    json
}
