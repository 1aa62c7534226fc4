/// Common test utilities and fixtures
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use roster_server::{api, state::AppState};
use serde_json::Value;
use tower::util::ServiceExt;
use tower_http::cors::CorsLayer;

/// Router over a fresh, empty store
pub fn create_test_app() -> Router {
    api::create_router(AppState::in_memory(), CorsLayer::permissive())
}

/// Send a request and decode the JSON body
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    send_request(app, request).await
}

/// Send a prepared request and decode the JSON body
pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

    (status, json)
}

pub mod fixtures {
    pub const ANN_NAME: &str = "Ann";
    pub const ANN_EMAIL: &str = "ann@x.com";
    pub const BO_NAME: &str = "Bo";
    pub const BO_EMAIL: &str = "bo@x.com";
}
