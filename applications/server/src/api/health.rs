/// Health check API routes
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub message: String,
}

/// GET / - Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "Backend API running".to_string(),
    })
}
