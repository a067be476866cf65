//! Health check controller.

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use lobby_config::AppMetadata;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

/// Health check response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status.
    pub status: String,
    /// Service name.
    pub name: String,
    /// Application version.
    pub version: String,
    /// Deployment environment.
    pub environment: String,
}

/// Creates the health router.
pub fn router(app: &AppMetadata) -> Router {
    let health = Arc::new(HealthResponse {
        status: "healthy".to_string(),
        name: app.name.clone(),
        version: app.version.clone(),
        environment: app.environment.clone(),
    });

    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/live", get(liveness_check))
        .with_state(health)
}

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(State(health): State<Arc<HealthResponse>>) -> impl IntoResponse {
    Json(health.as_ref().clone())
}

/// Readiness check endpoint.
///
/// The store lives in process memory, so the service is ready once it serves.
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Service is ready")
    )
)]
pub async fn readiness_check() -> impl IntoResponse {
    StatusCode::OK
}

/// Liveness check endpoint.
#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    responses(
        (status = 200, description = "Service is alive")
    )
)]
pub async fn liveness_check() -> impl IntoResponse {
    StatusCode::OK
}
