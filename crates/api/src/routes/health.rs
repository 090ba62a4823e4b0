use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Service name reported by the health endpoint; orchestration health
/// checks match on it.
pub const SERVICE_NAME: &str = "photo-generator";

/// Human-readable API title reported by the root banner.
pub const API_TITLE: &str = "Photo Generator API";

/// Root banner payload.
#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub status: &'static str,
}

/// Liveness payload.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// GET / -- fixed service banner.
async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: API_TITLE,
        status: "running",
    })
}

/// GET /health -- fixed liveness probe. The service holds no state and has
/// no dependencies, so this can never report anything but healthy.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
    })
}

/// Mount the root banner and health check routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}
