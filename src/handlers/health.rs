use axum::{extract::State, response::Json};
use tracing::instrument;
use crate::schemas::{AppState, HealthResponse};

/// Health check endpoint for container orchestration and monitoring
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.settings.app_version.clone(),
        environment: state.settings.environment.clone(),
    })
}
