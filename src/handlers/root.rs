use axum::{extract::State, http::{StatusCode, Uri}, response::Json};
use tracing::{instrument, warn};
use crate::schemas::{AppState, ErrorResponse, WelcomeResponse};

/// Root endpoint pointing clients at the API documentation
#[utoipa::path(
    get,
    path = "/",
    tag = "meta",
    responses(
        (status = 200, description = "Welcome message", body = WelcomeResponse)
    )
)]
#[instrument(skip(state))]
pub async fn root(State(state): State<AppState>) -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: format!(
            "Welcome to {} API. Visit /api/docs for documentation.",
            state.settings.app_name
        ),
    })
}

/// Fallback for paths with no registered route
pub async fn not_found(uri: Uri) -> (StatusCode, Json<ErrorResponse>) {
    warn!("No route for {}", uri.path());
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("No route for {}", uri.path()),
            code: "NOT_FOUND".to_string(),
            success: false,
        }),
    )
}
