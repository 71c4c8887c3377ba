use crate::config::Settings;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Settings loaded at startup, immutable afterwards
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Deployment environment (development, production, ...)
    pub environment: String,
}

/// Root endpoint response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WelcomeResponse {
    pub message: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::root::root,
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            WelcomeResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "meta", description = "Service information"),
    ),
    info(
        title = "Budg API",
        description = "API for Budg - A web-based budgeting application",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
