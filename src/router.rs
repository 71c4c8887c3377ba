use crate::config::{Settings, SettingsError};
use crate::handlers::{
    health::health_check,
    root::{not_found, root},
};
use crate::schemas::{ApiDoc, AppState};
use axum::{http::HeaderValue, routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::{predicate::SizeAbove, CompressionLayer},
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

/// Responses smaller than this are sent uncompressed
pub const GZIP_MINIMUM_SIZE: u16 = 1000;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Result<Router, SettingsError> {
    let cors = cors_layer(&state.settings)?;

    Ok(Router::new()
        .route("/health", get(health_check))
        .route("/", get(root))
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .merge(Redoc::with_url("/api/redoc", ApiDoc::openapi()))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new().gzip(true).compress_when(SizeAbove::new(GZIP_MINIMUM_SIZE)))
                .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
                .layer(cors),
        )
        .with_state(state))
}

/// CORS policy allowing credentialed requests from the configured origins.
///
/// Methods and headers are mirrored from the preflight request since a
/// wildcard cannot be combined with credentials.
pub fn cors_layer(settings: &Settings) -> Result<CorsLayer, SettingsError> {
    let origins = settings
        .cors_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin.trim())
                .map_err(|_| SettingsError::InvalidCorsOrigin(origin.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}
