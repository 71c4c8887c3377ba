use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace};

use crate::config::{parse_bind_address, Settings};
use crate::router::create_router;
use crate::schemas::AppState;

pub async fn serve(bind_address: &str) -> Result<()> {
    trace!("Entering serve function");
    info!("Budg application starting up");
    debug!("Bind address: {}", bind_address);

    let address = parse_bind_address(bind_address)?;

    trace!("Loading settings");
    let settings = match Settings::load() {
        Ok(settings) => {
            debug!("Settings loaded: {:?}", settings);
            settings
        }
        Err(e) => {
            error!("Failed to load settings: {}", e);
            return Err(e.into());
        }
    };

    let redis = match settings.redis_endpoint() {
        Ok(endpoint) => endpoint,
        Err(e) => {
            error!("Invalid Redis configuration: {}", e);
            return Err(e.into());
        }
    };
    info!(
        environment = %settings.environment,
        redis_host = %redis.host,
        redis_port = redis.port,
        redis_db = redis.db,
        "Configuration validated"
    );

    trace!("Creating application router");
    let app = create_router(AppState::new(settings))?;
    debug!("Router created successfully");

    info!("Starting server on {}", address);
    let listener = match TcpListener::bind(address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", address, e);
            return Err(e.into());
        }
    };

    info!("Budg API server running on http://{}", address);
    info!("API documentation available at http://{}/api/docs", address);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
