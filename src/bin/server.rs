//! Standalone Cargo Tracking API server.
//!
//! Serves the same routes as the serverless functions:
//!
//! - `GET /` - Service description
//! - `GET /health` - Health check
//! - `GET /api/track?code=CARGO_CODE` - Shipment lookup
//!
//! # Configuration
//!
//! - `PORT` - HTTP port (default: 3000)
//! - `HOST` - Listen address (default: 0.0.0.0)
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text

use cargo_tracking_api::config::ServerConfig;
use cargo_tracking_api::handlers::{ApiService, Environment};
use cargo_tracking_api::logging::{init_logging, LoggingConfig};
use cargo_tracking_api::server::{router, shutdown_signal};
use cargo_tracking_api::store::CargoStore;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(&LoggingConfig::from_env());

    let config = ServerConfig::from_env()?;
    let service = ApiService::with_sample_store(Environment::Standalone);
    info!(
        records = service.store().codes().len(),
        environment = %service.environment(),
        "record store loaded"
    );

    let app = router(service);
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(addr = %addr, version = cargo_tracking_api::version(), "cargo tracking API listening");
    info!("try: http://localhost:{}/api/track?code=CARGO123", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server shutdown complete");
    Ok(())
}
