//! location-demo HTTP server.
//!
//! # Configuration
//!
//! - `SERVICE_PORT` - HTTP port (default: 8080)
//! - `LOCATION_PLACE_INDEX` - Amazon Location place index (default: my-place-index)
//! - `LOCATION_FILTER_COUNTRIES` - suggestion country filter (default: ISR)
//! - `AWS_REGION`, `AWS_PROFILE`, ... - standard AWS SDK configuration
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text
//! - `METRICS_ENABLED`, `METRICS_PATH` - Prometheus endpoint (default: enabled, /metrics)

use std::env;
use std::net::SocketAddr;

use tracing::info;

use location_demo_service::router;
use location_demo_service_shared::{
    init_logging, init_metrics, AppState, LoggingConfig, MetricsConfig, MetricsError,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logging_config = LoggingConfig::from_env().with_service("location-demo");
    init_logging(&logging_config);

    let metrics_config = MetricsConfig::from_env();
    match init_metrics(&metrics_config) {
        Ok(()) => info!(path = %metrics_config.path, "metrics enabled"),
        Err(MetricsError::Disabled) => info!("metrics disabled by configuration"),
        // The endpoint reports "not initialized" from here on.
        Err(e) => {
            tracing::warn!(error = %e, "failed to initialize metrics, continuing without metrics")
        }
    }

    let port: u16 = env::var("SERVICE_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    info!(port = port, "starting location-demo service");

    let state = AppState::from_env().await;
    info!(state = ?state, "application state ready");

    let app = router(state, &metrics_config.path);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
