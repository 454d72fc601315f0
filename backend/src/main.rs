//! Service entry-point: wires logging, configuration, and the HTTP server.

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use person_api::api::health::HealthState;
use person_api::config::AppConfig;
use person_api::server::create_server;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;
    info!(addr = %config.bind_addr, "starting person api");
    let health = web::Data::new(HealthState::new());
    create_server(health, config)?.await
}
