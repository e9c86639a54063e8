//! Server mode
//!
//! Builds the actix `HttpServer`: request id -> short-link gateway -> routes.

use actix_web::{App, HttpServer};
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::warn;

use crate::api::{
    self,
    middleware::{RequestIdMiddleware, ShortLinkGateway},
    services::AppStartTime,
};
use crate::config::get_config;
use crate::runtime::lifetime::{reload, shutdown, startup};

const MAX_WORKERS: usize = 32;

/// Run the HTTP server until a shutdown signal arrives.
///
/// **Note**: Logging must be initialized before calling this function.
pub async fn run_server() -> Result<()> {
    let app_start_time = AppStartTime::now();
    let config = get_config();

    let gateway = startup::prepare_gateway(&config);
    let health_prefix = config.server.health_prefix.clone();
    reload::setup_reload_mechanism(gateway.clone(), health_prefix.clone());

    let workers = config.server.cpu_count.clamp(1, MAX_WORKERS);
    warn!("Using {} worker threads", workers);

    let bind_address = format!("{}:{}", config.server.host, config.server.port);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(ShortLinkGateway::new(gateway.clone()))
            .wrap(RequestIdMiddleware)
            .configure(api::configure(
                &health_prefix,
                gateway.clone(),
                app_start_time.clone(),
            ))
    })
    .keep_alive(Duration::from_secs(30))
    .client_request_timeout(Duration::from_millis(5000))
    .client_disconnect_timeout(Duration::from_millis(1000))
    .shutdown_timeout(shutdown::SHUTDOWN_TIMEOUT_SECS)
    .disable_signals()
    .workers(workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    warn!("Starting server at http://{}", bind_address);

    tokio::spawn(shutdown::listen_for_shutdown(server.handle()));
    server.await.context("HTTP server terminated with an error")?;

    Ok(())
}
