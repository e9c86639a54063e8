//! HTTP surface of the gateway: middleware and the handful of routes it serves itself.

pub mod middleware;
pub mod services;

use actix_web::web;

use crate::gateway::GatewayHandle;
use services::{AppStartTime, health_routes, not_found};

/// Register the gateway's own routes and shared state.
///
/// Used by the server and by integration tests so both see the same routing.
pub fn configure(
    health_prefix: &str,
    gateway: GatewayHandle,
    app_start_time: AppStartTime,
) -> impl FnOnce(&mut web::ServiceConfig) {
    let health_prefix = health_prefix.to_string();
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(gateway))
            .app_data(web::Data::new(app_start_time))
            .service(health_routes(&health_prefix))
            .default_service(web::to(not_found));
    }
}
