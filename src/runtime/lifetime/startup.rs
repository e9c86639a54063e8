use tracing::{info, warn};

use crate::config::StaticConfig;
use crate::gateway::{GatewayHandle, RedirectGateway};

/// Build the gateway for `config`.
///
/// `health_prefix` is reserved on top of the configured prefixes; reload passes
/// the prefix the server was started with since routes are fixed at startup.
pub fn build_gateway(config: &StaticConfig, health_prefix: &str) -> RedirectGateway {
    RedirectGateway::from_config(&config.gateway, [health_prefix])
}

/// Application routes from `gateway.app_routes` that would be shadowed.
pub fn shadowed_routes<'a>(config: &'a StaticConfig, gateway: &RedirectGateway) -> Vec<&'a str> {
    gateway
        .reserved()
        .uncovered(config.gateway.app_routes.iter().map(String::as_str))
}

/// 准备网关：构建、记录配置、对会被短码遮蔽的路由发出警告
pub fn prepare_gateway(config: &StaticConfig) -> GatewayHandle {
    let gateway = build_gateway(config, &config.server.health_prefix);
    log_gateway(config, &gateway);
    GatewayHandle::new(gateway)
}

pub fn log_gateway(config: &StaticConfig, gateway: &RedirectGateway) {
    match gateway.backend_base_url() {
        Some(base) => info!("Short-link redirects enabled, resolver: {}/r/{{code}}", base),
        None => warn!("gateway.backend_base_url not set, short-link redirects disabled"),
    }

    let reserved: Vec<&str> = gateway.reserved().iter().collect();
    info!("Reserved prefixes: {:?}", reserved);

    for route in shadowed_routes(config, gateway) {
        warn!(
            "Application route '{}' is not covered by any reserved prefix and will be treated as a short code",
            route
        );
    }
}
