//! Configuration reload
//!
//! Unix 下收到 SIGUSR1 时重新读取配置文件并原子替换网关；
//! 读取失败时保留当前网关。

use std::sync::Arc;
use tracing::{error, info};

use super::startup::{build_gateway, log_gateway};
use crate::config::reload_config;
use crate::errors::Result;
use crate::gateway::{GatewayHandle, RedirectGateway};

/// Re-read the configuration and swap the gateway in `handle`.
pub fn reload_gateway(handle: &GatewayHandle, health_prefix: &str) -> Result<Arc<RedirectGateway>> {
    let config = reload_config()?;
    let gateway = build_gateway(&config, health_prefix);
    log_gateway(&config, &gateway);
    handle.store(gateway);
    Ok(handle.load())
}

#[cfg(unix)]
pub fn setup_reload_mechanism(handle: GatewayHandle, health_prefix: String) {
    use tokio::signal::unix::{SignalKind, signal};
    use tracing::warn;

    tokio::spawn(async move {
        let mut stream = match signal(SignalKind::user_defined1()) {
            Ok(s) => s,
            Err(e) => {
                warn!(
                    "Failed to create SIGUSR1 handler: {}. Config reload via signal disabled.",
                    e
                );
                return;
            }
        };

        while stream.recv().await.is_some() {
            info!("Received SIGUSR1, reloading gateway configuration...");
            report(reload_gateway(&handle, &health_prefix));
        }
    });
}

#[cfg(not(unix))]
pub fn setup_reload_mechanism(_handle: GatewayHandle, _health_prefix: String) {
    tracing::debug!("Signal-based reload is not available on this platform");
}

fn report(result: Result<Arc<RedirectGateway>>) {
    match result {
        Ok(gateway) => info!(
            "Reload completed, redirects {}",
            if gateway.redirect_enabled() {
                "enabled"
            } else {
                "disabled"
            }
        ),
        Err(e) => error!("Reload failed, keeping previous configuration: {}", e),
    }
}
