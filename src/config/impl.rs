use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use super::{DEFAULT_CONFIG_PATH, StaticConfig};
use crate::errors::Result;

static CONFIG: OnceLock<ArcSwap<StaticConfig>> = OnceLock::new();
static CONFIG_PATH: OnceLock<String> = OnceLock::new();

/// Get the global configuration instance
///
/// Returns an Arc pointer to the configuration, which is cheap to clone
/// and doesn't hold any locks.
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get_or_init(|| ArcSwap::from_pointee(StaticConfig::load(config_path())))
        .load_full()
}

/// Initialize the global configuration from `path` (or `config.toml`).
///
/// Subsequent calls are no-ops.
pub fn init_config(path: Option<&str>) {
    let path = CONFIG_PATH.get_or_init(|| path.unwrap_or(DEFAULT_CONFIG_PATH).to_string());
    CONFIG.get_or_init(|| ArcSwap::from_pointee(StaticConfig::load(path)));
}

/// Re-read the configuration file and replace the global instance.
///
/// On error the current configuration is kept.
pub fn reload_config() -> Result<Arc<StaticConfig>> {
    let fresh = Arc::new(StaticConfig::try_load(config_path())?);
    match CONFIG.get() {
        Some(current) => current.store(fresh.clone()),
        None => {
            let _ = CONFIG.set(ArcSwap::new(fresh.clone()));
        }
    }
    Ok(fresh)
}

/// Path the configuration was loaded from.
pub fn config_path() -> &'static str {
    CONFIG_PATH.get_or_init(|| DEFAULT_CONFIG_PATH.to_string())
}
