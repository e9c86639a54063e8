//! Config loading tests
//!
//! TOML files on disk through `StaticConfig::try_load` / `load`.

use std::io::Write;

use linkgate::config::StaticConfig;
use linkgate::runtime::lifetime::startup::{build_gateway, shadowed_routes};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write config");
    file
}

fn path_of(file: &NamedTempFile) -> &str {
    file.path().to_str().expect("utf8 path")
}

#[test]
fn test_load_full_file() {
    let file = write_config(
        r#"
        [server]
        host = "0.0.0.0"
        port = 9000
        health_prefix = "/_gw/health"

        [gateway]
        backend_base_url = "https://api.example.com/"
        reserved_prefixes = ["/dashboard", "/admin"]
        app_routes = ["/dashboard", "/blog"]

        [logging]
        level = "debug"
        format = "json"
        "#,
    );

    let config = StaticConfig::try_load(path_of(&file)).expect("load");
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.gateway.reserved_prefixes, vec!["/dashboard", "/admin"]);
    assert_eq!(config.logging.format, "json");

    let gateway = build_gateway(&config, &config.server.health_prefix);
    assert_eq!(gateway.backend_base_url(), Some("https://api.example.com"));
    assert!(!gateway.decide("/_gw/health/live").is_redirect());
    assert!(gateway.decide("/stores").is_redirect());
    assert_eq!(shadowed_routes(&config, &gateway), vec!["/blog"]);
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.toml");

    let config = StaticConfig::try_load(path.to_str().expect("utf8")).expect("load");
    assert!(config.gateway.backend_base_url.is_empty());
    assert_eq!(config.server.port, 8080);
}

#[test]
fn test_malformed_file_is_error_and_load_falls_back() {
    let file = write_config("[gateway\nbackend_base_url = ");

    assert!(StaticConfig::try_load(path_of(&file)).is_err());

    let config = StaticConfig::load(path_of(&file));
    assert!(config.gateway.backend_base_url.is_empty());
    assert!(!build_gateway(&config, "/health").redirect_enabled());
}

#[test]
fn test_saved_config_loads_back() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("saved.toml");

    let mut original = StaticConfig::default();
    original.gateway.backend_base_url = "https://resolver.example".to_string();
    original.save_to_file(&path).expect("save");

    let loaded = StaticConfig::try_load(path.to_str().expect("utf8")).expect("load");
    assert_eq!(loaded.gateway.backend_base_url, "https://resolver.example");
    assert_eq!(
        loaded.gateway.reserved_prefixes,
        original.gateway.reserved_prefixes
    );
}
