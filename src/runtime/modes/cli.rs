//! CLI mode
//!
//! Operator commands that run without starting the server.

use colored::Colorize;
use serde::Serialize;

use crate::config::{StaticConfig, get_config};
use crate::errors::Result;
use crate::gateway::{RedirectGateway, RouteDecision, validate_backend};
use crate::runtime::lifetime::startup::{build_gateway, shadowed_routes};

#[derive(Debug, Serialize)]
pub struct CheckEntry {
    pub path: String,
    pub action: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub redirect_enabled: bool,
    /// Why a configured `backend_base_url` was refused.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend_rejected: Option<String>,
    pub decisions: Vec<CheckEntry>,
    pub shadowed_routes: Vec<String>,
}

/// Evaluate `paths` against `config` exactly as the server would.
pub fn check_paths(config: &StaticConfig, paths: &[String]) -> CheckReport {
    let gateway = build_gateway(config, &config.server.health_prefix);
    CheckReport {
        redirect_enabled: gateway.redirect_enabled(),
        backend_rejected: validate_backend(&config.gateway.backend_base_url)
            .err()
            .map(|e| e.message().to_string()),
        decisions: paths.iter().map(|p| check_entry(&gateway, p)).collect(),
        shadowed_routes: shadowed_routes(config, &gateway)
            .into_iter()
            .map(String::from)
            .collect(),
    }
}

fn check_entry(gateway: &RedirectGateway, path: &str) -> CheckEntry {
    match gateway.decide(path) {
        RouteDecision::PassThrough(reason) => CheckEntry {
            path: path.to_string(),
            action: "pass",
            reason: Some(reason.as_str()),
            location: None,
        },
        RouteDecision::Redirect { location, .. } => CheckEntry {
            path: path.to_string(),
            action: "redirect",
            reason: None,
            location: Some(location),
        },
    }
}

/// `linkgate check <PATH>...`
pub fn run_check(paths: &[String], json: bool) -> Result<()> {
    let report = check_paths(&get_config(), paths);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if let Some(reason) = &report.backend_rejected {
        println!(
            "{} {}: every path passes through",
            "error:".red().bold(),
            reason
        );
    } else if !report.redirect_enabled {
        println!(
            "{}",
            "backend_base_url not set: every path passes through".yellow()
        );
    }
    for entry in &report.decisions {
        match &entry.location {
            Some(location) => println!("{} {} -> {}", "302".green(), entry.path, location),
            None => println!(
                "{} {} ({})",
                "pass".cyan(),
                entry.path,
                entry.reason.unwrap_or_default()
            ),
        }
    }
    for route in &report.shadowed_routes {
        println!(
            "{} application route {} is shadowed by short-code handling",
            "warning:".yellow().bold(),
            route
        );
    }
    Ok(())
}

/// `linkgate config generate [--output FILE]`
pub fn run_config_generate(output: Option<&str>) -> Result<()> {
    match output {
        Some(path) => {
            StaticConfig::default().save_to_file(path)?;
            println!("Sample configuration written to {}", path);
        }
        None => print!("{}", StaticConfig::generate_sample_config()?),
    }
    Ok(())
}
