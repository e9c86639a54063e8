//! linkgate - short-link redirect gateway
//!
//! Sits in front of an application and intercepts single-segment short codes,
//! answering them with a `302 Found` to `{backend}/r/{code}`. Every application
//! route, static file and the root path pass through untouched. With no backend
//! configured the gateway fails open and forwards everything.
//!
//! # Architecture
//! - `gateway`: Pure routing decision and reserved prefix set
//! - `api`: actix-web middleware and the gateway's own routes
//! - `config`: Static configuration (TOML + environment)
//! - `runtime`: Server and CLI modes, startup, reload, shutdown
//! - `system`: Logging and panic hook

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod gateway;
pub mod runtime;
pub mod system;
pub mod utils;
