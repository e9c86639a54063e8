//! Mode routing
//!
//! - Server mode (HTTP gateway, default)
//! - CLI mode (path checks, config generation)

pub mod cli;
pub mod server;

pub use cli::{run_check, run_config_generate};
pub use server::run_server;
