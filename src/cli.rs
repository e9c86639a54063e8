//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

/// linkgate - short-link redirect gateway
#[derive(Parser, Debug)]
#[command(name = "linkgate")]
#[command(version)]
#[command(about = "Edge gateway that forwards short codes to a backend link resolver", long_about = None)]
pub struct Cli {
    /// Configuration file (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP gateway (default)
    Serve,

    /// Show how the gateway would route the given paths
    Check {
        /// Request paths, e.g. /abc123
        #[arg(required = true)]
        paths: Vec<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Configuration helpers
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print or write a sample configuration file
    Generate {
        /// Output file (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<String>,
    },
}
