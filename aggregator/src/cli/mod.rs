//! CLI module for benefits-aggregator
//!
//! Provides command-line interface for starting the aggregator server.

/// serve サブコマンド
pub mod serve;

use clap::{Parser, Subcommand};

/// Benefits Aggregator - fans a member query out to every configured upstream
#[derive(Parser, Debug)]
#[command(name = "benefits-aggregator")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    BENEFITS_AGGREGATOR_HOST        Bind address (default: 0.0.0.0, legacy: HOST)
    BENEFITS_AGGREGATOR_PORT        Listen port (default: 3000, legacy: PORT)
    BENEFITS_AGGREGATOR_UPSTREAMS   Comma-separated upstream base URLs (legacy: EXTERNAL_APIS)
    BENEFITS_AGGREGATOR_LOG_LEVEL   Log level (default: info, or debug when DEBUG is set)

Legacy names are honoured with or without the serve subcommand; explicit
flags take precedence over every environment variable.
"#)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the aggregator server
    Serve(serve::ServeArgs),
}
