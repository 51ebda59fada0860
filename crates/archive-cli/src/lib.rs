//! Argo workflow archive CLI library

pub mod archive;
pub mod connection;
pub mod output;

// Re-export CLI types for testing
pub use clap::{Parser, Subcommand};

pub use archive::Commands;
pub use connection::ConnectionArgs;
pub use output::OutputFormat;

#[derive(Parser)]
#[command(name = "argo-archive")]
#[command(about = "Browse and prune archived Argo workflows")]
#[command(version, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Output format
    #[arg(long, short, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}
