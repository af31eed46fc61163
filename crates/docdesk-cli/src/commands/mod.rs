//! CLI command definitions and dispatch.

pub mod copy;
pub mod info;
pub mod viewer;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use docdesk_core::config::AppConfig;
use docdesk_core::error::AppError;

/// DocDesk: content workflows from the terminal
#[derive(Debug, Parser)]
#[command(name = "docdesk", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Environment overlay loaded next to the configuration file
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Copy nodes into a folder, offering Undo afterwards
    Copy(copy::CopyArgs),
    /// Print the embedded viewer URL for a node content URL
    ViewerUrl(viewer::ViewerUrlArgs),
    /// Show the application title and effective settings
    Info,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Copy(args) => copy::execute(args, config, self.format).await,
            Commands::ViewerUrl(args) => viewer::execute(args, config, self.format),
            Commands::Info => info::execute(config, self.format),
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str, env: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path, env)
        .map_err(|e| AppError::configuration(format!("Failed to load config: {}", e)))
}
