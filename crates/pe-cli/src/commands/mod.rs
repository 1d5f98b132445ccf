//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod export;
pub mod info;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::debug;

use pe_core::config::Config;

/// post-exporter - export post datasets to JSON, HTML, or CSV
#[derive(Debug, Parser)]
#[command(name = "post-exporter")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Export a dataset file
    Export(export::ExportArgs),

    /// Show record count and column set of a dataset file
    Info(info::InfoArgs),
}

/// Run the CLI application
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    setup_logging(cli.verbose);

    // Handle color output
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = load_config(cli.config.as_deref())?;

    // Dispatch to command handler
    match cli.command {
        Commands::Export(args) => export::execute(args, &config),
        Commands::Info(args) => info::execute(args),
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Load configuration from an explicit path, the platform config
/// directory, or defaults
fn load_config(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(path) => Some(path.to_path_buf()),
        None => default_config_path().filter(|p| p.exists()),
    };

    match path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .context(format!("Failed to read config file {}", path.display()))?;
            let config = toml::from_str(&content)
                .context(format!("Failed to parse config file {}", path.display()))?;
            debug!("Loaded configuration from {:?}", path);
            Ok(config)
        }
        None => Ok(Config::default()),
    }
}

fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "post-exporter", "post-exporter")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .or_else(|| dirs::home_dir().map(|home| home.join(".post-exporter/config.toml")))
}
