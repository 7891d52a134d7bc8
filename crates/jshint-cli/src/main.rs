//! jshint-rs CLI tool.
//!
//! Usage:
//! ```bash
//! jshint-rs lint [OPTIONS] [PATH]
//! jshint-rs init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod project;

/// Lints a project's JavaScript assets with the embedded JSHint engine
#[derive(Parser)]
#[command(name = "jshint-rs")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint the project's script assets
    Lint {
        /// Project root (default: detected from the current directory)
        path: Option<PathBuf>,

        /// Path to the configuration document
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Path to the engine artifact
        #[arg(long)]
        engine: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Write a starter configuration file
    Init {
        /// Overwrite an existing configuration
        #[arg(long)]
        force: bool,
    },
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-diagnostic compact format.
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Lint {
            path,
            config,
            engine,
            format,
        } => commands::lint::run(path.as_deref(), config.as_deref(), engine.as_deref(), format),
        Commands::Init { force } => commands::init::run(force),
    }
}
