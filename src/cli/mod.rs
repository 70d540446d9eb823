//! cli
//!
//! Command-line interface layer.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Load configuration and initialize logging
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It stands in for a presentation layer: it fetches
//! the catalog once through [`crate::source`], builds the
//! [`crate::directory::Directory`], and renders what the user asked for.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use crate::core::config::Config;
use crate::ui::output::Verbosity;
use anyhow::{Context as _, Result};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Shared state for command handlers.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output verbosity
    pub verbosity: Verbosity,
    /// Effective configuration
    pub config: Config,
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);
    init_logging(verbosity);

    let loaded = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(path) = &loaded.path {
        tracing::debug!(path = %path.display(), "loaded config");
    }
    let config = loaded
        .config
        .with_endpoint_override(cli.endpoint.clone())
        .context("invalid --endpoint")?;

    let ctx = Context { verbosity, config };

    commands::dispatch(cli.command, &ctx)
}

/// Install the stderr `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity flags.
pub fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.log_filter()));

    // A second initialization (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
