//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Obtains the directory through [`fetch_directory`] or, when a failed
//!    fetch must abort the command, [`load_directory`]
//! 3. Formats and displays output
//!
//! # Async Fetch
//!
//! The source is async because it performs network I/O. Handlers stay
//! synchronous and drive the single fetch with a tokio runtime, so the
//! calling thread blocks until the directory is complete.

mod completion;
mod export;
mod list;
mod show;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use export::export;
pub use list::list;
pub use show::show;

use crate::cli::args::Command;
use crate::cli::Context;
use crate::directory::{self, BuildReport, Directory};
use crate::source::create_source;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::List => list::list(ctx),
        Command::Show { name, json } => show::show(ctx, &name, json),
        Command::Export { output } => export::export(ctx, output.as_deref()),
        Command::Completion { shell } => completion::completion(shell),
    }
}

/// Fetch the catalog once and build the directory, or fail.
///
/// Used where an empty result would be indistinguishable from real output,
/// such as `export` overwriting a previous file.
pub fn load_directory(ctx: &Context) -> Result<Directory> {
    let source = create_source(&ctx.config);
    let rt = tokio::runtime::Runtime::new()?;
    let report = rt
        .block_on(directory::load(source.as_ref()))
        .with_context(|| format!("could not retrieve countries from {}", ctx.config.endpoint()))?;

    warn_skipped(&report, ctx);
    Ok(report.directory)
}

/// Fetch the catalog once and build the directory.
///
/// A failed fetch is reported on stderr, even in quiet mode, and yields an
/// empty directory, so `list` and `show` still run and lookups simply miss.
pub fn fetch_directory(ctx: &Context) -> Result<Directory> {
    let source = create_source(&ctx.config);
    let rt = tokio::runtime::Runtime::new()?;
    let (report, error) = rt.block_on(directory::load_or_empty(source.as_ref()));

    if let Some(error) = error {
        output::error(format!(
            "could not retrieve countries from {}: {}",
            ctx.config.endpoint(),
            error
        ));
    }

    warn_skipped(&report, ctx);
    Ok(report.directory)
}

fn warn_skipped(report: &BuildReport, ctx: &Context) {
    if !report.skipped.is_empty() {
        output::warn(
            format!(
                "skipped {} malformed {}",
                report.skipped.len(),
                if report.skipped.len() == 1 { "entry" } else { "entries" }
            ),
            ctx.verbosity,
        );
    }
}
