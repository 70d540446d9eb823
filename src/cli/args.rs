//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output
//! - `--endpoint <URL>`: Catalog endpoint, overriding the config file
//! - `--config <PATH>`: Config file to load instead of the standard locations

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Countries - a sorted directory of country metadata
#[derive(Parser, Debug)]
#[command(name = "countries")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Catalog endpoint (defaults to the public REST Countries API)
    #[arg(long, global = true, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Config file to use
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all country names in sorted order
    #[command(
        name = "list",
        after_help = "\
EXAMPLES:
    # Every country, one per line
    countries list

    # Count them
    countries list | wc -l"
    )]
    List,

    /// Show details for one country
    #[command(
        name = "show",
        long_about = "Show details for one country.\n\n\
            The name must match a common name exactly, including case. \
            Use `countries list` to see the accepted names.",
        after_help = "\
EXAMPLES:
    countries show Finland
    countries show \"United Kingdom\" --json"
    )]
    Show {
        /// Common name, exactly as listed
        name: String,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the whole directory as JSON
    #[command(name = "export")]
    Export {
        /// Write to this file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Generate shell completion scripts
    #[command(name = "completion")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
