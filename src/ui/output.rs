//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Results go to stdout and respect the quiet flag only where they are
//! chatter; warnings and errors go to stderr. Diagnostic detail is logged
//! through `tracing`, not printed here.

use std::fmt::Display;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }

    /// Default `tracing` filter directive for this verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Debug => "debug",
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Format labeled rows with the labels right-aligned in one column.
///
/// Empty values are shown as `-`.
pub fn format_rows(rows: &[(&str, String)]) -> String {
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(label, value)| {
            let value = if value.is_empty() { "-" } else { value.as_str() };
            format!("{:>width$}: {}", label, value, width = width)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
    }

    #[test]
    fn log_filter_per_verbosity() {
        assert_eq!(Verbosity::Quiet.log_filter(), "error");
        assert_eq!(Verbosity::Normal.log_filter(), "warn");
        assert_eq!(Verbosity::Debug.log_filter(), "debug");
    }

    #[test]
    fn format_rows_aligns_labels() {
        let rows = vec![
            ("Name", "Chile".to_string()),
            ("Capital", "Santiago".to_string()),
            ("Languages", String::new()),
        ];

        assert_eq!(
            format_rows(&rows),
            "     Name: Chile\n  Capital: Santiago\nLanguages: -"
        );
    }

    #[test]
    fn format_rows_empty() {
        assert_eq!(format_rows(&[]), "");
    }
}
