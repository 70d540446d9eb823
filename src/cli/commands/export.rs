//! export command - Write the directory as JSON
//!
//! The output is a JSON array of records in name order.

use std::fs;
use std::path::Path;

use crate::cli::Context;
use crate::directory::Directory;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Export the whole directory to stdout or a file.
///
/// A failed fetch aborts before anything is written.
pub fn export(ctx: &Context, path: Option<&Path>) -> Result<()> {
    let directory = super::load_directory(ctx)?;
    let json = render(&directory)?;

    match path {
        Some(path) => {
            fs::write(path, format!("{}\n", json))
                .with_context(|| format!("failed to write '{}'", path.display()))?;
            output::print(
                format!("Wrote {} countries to {}", directory.len(), path.display()),
                ctx.verbosity,
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Render the directory as a pretty JSON array.
pub(crate) fn render(directory: &Directory) -> Result<String> {
    let records: Vec<_> = directory.iter().collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::RawCountryEntry;
    use serde_json::{json, Value};

    #[test]
    fn renders_array_in_name_order() {
        let report = Directory::build(vec![
            RawCountryEntry::from_value(json!({
                "name": { "common": "Peru" },
                "flags": { "png": "https://flagcdn.com/w320/pe.png" }
            })),
            RawCountryEntry::from_value(json!({ "name": { "common": "Chile" } })),
        ]);

        let value: Value = serde_json::from_str(&render(&report.directory).unwrap()).unwrap();
        let records = value.as_array().unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["common_name"], "Chile");
        assert!(records[0]["flag"].is_null());
        assert_eq!(records[1]["flag"], "https://flagcdn.com/w320/pe.png");
    }

    #[test]
    fn renders_empty_directory_as_empty_array() {
        assert_eq!(render(&Directory::empty()).unwrap(), "[]");
    }
}
