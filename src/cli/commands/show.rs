//! show command - Display one country's record
//!
//! # Example
//!
//! ```bash
//! countries show Finland
//! countries show "United Kingdom" --json
//! ```

use crate::cli::Context;
use crate::core::types::CountryRecord;
use crate::ui::output;
use anyhow::{bail, Result};

/// Show the record for an exact common name.
///
/// A miss is reported as an error naming the lookup key.
pub fn show(ctx: &Context, name: &str, json: bool) -> Result<()> {
    let directory = super::fetch_directory(ctx)?;

    let Some(record) = directory.lookup(name) else {
        bail!(
            "country '{}' not found. Run 'countries list' to see available names.",
            name
        );
    };

    println!("{}", render(record, json)?);
    Ok(())
}

/// Render a record as labeled rows or as JSON.
pub(crate) fn render(record: &CountryRecord, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(record)?)
    } else {
        Ok(output::format_rows(&record.rows()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Flag;

    fn record() -> CountryRecord {
        CountryRecord {
            common_name: "Chile".into(),
            official_name: "Republic of Chile".into(),
            native_name: "República de Chile".into(),
            capital: "Santiago".into(),
            languages: "Spanish".into(),
            continents: "South America".into(),
            flag: Flag::Unavailable,
        }
    }

    #[test]
    fn renders_rows() {
        let text = render(&record(), false).unwrap();

        assert!(text.starts_with("         Name: Chile\n"));
        assert!(text.contains("Official Name: Republic of Chile"));
        assert!(text.contains("    Continent: South America"));
        assert!(text.ends_with("         Flag: no flag available"));
    }

    #[test]
    fn renders_json() {
        let text = render(&record(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["common_name"], "Chile");
        assert_eq!(value["capital"], "Santiago");
        assert!(value["flag"].is_null());
    }
}
