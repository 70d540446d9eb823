//! directory::normalize
//!
//! Flattening of one raw entry into a [`CountryRecord`].
//!
//! # Design
//!
//! Each derived field has its own pure function taking the raw entry, so
//! every extraction can be tested in isolation. [`normalize`] only
//! assembles their results.
//!
//! Missing or mistyped fields degrade to an empty value (or
//! [`Flag::Unavailable`]); only a missing common name rejects the entry.
//!
//! # Deduplication
//!
//! Native names and languages are deduplicated in first-seen order and then
//! capped, so the same input always produces the same string.

use std::collections::HashSet;

use serde_json::Value;
use thiserror::Error;

use crate::core::types::{CountryRecord, Flag};
use crate::source::RawCountryEntry;

/// Maximum number of distinct native names kept.
pub const NATIVE_NAME_CAP: usize = 3;

/// Maximum number of distinct languages kept.
pub const LANGUAGE_CAP: usize = 5;

/// Separator used in every joined field.
pub const SEPARATOR: &str = ", ";

/// Flag format key selected from the flag mapping.
const PNG_KEY: &str = "png";

/// Reasons an entry cannot be normalized at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    /// `name.common` is absent, mistyped, or blank.
    #[error("missing common name")]
    MissingCommonName,
}

/// A field that was absent from a raw entry and was filled with an empty value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    OfficialName,
    NativeName,
    Capital,
    Languages,
    Continents,
    Flag,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Field::OfficialName => "official name",
            Field::NativeName => "native name",
            Field::Capital => "capital",
            Field::Languages => "languages",
            Field::Continents => "continents",
            Field::Flag => "flag",
        };
        write!(f, "{}", name)
    }
}

/// Flatten one raw entry.
///
/// # Errors
///
/// Returns `EntryError::MissingCommonName` if the entry has no usable common
/// name. Every other gap degrades to an empty value.
///
/// # Example
///
/// ```
/// use country_directory::directory::normalize;
/// use country_directory::source::RawCountryEntry;
/// use serde_json::json;
///
/// let entry = RawCountryEntry::from_value(json!({
///     "name": { "common": "X", "official": "Republic of X" },
///     "capital": ["City A"]
/// }));
///
/// let record = normalize(&entry).unwrap();
/// assert_eq!(record.common_name, "X");
/// assert_eq!(record.capital, "City A");
/// assert_eq!(record.languages, "");
/// ```
pub fn normalize(entry: &RawCountryEntry) -> Result<CountryRecord, EntryError> {
    let common_name = common_name(entry)?;

    for field in missing_fields(entry) {
        tracing::debug!(country = %common_name, %field, "field missing, using empty value");
    }

    Ok(CountryRecord {
        official_name: official_name(entry),
        native_name: native_names(entry),
        capital: capital(entry),
        languages: languages(entry),
        continents: continents(entry),
        flag: flag(entry),
        common_name,
    })
}

/// The directory key.
pub fn common_name(entry: &RawCountryEntry) -> Result<String, EntryError> {
    match entry.common_name() {
        Some(name) if !name.trim().is_empty() => Ok(name.to_string()),
        _ => Err(EntryError::MissingCommonName),
    }
}

/// The official name, or empty.
pub fn official_name(entry: &RawCountryEntry) -> String {
    entry.official_name().unwrap_or_default().to_string()
}

/// Up to [`NATIVE_NAME_CAP`] distinct native official names.
pub fn native_names(entry: &RawCountryEntry) -> String {
    let Some(names) = entry.native_names() else {
        return String::new();
    };

    let official = names
        .values()
        .filter_map(|v| v.get("official").and_then(Value::as_str));
    distinct_capped(official, NATIVE_NAME_CAP).join(SEPARATOR)
}

/// Up to [`LANGUAGE_CAP`] distinct language names.
pub fn languages(entry: &RawCountryEntry) -> String {
    let Some(languages) = entry.languages.as_ref() else {
        return String::new();
    };

    distinct_capped(languages.values().filter_map(Value::as_str), LANGUAGE_CAP).join(SEPARATOR)
}

/// All capitals, uncapped.
pub fn capital(entry: &RawCountryEntry) -> String {
    entry
        .capital
        .as_deref()
        .map(|c| c.join(SEPARATOR))
        .unwrap_or_default()
}

/// All continents, uncapped.
pub fn continents(entry: &RawCountryEntry) -> String {
    entry
        .continents
        .as_deref()
        .map(|c| c.join(SEPARATOR))
        .unwrap_or_default()
}

/// The PNG flag, or [`Flag::Unavailable`].
pub fn flag(entry: &RawCountryEntry) -> Flag {
    entry
        .flags
        .as_ref()
        .and_then(|flags| flags.get(PNG_KEY))
        .and_then(Value::as_str)
        .map(Flag::from_url)
        .unwrap_or(Flag::Unavailable)
}

/// Fields of `entry` that are absent and will be filled with empty values.
pub fn missing_fields(entry: &RawCountryEntry) -> Vec<Field> {
    let mut missing = Vec::new();
    if entry.official_name().is_none() {
        missing.push(Field::OfficialName);
    }
    if entry.native_names().is_none() {
        missing.push(Field::NativeName);
    }
    if entry.capital.is_none() {
        missing.push(Field::Capital);
    }
    if entry.languages.is_none() {
        missing.push(Field::Languages);
    }
    if entry.continents.is_none() {
        missing.push(Field::Continents);
    }
    if !flag(entry).is_available() {
        missing.push(Field::Flag);
    }
    missing
}

/// Deduplicate in first-seen order, skipping blanks, keeping at most `cap`.
fn distinct_capped<'a>(items: impl IntoIterator<Item = &'a str>, cap: usize) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    let mut kept = Vec::new();

    for item in items {
        if kept.len() == cap {
            break;
        }
        if !item.trim().is_empty() && seen.insert(item) {
            kept.push(item);
        }
    }

    kept
}
