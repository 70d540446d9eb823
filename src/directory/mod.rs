//! directory
//!
//! The sorted, name-keyed collection of normalized countries.
//!
//! # Lifecycle
//!
//! A [`Directory`] is built once from one fetched catalog and never mutated.
//! It has no insert, remove, or merge operation; being immutable, it can be
//! shared across threads freely.
//!
//! # Building
//!
//! [`Directory::build`] folds the raw sequence into an ordered map:
//! - every entry with a common name yields one record at that key
//! - a later duplicate common name replaces the earlier record
//! - entries without a common name are skipped and reported, never fatal
//!
//! # Example
//!
//! ```
//! use country_directory::directory::Directory;
//! use country_directory::source::RawCountryEntry;
//! use serde_json::json;
//!
//! let raw = vec![
//!     RawCountryEntry::from_value(json!({ "name": { "common": "Peru" } })),
//!     RawCountryEntry::from_value(json!({ "name": { "common": "Chile" } })),
//!     RawCountryEntry::from_value(json!({ "capital": ["Nowhere"] })),
//! ];
//!
//! let report = Directory::build(raw);
//! assert_eq!(report.skipped.len(), 1);
//!
//! let directory = report.directory;
//! assert_eq!(directory.names().collect::<Vec<_>>(), vec!["Chile", "Peru"]);
//! assert!(directory.lookup("Peru").is_some());
//! assert!(directory.lookup("peru").is_none());
//! ```

pub mod normalize;

pub use normalize::{normalize, EntryError, Field, LANGUAGE_CAP, NATIVE_NAME_CAP, SEPARATOR};

use std::collections::BTreeMap;

use crate::core::types::CountryRecord;
use crate::source::{CountrySource, FetchError, RawCountryEntry};

/// Sorted mapping from common name to record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    records: BTreeMap<String, CountryRecord>,
}

/// An entry that could not be normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// Position in the fetched sequence
    pub index: usize,
    /// Why it was skipped
    pub error: EntryError,
}

/// Result of building a directory.
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    /// The built directory.
    pub directory: Directory,
    /// Entries that were skipped.
    pub skipped: Vec<SkippedEntry>,
    /// Number of records replaced by a later entry with the same name.
    pub replaced: usize,
}

impl Directory {
    /// A directory with no records.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Normalize every raw entry and collect the results.
    pub fn build(entries: impl IntoIterator<Item = RawCountryEntry>) -> BuildReport {
        let mut report = entries
            .into_iter()
            .enumerate()
            .fold(BuildReport::default(), |mut report, (index, entry)| {
                match normalize(&entry) {
                    Ok(record) => {
                        let key = record.common_name.clone();
                        if report.directory.records.insert(key, record).is_some() {
                            report.replaced += 1;
                        }
                    }
                    Err(error) => {
                        tracing::warn!(index, %error, "skipping malformed entry");
                        report.skipped.push(SkippedEntry { index, error });
                    }
                }
                report
            });

        if report.replaced > 0 {
            tracing::warn!(
                replaced = report.replaced,
                "duplicate common names, later entries kept"
            );
        }
        tracing::debug!(
            countries = report.directory.len(),
            skipped = report.skipped.len(),
            "directory built"
        );
        report
    }

    /// Exact, case-sensitive lookup by common name.
    ///
    /// A miss is a normal outcome and returns `None`.
    pub fn lookup(&self, name: &str) -> Option<&CountryRecord> {
        self.records.get(name)
    }

    /// Common names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// Records in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = &CountryRecord> {
        self.records.values()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the directory has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Directory {
    type Item = &'a CountryRecord;
    type IntoIter = std::collections::btree_map::Values<'a, String, CountryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}

/// Fetch the catalog once and build the directory.
///
/// # Errors
///
/// Returns the source's `FetchError` unchanged; no directory is built.
pub async fn load(source: &dyn CountrySource) -> Result<BuildReport, FetchError> {
    let entries = source.fetch().await?;
    tracing::debug!(source = source.name(), entries = entries.len(), "catalog fetched");
    Ok(Directory::build(entries))
}

/// Fetch and build, falling back to an empty directory on failure.
///
/// The failure is returned alongside so callers can report it.
pub async fn load_or_empty(source: &dyn CountrySource) -> (BuildReport, Option<FetchError>) {
    match load(source).await {
        Ok(report) => (report, None),
        Err(error) => {
            tracing::debug!(source = source.name(), %error, "fetch failed, directory is empty");
            (BuildReport::default(), Some(error))
        }
    }
}
