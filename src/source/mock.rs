//! source::mock
//!
//! Mock source for deterministic testing.
//!
//! # Design
//!
//! The mock returns a fixed list of raw entries, or a configured failure,
//! and counts how many times it was asked. It lets the pipeline be tested
//! without a network.
//!
//! # Example
//!
//! ```
//! use country_directory::source::mock::MockSource;
//! use country_directory::source::CountrySource;
//! use serde_json::json;
//!
//! # tokio_test::block_on(async {
//! let source = MockSource::from_json(json!([
//!     { "name": { "common": "Chile", "official": "Republic of Chile" } }
//! ]));
//!
//! let entries = source.fetch().await.unwrap();
//! assert_eq!(entries.len(), 1);
//! assert_eq!(source.fetch_count(), 1);
//! # });
//! ```

use async_trait::async_trait;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::raw::RawCountryEntry;
use super::traits::{CountrySource, FetchError};

/// Mock source for testing.
///
/// Clones share the fetch counter.
#[derive(Debug, Clone)]
pub struct MockSource {
    /// What `fetch` returns.
    response: Result<Vec<RawCountryEntry>, FetchError>,
    /// Number of `fetch` calls so far.
    fetches: Arc<AtomicUsize>,
}

impl MockSource {
    /// Create a mock that returns the given entries.
    pub fn new(entries: Vec<RawCountryEntry>) -> Self {
        Self {
            response: Ok(entries),
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a mock from a JSON payload shaped like the API response.
    ///
    /// A payload that is not an array behaves like an empty catalog.
    pub fn from_json(payload: Value) -> Self {
        let entries = match payload {
            Value::Array(values) => values.into_iter().map(RawCountryEntry::from_value).collect(),
            _ => Vec::new(),
        };
        Self::new(entries)
    }

    /// Create a mock whose `fetch` always fails.
    pub fn failing(error: FetchError) -> Self {
        Self {
            response: Err(error),
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of times `fetch` has been called.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl CountrySource for MockSource {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn fetch(&self) -> Result<Vec<RawCountryEntry>, FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}
