//! source::traits
//!
//! Trait definition for retrieving the raw country catalog.
//!
//! # Design
//!
//! The `CountrySource` trait is async because retrieval involves network I/O.
//! A source performs exactly one retrieval per call and never caches, retries,
//! or returns partial results.
//!
//! # Example
//!
//! ```ignore
//! use country_directory::source::{CountrySource, FetchError};
//!
//! async fn count(source: &dyn CountrySource) -> Result<usize, FetchError> {
//!     let entries = source.fetch().await?;
//!     Ok(entries.len())
//! }
//! ```

use async_trait::async_trait;
use thiserror::Error;

use super::raw::RawCountryEntry;

/// Errors from retrieving the catalog.
///
/// Any of these is fatal for the whole batch: the caller has no data.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// Connection, DNS, or timeout failure.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("API error: {status} - {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Error message from the API, if any
        message: String,
    },

    /// The body was not a JSON array.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The configured endpoint could not be turned into a request URL.
    #[error("invalid endpoint '{endpoint}': {message}")]
    InvalidEndpoint {
        /// The offending endpoint
        endpoint: String,
        /// Why it was rejected
        message: String,
    },
}

/// A source of raw country entries.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so the CLI can hold them behind
/// `Box<dyn CountrySource>`.
///
/// # Errors
///
/// `fetch` returns `FetchError` on any transport or decoding failure. Callers
/// should treat an error as "no data available".
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Get the source name (e.g., "restcountries", "mock").
    fn name(&self) -> &'static str;

    /// Retrieve the full catalog in one request.
    async fn fetch(&self) -> Result<Vec<RawCountryEntry>, FetchError>;
}
