//! source
//!
//! Retrieval of the raw country catalog.
//!
//! # Architecture
//!
//! The `CountrySource` trait defines the single operation the pipeline needs:
//! fetch the whole catalog once. Commands build a source with
//! [`create_source`] rather than naming an implementation directly.
//!
//! - Sources never retry, cache, or return partial results
//! - A source failure leaves the caller with no data, never with a crash
//!
//! # Modules
//!
//! - `traits`: `CountrySource` trait and `FetchError`
//! - [`raw`]: Lenient wire shape of one country
//! - [`restcountries`]: HTTP implementation against the REST Countries API
//! - [`mock`]: In-memory implementation for deterministic testing

pub mod mock;
pub mod raw;
pub mod restcountries;
mod traits;

pub use raw::RawCountryEntry;
pub use restcountries::RestCountries;
pub use traits::*;

use crate::core::config::Config;

/// Create the HTTP source described by the configuration.
pub fn create_source(config: &Config) -> Box<dyn CountrySource> {
    let mut source = RestCountries::with_endpoint(config.endpoint()).user_agent(config.user_agent());
    if let Some(timeout) = config.timeout() {
        source = source.timeout(timeout);
    }
    Box::new(source)
}
