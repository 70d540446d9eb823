//! Country Directory - a sorted, name-keyed directory of country metadata
//!
//! The crate fetches the public REST Countries catalog once, flattens each
//! nested record into a display-ready [`core::types::CountryRecord`], and
//! exposes the result as an immutable [`directory::Directory`] sorted by
//! common name.
//!
//! # Architecture
//!
//! Data flows one way:
//!
//! - [`source`] - Fetches the raw catalog (HTTP or mock)
//! - [`directory`] - Normalizes raw entries and builds the sorted directory
//! - [`core`] - Domain types and configuration
//! - [`cli`] - Command-line interface (list, show, export)
//! - [`ui`] - Output formatting
//!
//! # Invariants
//!
//! 1. The directory is built once per run from one fetch and never mutated
//! 2. Directory keys are unique and in ascending order
//! 3. A missing field never aborts an entry; a missing name never aborts the batch
//! 4. A failed fetch is an explicit error, never a silent empty result
//!
//! # Example
//!
//! ```no_run
//! use country_directory::directory;
//! use country_directory::source::RestCountries;
//!
//! # tokio_test::block_on(async {
//! let source = RestCountries::new();
//! let report = directory::load(&source).await?;
//!
//! for name in report.directory.names() {
//!     println!("{}", name);
//! }
//! # Ok::<(), country_directory::source::FetchError>(())
//! # }).unwrap();
//! ```

pub mod cli;
pub mod core;
pub mod directory;
pub mod source;
pub mod ui;
