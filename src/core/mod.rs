//! core
//!
//! Core domain types and configuration.
//!
//! # Modules
//!
//! - [`types`] - Normalized records: CountryRecord, Flag
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Records are immutable once built
//! - Absence is explicit (`Option`, `Flag::Unavailable`), never an empty sentinel
//! - Config schemas are strict and self-describing

pub mod config;
pub mod types;
