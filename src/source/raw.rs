//! source::raw
//!
//! Wire shape of one country as delivered by the catalog API.
//!
//! # Leniency
//!
//! Field presence is not uniform across countries (some have no capital,
//! some have no native names). Every field is optional, and a value of the
//! wrong type is treated exactly like a missing one. Only the array-level
//! shape of the payload is enforced by the fetcher. Inside string lists the
//! check is per element: non-string elements are dropped, the rest are kept.
//!
//! Maps keep the key order of the payload, so "first seen" during
//! normalization means first in the JSON document.

use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::{Map, Value};

/// One country record, pre-transformation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawCountryEntry {
    /// Common, official, and native names
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<RawName>,

    /// Capital city names
    #[serde(default, deserialize_with = "lenient_strings")]
    pub capital: Option<Vec<String>>,

    /// Language code to language name
    #[serde(default, deserialize_with = "lenient")]
    pub languages: Option<Map<String, Value>>,

    /// Continent names
    #[serde(default, deserialize_with = "lenient_strings")]
    pub continents: Option<Vec<String>>,

    /// Image format (`png`, `svg`, `alt`) to URL or text
    #[serde(default, deserialize_with = "lenient")]
    pub flags: Option<Map<String, Value>>,
}

/// The nested `name` object.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawName {
    #[serde(default, deserialize_with = "lenient")]
    pub common: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub official: Option<String>,

    /// Language code to `{ "official": .., "common": .. }`
    #[serde(default, rename = "nativeName", deserialize_with = "lenient")]
    pub native_name: Option<Map<String, Value>>,
}

impl RawCountryEntry {
    /// Build an entry from an arbitrary JSON value.
    ///
    /// Never fails: a value that is not an object yields an entry with every
    /// field missing, which normalization then rejects for lack of a name.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    /// The common name, if present.
    pub fn common_name(&self) -> Option<&str> {
        self.name.as_ref().and_then(|n| n.common.as_deref())
    }

    /// The official name, if present.
    pub fn official_name(&self) -> Option<&str> {
        self.name.as_ref().and_then(|n| n.official.as_deref())
    }

    /// The native-name mapping, if present.
    pub fn native_names(&self) -> Option<&Map<String, Value>> {
        self.name.as_ref().and_then(|n| n.native_name.as_ref())
    }
}

impl From<Value> for RawCountryEntry {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

/// Deserialize a field, mapping any type mismatch to `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Deserialize a list of strings, keeping only the string elements.
///
/// A value that is not an array maps to `None`.
fn lenient_strings<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => return Ok(None),
    };
    Ok(Some(
        items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
    ))
}
