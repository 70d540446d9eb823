//! core::types
//!
//! Domain types for normalized country data.
//!
//! # Types
//!
//! - [`CountryRecord`] - Flat, display-ready country entity
//! - [`Flag`] - PNG flag URL or explicit absence
//!
//! # Examples
//!
//! ```
//! use country_directory::core::types::Flag;
//!
//! let flag = Flag::from_url("https://flagcdn.com/w320/fi.png");
//! assert_eq!(flag.url(), Some("https://flagcdn.com/w320/fi.png"));
//!
//! assert_eq!(Flag::Unavailable.url(), None);
//! assert_eq!(Flag::Unavailable.to_string(), "no flag available");
//! ```

use serde::{Serialize, Serializer};

/// Display text for a country without a PNG flag.
pub const NO_FLAG: &str = "no flag available";

/// Location of a country's PNG flag.
///
/// `Unavailable` is the explicit "none" sentinel, so consumers never receive
/// an empty string where a URL was expected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Flag {
    /// URL of the PNG flag image
    Png(String),
    /// The source provided no PNG entry
    #[default]
    Unavailable,
}

impl Flag {
    /// Build a flag from a URL; a blank URL counts as unavailable.
    pub fn from_url(url: impl Into<String>) -> Self {
        let url = url.into();
        if url.trim().is_empty() {
            Flag::Unavailable
        } else {
            Flag::Png(url)
        }
    }

    /// The URL, or `None` if unavailable.
    pub fn url(&self) -> Option<&str> {
        match self {
            Flag::Png(url) => Some(url),
            Flag::Unavailable => None,
        }
    }

    /// Check if a flag URL is present.
    pub fn is_available(&self) -> bool {
        matches!(self, Flag::Png(_))
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Flag::Png(url) => write!(f, "{}", url),
            Flag::Unavailable => write!(f, "{}", NO_FLAG),
        }
    }
}

// Serialized as the URL or `null`.
impl Serialize for Flag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.url().serialize(serializer)
    }
}

/// One country, flattened for display.
///
/// Built by [`crate::directory::normalize`]; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryRecord {
    /// Common name; the directory key. Never empty.
    pub common_name: String,
    /// Official name
    pub official_name: String,
    /// Up to 3 distinct native official names, joined with ", "
    pub native_name: String,
    /// All capitals, joined with ", "
    pub capital: String,
    /// Up to 5 distinct language names, joined with ", "
    pub languages: String,
    /// All continents, joined with ", "
    pub continents: String,
    /// PNG flag location
    pub flag: Flag,
}

impl CountryRecord {
    /// Labeled rows in display order.
    ///
    /// Mirrors the information panel: name, official name, native name,
    /// capital, languages, continent, flag.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.common_name.clone()),
            ("Official Name", self.official_name.clone()),
            ("Native Name", self.native_name.clone()),
            ("Capital", self.capital.clone()),
            ("Languages", self.languages.clone()),
            ("Continent", self.continents.clone()),
            ("Flag", self.flag.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CountryRecord {
        CountryRecord {
            common_name: "X".into(),
            official_name: "Republic of X".into(),
            native_name: "Republic of X".into(),
            capital: "City A".into(),
            languages: "Xish".into(),
            continents: "Continent Y".into(),
            flag: Flag::from_url("http://x/flag.png"),
        }
    }

    #[test]
    fn flag_from_empty_url_is_unavailable() {
        assert_eq!(Flag::from_url(""), Flag::Unavailable);
        assert!(!Flag::from_url("").is_available());
    }

    #[test]
    fn flag_from_blank_url_is_unavailable() {
        assert_eq!(Flag::from_url("   "), Flag::Unavailable);
        assert_eq!(Flag::from_url("\t\n"), Flag::Unavailable);
    }

    #[test]
    fn flag_display() {
        assert_eq!(Flag::Png("http://x/flag.png".into()).to_string(), "http://x/flag.png");
        assert_eq!(Flag::Unavailable.to_string(), NO_FLAG);
    }

    #[test]
    fn flag_default_is_unavailable() {
        assert_eq!(Flag::default(), Flag::Unavailable);
    }

    #[test]
    fn record_serializes_flag_as_url_or_null() {
        let mut record = sample();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["flag"], "http://x/flag.png");
        assert_eq!(json["common_name"], "X");

        record.flag = Flag::Unavailable;
        let json = serde_json::to_value(&record).unwrap();
        assert!(json["flag"].is_null());
    }

    #[test]
    fn rows_in_display_order() {
        let labels: Vec<&str> = sample().rows().into_iter().map(|(l, _)| l).collect();
        assert_eq!(
            labels,
            vec![
                "Name",
                "Official Name",
                "Native Name",
                "Capital",
                "Languages",
                "Continent",
                "Flag"
            ]
        );
    }
}
