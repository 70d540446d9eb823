//! Property-based tests for directory building.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated catalogs.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use serde_json::{json, Map, Value};

use country_directory::directory::{normalize, Directory, LANGUAGE_CAP, NATIVE_NAME_CAP, SEPARATOR};
use country_directory::source::RawCountryEntry;

/// Strategy for names that never contain the join separator.
fn name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ]{0,11}[A-Za-z]"
}

/// Strategy for a small pool of names, so duplicates are common.
fn pooled_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "English", "French", "Spanish", "Arabic", "Swahili", "Hindi", "Tamil", "Malay",
    ])
    .prop_map(str::to_string)
}

/// Strategy for one raw entry with an optional common name.
fn raw_entry() -> impl Strategy<Value = (Option<String>, Value)> {
    (
        prop::option::weighted(0.9, name()),
        prop::collection::vec(pooled_name(), 0..10),
        prop::collection::vec(pooled_name(), 0..8),
        prop::collection::vec(name(), 0..4),
    )
        .prop_map(|(common, languages, natives, capitals)| {
            let languages: Map<String, Value> = languages
                .into_iter()
                .enumerate()
                .map(|(i, l)| (format!("l{}", i), Value::String(l)))
                .collect();
            let natives: Map<String, Value> = natives
                .into_iter()
                .enumerate()
                .map(|(i, n)| (format!("n{}", i), json!({ "official": n })))
                .collect();

            let mut name = json!({ "official": "Official", "nativeName": natives });
            if let Some(common) = &common {
                name["common"] = Value::String(common.clone());
            }

            let value = json!({
                "name": name,
                "languages": languages,
                "capital": capitals,
                "continents": ["Europe"]
            });
            (common, value)
        })
}

fn split(field: &str) -> Vec<&str> {
    if field.is_empty() {
        Vec::new()
    } else {
        field.split(SEPARATOR).collect()
    }
}

proptest! {
    /// Directory keys come out in ascending order.
    #[test]
    fn keys_are_sorted(entries in prop::collection::vec(raw_entry(), 0..40)) {
        let raw = entries.into_iter().map(|(_, v)| RawCountryEntry::from_value(v));
        let report = Directory::build(raw);

        let names: Vec<&str> = report.directory.names().collect();
        prop_assert!(names.windows(2).all(|w| w[0] < w[1]));
    }

    /// Every named entry has exactly one record, holding the last entry's data.
    #[test]
    fn one_record_per_name_last_write_wins(entries in prop::collection::vec(raw_entry(), 0..40)) {
        let mut expected: HashMap<String, Value> = HashMap::new();
        let mut unnamed = 0;
        for (common, value) in &entries {
            match common {
                Some(common) => { expected.insert(common.clone(), value.clone()); }
                None => unnamed += 1,
            }
        }

        let raw = entries.into_iter().map(|(_, v)| RawCountryEntry::from_value(v));
        let report = Directory::build(raw);

        prop_assert_eq!(report.directory.len(), expected.len());
        prop_assert_eq!(report.skipped.len(), unnamed);
        for (common, value) in expected {
            let record = report.directory.lookup(&common);
            prop_assert!(record.is_some());
            let rebuilt = normalize(&RawCountryEntry::from_value(value)).unwrap();
            prop_assert_eq!(record.unwrap(), &rebuilt);
        }
    }

    /// Capped fields hold at most their cap of distinct items.
    #[test]
    fn capped_fields_respect_caps(entries in prop::collection::vec(raw_entry(), 1..20)) {
        let raw = entries.into_iter().map(|(_, v)| RawCountryEntry::from_value(v));
        let report = Directory::build(raw);

        for record in report.directory.iter() {
            let languages = split(&record.languages);
            let natives = split(&record.native_name);

            prop_assert!(languages.len() <= LANGUAGE_CAP);
            prop_assert!(natives.len() <= NATIVE_NAME_CAP);
            prop_assert_eq!(languages.iter().collect::<HashSet<_>>().len(), languages.len());
            prop_assert_eq!(natives.iter().collect::<HashSet<_>>().len(), natives.len());
        }
    }

    /// Normalizing identical input twice gives identical records.
    #[test]
    fn normalization_is_repeatable((_, value) in raw_entry()) {
        let first = normalize(&RawCountryEntry::from_value(value.clone()));
        let second = normalize(&RawCountryEntry::from_value(value));
        prop_assert_eq!(first, second);
    }
}
