//! Readings as described by the alternate source (orthocal.info)

use crate::domain::reference::normalize;
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

/// orthocal.info sends `null` for some absent strings
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// One reading from the alternate source's day listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AlternateReading {
    /// Full display reference (e.g. "Colossians 2.8-12")
    #[serde(deserialize_with = "null_as_empty")]
    pub display: String,
    /// Abbreviated reference, used when `display` is missing
    #[serde(deserialize_with = "null_as_empty")]
    pub short_display: String,
    /// Short phrase such as "St. Innocent" or "30th Thursday after Pentecost"
    #[serde(deserialize_with = "null_as_empty")]
    pub description: String,
}

/// Alternate readings keyed by normalized scripture reference
#[derive(Debug, Clone, Default)]
pub struct AlternateDescriptionIndex {
    entries: HashMap<String, AlternateReading>,
}

impl AlternateDescriptionIndex {
    /// Build the index for one date. A repeated reference keeps the last record.
    pub fn from_readings(readings: &[AlternateReading]) -> Self {
        let mut entries = HashMap::new();
        for reading in readings {
            let display = if reading.display.is_empty() {
                &reading.short_display
            } else {
                &reading.display
            };
            let key = normalize(display);
            if !key.is_empty() {
                entries.insert(key, reading.clone());
            }
        }
        AlternateDescriptionIndex { entries }
    }

    /// Look up the record for a reference in either source's format
    pub fn get(&self, reference: &str) -> Option<&AlternateReading> {
        self.entries.get(&normalize(reference))
    }

    /// Trimmed description for a reference, if the alternate source has one
    pub fn description_for(&self, reference: &str) -> Option<&str> {
        self.get(reference).map(|r| r.description.trim())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(display: &str, short: &str, description: &str) -> AlternateReading {
        AlternateReading {
            display: display.to_string(),
            short_display: short.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_lookup_across_formats() {
        let index = AlternateDescriptionIndex::from_readings(&[reading(
            "Hebrews 7.26-8.2",
            "Heb 7.26-8.2",
            " St. Innocent ",
        )]);
        assert_eq!(
            index.description_for("Composite 1 - Hebrews 7:26-8:2"),
            Some("St. Innocent")
        );
        assert_eq!(index.description_for("Hebrews 7:26"), None);
    }

    #[test]
    fn test_short_display_fallback() {
        let index =
            AlternateDescriptionIndex::from_readings(&[reading("", "John 1.1-17", "Pascha")]);
        assert_eq!(index.description_for("John 1:1-17"), Some("Pascha"));
    }

    #[test]
    fn test_empty_references_skipped() {
        let index = AlternateDescriptionIndex::from_readings(&[reading("", "", "Orphan")]);
        assert!(index.is_empty());
        assert_eq!(index.description_for(""), None);
    }

    #[test]
    fn test_last_write_wins() {
        let index = AlternateDescriptionIndex::from_readings(&[
            reading("Luke 6.17-23", "", "first"),
            reading("Luke 6:17-23", "", "second"),
        ]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.description_for("Luke 6.17-23"), Some("second"));
    }

    #[test]
    fn test_missing_json_fields_default() {
        let parsed: AlternateReading =
            serde_json::from_str(r#"{"display": "Mark 1.1-8"}"#).unwrap();
        assert_eq!(parsed.description, "");
        assert_eq!(parsed.short_display, "");

        let parsed: AlternateReading =
            serde_json::from_str(r#"{"display": "Mark 1.1-8", "description": null}"#).unwrap();
        assert_eq!(parsed.description, "");
    }
}
