//! Readings and their headings

use crate::domain::calendar::SELF_EXPLANATORY_TYPE;
use regex::Regex;
use std::sync::OnceLock;

/// "10th Matins Gospel" style ordinal, only when Matins Gospel follows
fn matins_ordinal_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\d+\w+\s+(Matins Gospel)").unwrap())
}

/// Normalize a reading type as printed by the OCA.
///
/// The ordinal in "10th Matins Gospel" is dropped; hour readings such as
/// "6th Hour" keep theirs.
pub fn normalize_type(raw: &str) -> String {
    matins_ordinal_regex()
        .replace(raw.trim(), "$1")
        .trim()
        .to_string()
}

/// One scripture reading for a date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    /// Position in the source's listing
    pub index: u32,
    /// Scripture reference, e.g. "Colossians 2:8-12"
    pub reference: String,
    /// Reading type label ("Epistle", "Gospel", "6th Hour", ...), may be empty
    pub reading_type: String,
    /// Occasion code attached by the source, may be empty
    pub occasion: String,
    /// Verse text, may be empty
    pub text: String,
}

impl Reading {
    pub fn new(index: u32, reference: impl Into<String>, reading_type: impl Into<String>) -> Self {
        Reading {
            index,
            reference: reference.into(),
            reading_type: reading_type.into(),
            occasion: String::new(),
            text: String::new(),
        }
    }

    pub fn with_occasion(mut self, occasion: impl Into<String>) -> Self {
        self.occasion = occasion.into();
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Whether the heading for this reading skips the occasion clause
    pub fn is_self_explanatory(&self) -> bool {
        self.reading_type == SELF_EXPLANATORY_TYPE
    }
}

/// Compose the displayable heading for a reading
pub fn label(reading: &Reading, occasion: &str) -> String {
    if reading.is_self_explanatory() || occasion.is_empty() {
        format!("{} reading ({})", reading.reading_type, reading.reference)
    } else {
        format!(
            "{} reading for {} ({})",
            reading.reading_type, occasion, reading.reference
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_matins_ordinal() {
        assert_eq!(normalize_type("10th  Matins Gospel"), "Matins Gospel");
        assert_eq!(normalize_type("3rd Matins Gospel"), "Matins Gospel");
    }

    #[test]
    fn test_normalize_keeps_hour_ordinal() {
        assert_eq!(normalize_type("6th Hour"), "6th Hour");
        assert_eq!(normalize_type(" Epistle "), "Epistle");
    }

    #[test]
    fn test_label_with_occasion() {
        let reading = Reading::new(2, "Colossians 2:8-12", "Epistle");
        assert_eq!(
            label(&reading, "the Circumcision of our Lord"),
            "Epistle reading for the Circumcision of our Lord (Colossians 2:8-12)"
        );
    }

    #[test]
    fn test_label_without_occasion() {
        let reading = Reading::new(3, "Luke 2:20-21", "Gospel");
        assert_eq!(label(&reading, ""), "Gospel reading (Luke 2:20-21)");
    }

    #[test]
    fn test_matins_gospel_ignores_occasion() {
        let reading = Reading::new(1, "John 21:1-14", "Matins Gospel");
        assert_eq!(
            label(&reading, "the 30th Sunday after Pentecost"),
            "Matins Gospel reading (John 21:1-14)"
        );
    }
}
