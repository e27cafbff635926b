//! Scripture reference normalization

use regex::Regex;
use std::sync::OnceLock;

/// Leading "Composite N - " marker the OCA puts in front of composite readings
fn composite_prefix_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?i)^Composite \d+\s*-\s*").unwrap())
}

/// Everything except word characters and hyphens
fn punctuation_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[^\w-]").unwrap())
}

/// Normalize a scripture reference into a key that is stable across sources.
///
/// `"Colossians 2:8-12"` and `"Colossians 2.8-12"` both become
/// `"colossians28-12"`. Hyphens survive so verse ranges stay distinct.
pub fn normalize(reference: &str) -> String {
    let stripped = composite_prefix_regex().replace(reference, "");
    punctuation_regex()
        .replace_all(&stripped, "")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_reference() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_separator_styles_match() {
        assert_eq!(normalize("Colossians 2:8-12"), normalize("Colossians 2.8-12"));
        assert_eq!(normalize("1 Cor. 2.8-12"), normalize("1 Cor 2:8-12"));
        assert_eq!(normalize("Colossians 2:8-12"), "colossians28-12");
    }

    #[test]
    fn test_whitespace_ignored() {
        assert_eq!(normalize("  John 21:1-14 "), normalize("John 21:1-14"));
        assert_eq!(normalize("John\t21 : 1-14"), "john211-14");
    }

    #[test]
    fn test_composite_prefix_stripped() {
        assert_eq!(
            normalize("Composite 3 - Hebrews 7:26-8:2"),
            normalize("Hebrews 7.26-8.2")
        );
        assert_eq!(normalize("composite 12-Luke 6:17-23"), "luke617-23");
    }

    #[test]
    fn test_composite_only_at_start() {
        assert_eq!(normalize("Luke 1:1 Composite 3 - "), "luke11composite3-");
    }

    #[test]
    fn test_ranges_stay_distinct() {
        assert_ne!(normalize("Mark 1:1-12"), normalize("Mark 11:12"));
    }
}
