//! Commemoration cleaning and whole-word lookup

use regex::{Regex, RegexBuilder};
use std::sync::OnceLock;

fn trailing_year_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\s*\(\d{4}\)\s*$").unwrap())
}

fn saint_abbrev_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\bSt\.\s+").unwrap())
}

fn venerable_abbrev_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\bVen\.\s+").unwrap())
}

const LIGATURES: [(&str, &str); 6] = [
    ("æ", "ae"),
    ("Æ", "Ae"),
    ("œ", "oe"),
    ("Œ", "Oe"),
    ("ć", "c"),
    ("č", "c"),
];

/// Clean one raw commemoration entry as scraped from the daily page.
///
/// Collapses whitespace, drops a trailing `(YYYY)` year, replaces archaic
/// ligatures and expands `St.`/`Ven.` into full titles.
pub fn clean(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut entry = trailing_year_regex()
        .replace(&collapsed, "")
        .trim()
        .to_string();

    for (ligature, plain) in LIGATURES {
        entry = entry.replace(ligature, plain);
    }

    let entry = saint_abbrev_regex().replace_all(&entry, "Saint ");
    venerable_abbrev_regex()
        .replace_all(&entry, "Venerable ")
        .into_owned()
}

/// Find the first commemoration containing `key` as a whole word.
///
/// Matching is case-insensitive and `key` is taken literally.
pub fn find_match<'a>(key: &str, commemorations: &'a [String]) -> Option<&'a str> {
    if key.is_empty() || commemorations.is_empty() {
        return None;
    }

    let pattern = RegexBuilder::new(&format!(r"\b{}\b", regex::escape(key)))
        .case_insensitive(true)
        .build()
        .ok()?;

    commemorations
        .iter()
        .find(|entry| pattern.is_match(entry))
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(find_match("", &list(&["Holy Anna the Prophetess"])), None);
        assert_eq!(find_match("Anna", &[]), None);
    }

    #[test]
    fn test_whole_word_only() {
        let comms = list(&["Holy Anna the Prophetess"]);
        assert_eq!(find_match("Ann", &comms), None);
        assert_eq!(find_match("Anna", &comms), Some("Holy Anna the Prophetess"));
    }

    #[test]
    fn test_case_insensitive() {
        let comms = list(&["The Circumcision of our Lord"]);
        assert_eq!(
            find_match("circumcision", &comms),
            Some("The Circumcision of our Lord")
        );
    }

    #[test]
    fn test_first_match_wins() {
        let comms = list(&[
            "Saint Basil the Great",
            "Repose of Saint Basil of Ostrog",
        ]);
        assert_eq!(find_match("Basil", &comms), Some("Saint Basil the Great"));
    }

    #[test]
    fn test_key_is_literal() {
        let comms = list(&["Saint John (Maximovitch)", "Saint Johnny"]);
        assert_eq!(find_match("J.hn", &comms), None);
        assert_eq!(find_match("Joh+n", &comms), None);
        assert_eq!(find_match("John", &comms), Some("Saint John (Maximovitch)"));
    }

    #[test]
    fn test_clean_strips_year_and_expands_titles() {
        assert_eq!(
            clean("Repose of Ven.  Seraphim of Sarov  (1833)"),
            "Repose of Venerable Seraphim of Sarov"
        );
        assert_eq!(
            clean("St. Innocent, Bishop of Alaska"),
            "Saint Innocent, Bishop of Alaska"
        );
    }

    #[test]
    fn test_clean_replaces_ligatures() {
        assert_eq!(clean("Martyr Cæsarius"), "Martyr Caesarius");
        assert_eq!(clean("Saint Nikolaj Velimirović"), "Saint Nikolaj Velimirovic");
    }

    #[test]
    fn test_clean_keeps_inner_years() {
        assert_eq!(clean("Council (325) of Nicaea"), "Council (325) of Nicaea");
    }
}
