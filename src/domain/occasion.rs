//! Occasion resolution
//!
//! Turns the terse occasion code attached to an OCA reading ("Circumcision",
//! "Saint", "30th Thursday after Pentecost", or nothing at all) into a phrase
//! that reads naturally after "reading for". The decision is an ordered chain
//! of [`OccasionRule`]s; the first rule that produces text wins.

use crate::domain::alternate::AlternateDescriptionIndex;
use crate::domain::commemoration::find_match;
use regex::Regex;
use std::sync::OnceLock;

/// Bare positional labels such as "1st reading" or "2nd  reading"
fn positional_label_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?i)^\d+\w*\s+reading$").unwrap())
}

/// Ecclesiastical title in front of a name ("St. Innocent", "Holy Anna")
fn title_prefix_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?i)^(St\.?|Ven\.?|Holy|The)\s+").unwrap())
}

fn leading_the_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^The\s+").unwrap())
}

fn leading_saint_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?i)^Saint\b").unwrap())
}

/// "Thursday of the 30th week after Pentecost"
fn week_title_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?i)^(\w+) of the (\d+\w+) week after (.+)").unwrap())
}

fn starts_with_digit(text: &str) -> bool {
    text.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// Collapse whitespace and drop labels that carry no occasion information
fn clean_abbreviation(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if positional_label_regex().is_match(&collapsed) {
        String::new()
    } else {
        collapsed
    }
}

fn strip_title(text: &str) -> String {
    title_prefix_regex().replace(text, "").trim().to_string()
}

/// Make a commemoration read naturally after "reading for".
///
/// "The Circumcision of our Lord" becomes "the Circumcision of our Lord",
/// "Repose of Venerable Seraphim" gains a "the ", "Saint ..." stays as is.
pub fn with_article(commemoration: &str) -> String {
    let text = leading_the_regex().replace(commemoration, "the ");
    if text.starts_with("the ") || leading_saint_regex().is_match(&text) {
        text.into_owned()
    } else {
        format!("the {}", text)
    }
}

/// Everything the resolver knows about one reading
#[derive(Debug)]
pub struct OccasionQuery<'a> {
    /// Cleaned occasion code (empty when absent or positional)
    pub abbreviation: String,
    /// The reading's scripture reference as the OCA prints it
    pub reference: &'a str,
}

/// One step of the resolution chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OccasionRule {
    /// "30th Thursday after Pentecost" → "the 30th Thursday after Pentecost"
    WeekdayOrdinal,
    /// A specific feast or saint code, expanded through the commemorations
    NamedCommemoration,
    /// Generic "Saint" or no code: ask the alternate source about the reference
    AlternateDescription,
    /// Last resort: the day's title
    DayTitle,
}

impl OccasionRule {
    /// Rules in priority order
    pub const CHAIN: [OccasionRule; 4] = [
        OccasionRule::WeekdayOrdinal,
        OccasionRule::NamedCommemoration,
        OccasionRule::AlternateDescription,
        OccasionRule::DayTitle,
    ];

    /// Apply this rule, returning `None` to defer to the next one
    pub fn apply(self, query: &OccasionQuery<'_>, resolver: &OccasionResolver<'_>) -> Option<String> {
        let abbrev = query.abbreviation.as_str();
        match self {
            OccasionRule::WeekdayOrdinal => {
                starts_with_digit(abbrev).then(|| format!("the {}", abbrev))
            }
            OccasionRule::NamedCommemoration => {
                if abbrev.is_empty() || matches!(abbrev.to_lowercase().as_str(), "saint" | "the") {
                    return None;
                }
                // An unmatched code still beats an empty heading
                Some(
                    resolver
                        .expand(&strip_title(abbrev))
                        .unwrap_or_else(|| abbrev.to_string()),
                )
            }
            OccasionRule::AlternateDescription => {
                if query.reference.is_empty() {
                    return None;
                }
                let description = resolver.alternates.description_for(query.reference)?;
                if description.is_empty() {
                    return None;
                }
                if starts_with_digit(description) {
                    return Some(format!("the {}", description));
                }
                Some(
                    resolver
                        .expand(&strip_title(description))
                        .unwrap_or_else(|| description.to_string()),
                )
            }
            OccasionRule::DayTitle => {
                let title = resolver.day_titles.first()?;
                if let Some(caps) = week_title_regex().captures(title) {
                    return Some(format!("the {} {} after {}", &caps[2], &caps[1], &caps[3]));
                }
                if starts_with_digit(title) {
                    return Some(format!("the {}", title));
                }
                Some(title.clone())
            }
        }
    }
}

/// Resolves occasions for the readings of a single date.
///
/// Holds read-only views of the day's commemorations, the alternate
/// description index and the day titles.
#[derive(Debug, Clone, Copy)]
pub struct OccasionResolver<'a> {
    commemorations: &'a [String],
    alternates: &'a AlternateDescriptionIndex,
    day_titles: &'a [String],
}

impl<'a> OccasionResolver<'a> {
    pub fn new(
        commemorations: &'a [String],
        alternates: &'a AlternateDescriptionIndex,
        day_titles: &'a [String],
    ) -> Self {
        OccasionResolver {
            commemorations,
            alternates,
            day_titles,
        }
    }

    /// Resolve the occasion phrase for one reading. Never fails; an empty
    /// string means nothing useful was found.
    pub fn resolve(&self, occasion_abbrev: &str, reference: &str) -> String {
        let query = OccasionQuery {
            abbreviation: clean_abbreviation(occasion_abbrev),
            reference,
        };
        self.resolve_with(&query)
            .map(|(_, occasion)| occasion)
            .unwrap_or_default()
    }

    /// Run the chain and report which rule produced the occasion
    pub fn resolve_with(&self, query: &OccasionQuery<'_>) -> Option<(OccasionRule, String)> {
        OccasionRule::CHAIN
            .iter()
            .find_map(|rule| rule.apply(query, self).map(|occasion| (*rule, occasion)))
    }

    fn expand(&self, key: &str) -> Option<String> {
        find_match(key, self.commemorations).map(with_article)
    }
}
