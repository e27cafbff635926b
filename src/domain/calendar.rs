//! Fixed liturgical and calendar data

use chrono::Weekday;

/// Reading type whose heading never carries an occasion
pub const SELF_EXPLANATORY_TYPE: &str = "Matins Gospel";

/// Reading types that only appear on [`RESTRICTED_WEEKDAY`]
pub const SUNDAY_ONLY_TYPES: &[&str] = &["Matins Gospel"];

/// The weekday on which [`SUNDAY_ONLY_TYPES`] are admitted
pub const RESTRICTED_WEEKDAY: Weekday = Weekday::Sun;

/// Footer appended to every document unless configured otherwise
pub const DEFAULT_FOOTER: &str =
    "#Christian #OrthodoxChristian #Bible #Scripture #Orthodox #Orthostr #Biblestr";

/// Whether a reading of this type may appear on a date falling on `weekday`
pub fn admits_type(reading_type: &str, weekday: Weekday) -> bool {
    !SUNDAY_ONLY_TYPES.contains(&reading_type) || weekday == RESTRICTED_WEEKDAY
}
