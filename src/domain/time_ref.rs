//! Date argument parsing and resolution

use crate::error::{ReadingsError, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// A date as given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateArgument {
    Today,
    Yesterday,
    Tomorrow,
    /// Previous occurrence of a weekday (strictly before the base date)
    LastWeekday(Weekday),
    /// Next occurrence of a weekday (strictly after the base date)
    NextWeekday(Weekday),
    /// ISO date (YYYY-MM-DD)
    SpecificDate(NaiveDate),
}

impl DateArgument {
    /// Parse a date argument
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "today" | "now" => Ok(DateArgument::Today),
            "yesterday" => Ok(DateArgument::Yesterday),
            "tomorrow" => Ok(DateArgument::Tomorrow),
            _ if normalized.starts_with("last ") => Self::parse_weekday(input, &normalized[5..])
                .map(DateArgument::LastWeekday),
            _ if normalized.starts_with("next ") => Self::parse_weekday(input, &normalized[5..])
                .map(DateArgument::NextWeekday),
            _ => NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
                .map(DateArgument::SpecificDate)
                .map_err(|_| ReadingsError::InvalidDate(input.to_string())),
        }
    }

    fn parse_weekday(input: &str, day: &str) -> Result<Weekday> {
        day.trim()
            .parse::<Weekday>()
            .map_err(|_| ReadingsError::InvalidDate(input.to_string()))
    }

    /// Resolve to a calendar date relative to `base_date`
    pub fn resolve(&self, base_date: NaiveDate) -> NaiveDate {
        let current = base_date.weekday().num_days_from_monday() as i64;
        match self {
            DateArgument::Today => base_date,
            DateArgument::Yesterday => base_date - Duration::days(1),
            DateArgument::Tomorrow => base_date + Duration::days(1),
            DateArgument::LastWeekday(target) => {
                let back = (current - target.num_days_from_monday() as i64).rem_euclid(7);
                base_date - Duration::days(if back == 0 { 7 } else { back })
            }
            DateArgument::NextWeekday(target) => {
                let forward = (target.num_days_from_monday() as i64 - current).rem_euclid(7);
                base_date + Duration::days(if forward == 0 { 7 } else { forward })
            }
            DateArgument::SpecificDate(date) => *date,
        }
    }
}
