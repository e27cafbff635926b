//! orthocal.info gregorian calendar API

use crate::domain::AlternateReading;
use crate::error::{ReadingsError, Result};
use crate::infrastructure::http::HttpClient;
use crate::infrastructure::provider::{AlternateDay, AlternateSourceProvider};
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

/// The parts of the API's day object we use
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OrthocalDay {
    readings: Vec<AlternateReading>,
    titles: Vec<String>,
}

/// Parse the API's JSON for one day
pub fn parse_day(json: &str, url: &str) -> Result<AlternateDay> {
    let day: OrthocalDay = serde_json::from_str(json).map_err(|e| ReadingsError::parse(url, e))?;
    Ok(AlternateDay {
        readings: day.readings,
        titles: day.titles,
    })
}

/// Client for orthocal.info
#[derive(Debug, Clone)]
pub struct OrthocalClient {
    http: HttpClient,
    base_url: String,
}

impl OrthocalClient {
    pub fn new(http: HttpClient, base_url: &str) -> Self {
        OrthocalClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Day URL; the API takes unpadded year/month/day segments
    pub fn day_url(&self, date: NaiveDate) -> String {
        format!(
            "{}/{}/{}/{}/",
            self.base_url,
            date.year(),
            date.month(),
            date.day()
        )
    }
}

impl AlternateSourceProvider for OrthocalClient {
    fn alternate_day(&self, date: NaiveDate) -> Result<AlternateDay> {
        let url = self.day_url(date);
        parse_day(&self.http.get_text(&url)?, &url)
    }
}
