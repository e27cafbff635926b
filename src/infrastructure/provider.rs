//! Data provider seams

use crate::domain::AlternateReading;
use crate::error::Result;
use chrono::NaiveDate;

/// A reading link on the daily page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingLink {
    pub index: u32,
    pub link_text: String,
}

/// Everything the daily page lists for a date
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyPage {
    /// Reading links sorted by index
    pub links: Vec<ReadingLink>,
    /// Cleaned commemoration names, in page order
    pub commemorations: Vec<String>,
}

/// Details of one reading; every field may be missing if the page was odd
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadingDetail {
    pub reference: Option<String>,
    pub reading_type: Option<String>,
    pub occasion: Option<String>,
    pub text: Option<String>,
}

/// The alternate source's view of a date
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlternateDay {
    pub readings: Vec<AlternateReading>,
    pub titles: Vec<String>,
}

/// Source of the daily reading list and commemorations
pub trait DailyPageProvider {
    fn daily_page(&self, date: NaiveDate) -> Result<DailyPage>;
}

/// Source of individual reading details
pub trait ReadingDetailProvider {
    fn reading_detail(&self, date: NaiveDate, index: u32) -> Result<ReadingDetail>;
}

/// Source of alternate reading descriptions and day titles
pub trait AlternateSourceProvider {
    fn alternate_day(&self, date: NaiveDate) -> Result<AlternateDay>;
}
