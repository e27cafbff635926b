//! Markdown document assembly

use crate::domain::calendar::admits_type;
use crate::domain::occasion::OccasionResolver;
use crate::domain::reading::{label, Reading};
use chrono::{Datelike, NaiveDate};

const READINGS_SITE: &str = "oca.org/readings/daily";
const NO_READINGS: &str = "*No readings found for this date.*";

/// Readings that belong in the document for `date`, in index order
pub fn included(readings: &[Reading], date: NaiveDate) -> Vec<&Reading> {
    let weekday = date.weekday();
    let mut kept: Vec<&Reading> = readings
        .iter()
        .filter(|r| !r.reading_type.is_empty() && admits_type(&r.reading_type, weekday))
        .collect();
    kept.sort_by_key(|r| r.index);
    kept
}

/// Renders the day's readings as a publishable markdown document
#[derive(Debug)]
pub struct DocumentAssembler<'a> {
    resolver: OccasionResolver<'a>,
    footer: &'a str,
}

impl<'a> DocumentAssembler<'a> {
    pub fn new(resolver: OccasionResolver<'a>, footer: &'a str) -> Self {
        DocumentAssembler { resolver, footer }
    }

    /// Heading text for one reading
    pub fn heading(&self, reading: &Reading) -> String {
        if reading.is_self_explanatory() {
            return label(reading, "");
        }
        let occasion = self
            .resolver
            .resolve(&reading.occasion, &reading.reference);
        label(reading, &occasion)
    }

    pub fn assemble(&self, readings: &[Reading], date: NaiveDate) -> String {
        let date_path = date.format("%Y/%m/%d").to_string();
        let mut lines = vec![
            format!(
                "# [Scripture Readings for {} (OCA)]({}/{})",
                date.format("%A, %d %B %Y"),
                READINGS_SITE,
                date_path
            ),
            String::new(),
        ];

        let kept = included(readings, date);
        if kept.is_empty() {
            lines.push(NO_READINGS.to_string());
            lines.push(String::new());
        }

        for reading in kept {
            lines.push(format!(
                "## [{}]({}/{}/{})",
                self.heading(reading),
                READINGS_SITE,
                date_path,
                reading.index
            ));
            lines.push(String::new());

            if !reading.text.is_empty() {
                lines.push(format!("> {}", reading.text));
                lines.push(String::new());
            }
        }

        lines.push(self.footer.to_string());
        lines.push(String::new());

        lines.join("\n")
    }
}
