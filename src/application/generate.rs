//! Generate readings document use case

use crate::domain::{AlternateDescriptionIndex, DocumentAssembler, OccasionResolver, Reading};
use crate::error::Result;
use crate::infrastructure::{
    AlternateSourceProvider, DailyPage, DailyPageProvider, ReadingDetailProvider,
};
use chrono::NaiveDate;
use tracing::{info, warn};

/// Service producing the markdown document for one date
pub struct GenerateService<D, R, A> {
    daily: D,
    details: R,
    alternate: A,
    footer: String,
}

impl<D, R, A> GenerateService<D, R, A>
where
    D: DailyPageProvider,
    R: ReadingDetailProvider,
    A: AlternateSourceProvider,
{
    pub fn new(daily: D, details: R, alternate: A, footer: impl Into<String>) -> Self {
        GenerateService {
            daily,
            details,
            alternate,
            footer: footer.into(),
        }
    }

    /// Fetch everything for `date` and render the document.
    ///
    /// Only a failure to load the daily page is fatal; alternate-source and
    /// per-reading failures are logged and the document is built without them.
    pub fn execute(&self, date: NaiveDate) -> Result<String> {
        info!(%date, "fetching readings");

        // 1. Alternate descriptions and day titles (optional)
        let (alternates, day_titles) = match self.alternate.alternate_day(date) {
            Ok(day) => (
                AlternateDescriptionIndex::from_readings(&day.readings),
                day.titles,
            ),
            Err(e) => {
                warn!(%date, error = %e, "could not fetch alternate descriptions");
                (AlternateDescriptionIndex::default(), Vec::new())
            }
        };

        // 2. Daily page (required)
        let page = self.daily.daily_page(date)?;
        if page.links.is_empty() {
            warn!(%date, "no reading links found");
        }

        // 3. Individual readings
        let readings = self.collect_readings(date, &page);

        // 4. Render
        let resolver = OccasionResolver::new(&page.commemorations, &alternates, &day_titles);
        Ok(DocumentAssembler::new(resolver, &self.footer).assemble(&readings, date))
    }

    fn collect_readings(&self, date: NaiveDate, page: &DailyPage) -> Vec<Reading> {
        let mut readings = Vec::with_capacity(page.links.len());
        for link in &page.links {
            info!(index = link.index, reference = %link.link_text, "fetching reading");
            let detail = match self.details.reading_detail(date, link.index) {
                Ok(detail) => detail,
                Err(e) => {
                    warn!(%date, index = link.index, error = %e, "could not fetch reading");
                    continue;
                }
            };

            readings.push(Reading {
                index: link.index,
                reference: detail.reference.unwrap_or_else(|| link.link_text.clone()),
                reading_type: detail.reading_type.unwrap_or_default(),
                occasion: detail.occasion.unwrap_or_default(),
                text: detail.text.unwrap_or_default(),
            });
        }
        readings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AlternateReading;
    use crate::error::ReadingsError;
    use crate::infrastructure::{AlternateDay, ReadingDetail, ReadingLink};
    use std::collections::HashMap;

    struct FakeDaily(Option<DailyPage>);

    impl DailyPageProvider for FakeDaily {
        fn daily_page(&self, _date: NaiveDate) -> Result<DailyPage> {
            self.0
                .clone()
                .ok_or_else(|| ReadingsError::http("https://www.oca.org/readings/daily", "503"))
        }
    }

    struct FakeDetails(HashMap<u32, ReadingDetail>);

    impl ReadingDetailProvider for FakeDetails {
        fn reading_detail(&self, _date: NaiveDate, index: u32) -> Result<ReadingDetail> {
            self.0
                .get(&index)
                .cloned()
                .ok_or_else(|| ReadingsError::http("https://www.oca.org/readings/daily/x", "404"))
        }
    }

    struct FakeAlternate(Option<AlternateDay>);

    impl AlternateSourceProvider for FakeAlternate {
        fn alternate_day(&self, _date: NaiveDate) -> Result<AlternateDay> {
            self.0
                .clone()
                .ok_or_else(|| ReadingsError::http("https://orthocal.info", "timeout"))
        }
    }

    fn link(index: u32, text: &str) -> ReadingLink {
        ReadingLink {
            index,
            link_text: text.to_string(),
        }
    }

    fn detail(reference: Option<&str>, kind: &str, occasion: Option<&str>) -> ReadingDetail {
        ReadingDetail {
            reference: reference.map(str::to_string),
            reading_type: Some(kind.to_string()),
            occasion: occasion.map(str::to_string),
            text: None,
        }
    }

    fn page() -> DailyPage {
        DailyPage {
            links: vec![
                link(1, "Hebrews 7:26-8:2"),
                link(2, "John 10:9-16"),
                link(3, "Mark 12:28-37"),
            ],
            commemorations: vec!["Saint Innocent, Bishop of Alaska".to_string()],
        }
    }

    fn details() -> FakeDetails {
        let mut map = HashMap::new();
        map.insert(1, detail(None, "Epistle", Some("Saint")));
        map.insert(3, detail(Some("Mark 12:28-37"), "Gospel", None));
        FakeDetails(map)
    }

    fn alternate() -> AlternateDay {
        AlternateDay {
            readings: vec![AlternateReading {
                display: "Hebrews 7.26-8.2".to_string(),
                short_display: String::new(),
                description: "St. Innocent".to_string(),
            }],
            titles: vec!["Thursday of the 30th week after Pentecost".to_string()],
        }
    }

    fn jan1() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
    }

    #[test]
    fn test_execute_resolves_occasions() {
        let service = GenerateService::new(
            FakeDaily(Some(page())),
            details(),
            FakeAlternate(Some(alternate())),
            "#footer",
        );

        let doc = service.execute(jan1()).unwrap();

        // Link text stands in for the missing reference
        assert!(doc.contains(
            "## [Epistle reading for Saint Innocent, Bishop of Alaska (Hebrews 7:26-8:2)](oca.org/readings/daily/2026/01/01/1)"
        ));
        assert!(doc.contains(
            "## [Gospel reading for the 30th Thursday after Pentecost (Mark 12:28-37)]"
        ));
        // Reading 2 failed to load and is skipped
        assert!(!doc.contains("John 10:9-16"));
        assert!(doc.ends_with("#footer\n"));
    }

    #[test]
    fn test_alternate_failure_degrades() {
        let service =
            GenerateService::new(FakeDaily(Some(page())), details(), FakeAlternate(None), "");

        let doc = service.execute(jan1()).unwrap();

        assert!(doc.contains("## [Epistle reading (Hebrews 7:26-8:2)]"));
        assert!(doc.contains("## [Gospel reading (Mark 12:28-37)]"));
    }

    #[test]
    fn test_daily_page_failure_is_fatal() {
        let service = GenerateService::new(
            FakeDaily(None),
            details(),
            FakeAlternate(Some(alternate())),
            "",
        );

        match service.execute(jan1()).unwrap_err() {
            ReadingsError::Http { message, .. } => assert_eq!(message, "503"),
            other => panic!("Expected Http error, got {:?}", other),
        }
    }

    #[test]
    fn test_no_links_renders_notice() {
        let service = GenerateService::new(
            FakeDaily(Some(DailyPage::default())),
            details(),
            FakeAlternate(None),
            "",
        );

        let doc = service.execute(jan1()).unwrap();
        assert!(doc.contains("*No readings found for this date.*"));
    }
}
