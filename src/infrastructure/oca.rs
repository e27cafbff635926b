//! OCA daily readings pages

use crate::domain::commemoration;
use crate::domain::reading::normalize_type;
use crate::error::{ReadingsError, Result};
use crate::infrastructure::http::HttpClient;
use crate::infrastructure::provider::{
    DailyPage, DailyPageProvider, ReadingDetail, ReadingDetailProvider, ReadingLink,
};
use chrono::NaiveDate;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use std::sync::OnceLock;
use tracing::debug;

fn selector(cache: &'static OnceLock<Selector>, css: &str) -> &'static Selector {
    cache.get_or_init(|| Selector::parse(css).unwrap())
}

fn anchor_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    selector(&SELECTOR, "a[href]")
}

fn h2_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    selector(&SELECTOR, "h2")
}

fn h3_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    selector(&SELECTOR, "h3")
}

fn strong_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    selector(&SELECTOR, "strong")
}

fn verse_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    selector(&SELECTOR, "dl.reading dd")
}

fn commemorated_heading_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?i)today.s commemorated").unwrap())
}

fn reading_href_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"/readings/daily/(\d{4}/\d{2}/\d{2})/(\d+)$").unwrap())
}

fn parenthesised_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\(([^)]+)\)").unwrap())
}

/// Text of an element with its text nodes trimmed and joined by spaces
fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn date_path(date: NaiveDate) -> String {
    date.format("%Y/%m/%d").to_string()
}

fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Extract the reading links and commemorations from a daily page
pub fn parse_daily_page(html: &str, date: NaiveDate) -> DailyPage {
    let document = Html::parse_document(html);

    let wanted = date_path(date);

    let mut seen = HashSet::new();
    let mut links = Vec::new();
    for anchor in document.select(anchor_selector()) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let Some(index) = reading_href_regex()
            .captures(href)
            .filter(|caps| caps[1] == wanted)
            .and_then(|caps| caps[2].parse::<u32>().ok())
        else {
            continue;
        };
        if seen.insert(index) {
            links.push(ReadingLink {
                index,
                link_text: element_text(anchor),
            });
        }
    }
    links.sort_by_key(|link| link.index);

    DailyPage {
        links,
        commemorations: parse_commemorations(&document),
    }
}

/// Main feast and saint names from the paragraph after the
/// "Today's commemorated feasts and saints" heading
fn parse_commemorations(document: &Html) -> Vec<String> {
    let Some(heading) = document
        .select(h3_selector())
        .find(|h3| commemorated_heading_regex().is_match(&element_text(*h3)))
    else {
        return Vec::new();
    };

    let Some(paragraph) = heading
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "p")
    else {
        return Vec::new();
    };

    paragraph
        .select(strong_selector())
        .map(|strong| commemoration::clean(&element_text(strong)))
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// Extract reference, type, occasion code and verse text from a reading page.
///
/// The heading looks like `"Colossians 2:8-12 (Epistle, Circumcision)"`.
pub fn parse_reading_page(html: &str) -> ReadingDetail {
    let document = Html::parse_document(html);

    let Some(heading) = document
        .select(h2_selector())
        .map(element_text)
        .find(|text| text.contains('(') && text.contains(')'))
    else {
        return ReadingDetail::default();
    };

    let reference = heading
        .split_once('(')
        .and_then(|(before, _)| non_empty(before));

    let (reading_type, occasion) = match parenthesised_regex().captures(&heading) {
        Some(caps) => {
            let inner = caps[1].to_string();
            match inner.split_once(',') {
                Some((kind, occasion)) => (non_empty(kind), Some(occasion.trim().to_string())),
                None => (non_empty(&inner), None),
            }
        }
        None => (None, None),
    };

    let verses: Vec<String> = document
        .select(verse_selector())
        .map(element_text)
        .filter(|t| !t.is_empty())
        .collect();

    ReadingDetail {
        reference,
        reading_type: reading_type.map(|t| normalize_type(&t)),
        occasion,
        text: non_empty(&verses.join(" ")),
    }
}

/// Client for oca.org
#[derive(Debug, Clone)]
pub struct OcaClient {
    http: HttpClient,
    base_url: String,
}

impl OcaClient {
    pub fn new(http: HttpClient, base_url: &str) -> Self {
        OcaClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn daily_url(&self, date: NaiveDate) -> String {
        format!("{}/readings/daily/{}", self.base_url, date_path(date))
    }
}

impl DailyPageProvider for OcaClient {
    fn daily_page(&self, date: NaiveDate) -> Result<DailyPage> {
        let url = self.daily_url(date);
        let page = parse_daily_page(&self.http.get_text(&url)?, date);
        debug!(
            links = page.links.len(),
            commemorations = page.commemorations.len(),
            "parsed daily page"
        );
        Ok(page)
    }
}

impl ReadingDetailProvider for OcaClient {
    fn reading_detail(&self, date: NaiveDate, index: u32) -> Result<ReadingDetail> {
        let url = format!("{}/{}", self.daily_url(date), index);
        let body = self.http.get_text(&url)?;
        if body.trim().is_empty() {
            return Err(ReadingsError::parse(&url, "empty response body"));
        }
        Ok(parse_reading_page(&body))
    }
}
