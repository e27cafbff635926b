//! Infrastructure layer - Configuration, HTTP and the two reading sources

pub mod config;
pub mod http;
pub mod oca;
pub mod orthocal;
pub mod provider;

pub use config::Config;
pub use http::HttpClient;
pub use oca::OcaClient;
pub use orthocal::OrthocalClient;
pub use provider::{
    AlternateDay, AlternateSourceProvider, DailyPage, DailyPageProvider, ReadingDetail,
    ReadingDetailProvider, ReadingLink,
};
