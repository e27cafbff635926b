//! daily-readings - Daily scripture readings generator
//!
//! Reconciles the OCA daily readings with the orthocal.info descriptions of
//! the same readings into human-readable occasion headings and renders them
//! as a markdown document.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ReadingsError;
