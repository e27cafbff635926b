//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "daily-readings")]
#[command(about = "Generate the day's scripture readings as markdown", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Date (e.g., today, tomorrow, next sunday, 2026-01-01)
    #[arg(value_name = "DATE", default_value = "today")]
    pub date: String,

    /// Configuration file (default: $DAILY_READINGS_CONFIG or built-in defaults)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the document to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}
