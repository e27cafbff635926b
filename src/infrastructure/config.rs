//! Configuration management

use crate::domain::calendar::DEFAULT_FOOTER;
use crate::error::{ReadingsError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming a configuration file
pub const CONFIG_ENV: &str = "DAILY_READINGS_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Base URL of the OCA site
    pub oca_base_url: String,
    /// Base URL of the orthocal.info gregorian API
    pub orthocal_base_url: String,
    pub user_agent: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Last line of every generated document
    pub footer: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            oca_base_url: "https://www.oca.org".to_string(),
            orthocal_base_url: "https://orthocal.info/api/gregorian".to_string(),
            user_agent: "daily-saint-bot/1.0".to_string(),
            timeout_secs: 15,
            footer: DEFAULT_FOOTER.to_string(),
        }
    }
}

impl Config {
    /// Load the configuration.
    ///
    /// An explicit path wins over `DAILY_READINGS_CONFIG`; with neither the
    /// built-in defaults are used.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

        match path {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ReadingsError::ConfigNotFound(path.to_path_buf())
            } else {
                ReadingsError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(ReadingsError::Config(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        for (key, url) in [
            ("oca_base_url", &self.oca_base_url),
            ("orthocal_base_url", &self.orthocal_base_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ReadingsError::Config(format!(
                    "{} must be an http(s) URL, got '{}'",
                    key, url
                )));
            }
        }
        Ok(())
    }
}
