//! Global calgrid configuration.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calendar_list::CalendarOptions;
use crate::error::{CalGridError, CalGridResult};
use crate::month::WeekStart;

pub static DEFAULT_LOCALE: &str = "en-US";

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

/// How the CLI prints month views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "Unknown output format '{}'. Expected text, html or json",
                other
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

/// Global configuration at ~/.config/calgrid/config.toml
///
/// Every field is optional; command-line flags override what is set here.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct GlobalConfig {
    #[serde(default = "default_locale")]
    pub locale: String,

    #[serde(default)]
    pub start_on_monday: bool,

    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        GlobalConfig {
            locale: default_locale(),
            start_on_monday: false,
            format: OutputFormat::default(),
        }
    }
}

impl GlobalConfig {
    pub fn config_path() -> CalGridResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalGridError::Config("Could not determine config directory".into()))?
            .join("calgrid");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, falling back to defaults when the file is absent.
    pub fn load() -> CalGridResult<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&contents).map_err(|e| match e {
            CalGridError::Config(msg) => {
                CalGridError::Config(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    pub fn from_toml_str(contents: &str) -> CalGridResult<Self> {
        toml::from_str(contents).map_err(|e| CalGridError::Config(e.to_string()))
    }

    pub fn options(&self) -> CalendarOptions {
        CalendarOptions {
            locale: self.locale.clone(),
            week_start: WeekStart::from_monday_flag(self.start_on_monday),
        }
    }
}
