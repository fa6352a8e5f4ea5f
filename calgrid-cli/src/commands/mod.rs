pub mod month;
pub mod show;

use anyhow::Result;
use calgrid_core::CalendarOptions;
use calgrid_core::config::{GlobalConfig, OutputFormat};
use calgrid_core::month::WeekStart;

/// Command-line values that take precedence over the global config.
pub struct Overrides {
    pub locale: Option<String>,
    pub start_on_monday: Option<bool>,
    pub format: Option<OutputFormat>,
    pub color: bool,
}

/// Fully resolved settings for one render.
pub struct Settings {
    pub options: CalendarOptions,
    pub format: OutputFormat,
    pub color: bool,
}

impl Overrides {
    /// Merge these flags over the global config file.
    pub fn resolve(self) -> Result<Settings> {
        let config = GlobalConfig::load()?;
        Ok(self.apply(config))
    }

    fn apply(self, config: GlobalConfig) -> Settings {
        let start_on_monday = self.start_on_monday.unwrap_or(config.start_on_monday);
        Settings {
            options: CalendarOptions {
                locale: self.locale.unwrap_or(config.locale),
                week_start: WeekStart::from_monday_flag(start_on_monday),
            },
            format: self.format.unwrap_or(config.format),
            color: self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_overrides() -> Overrides {
        Overrides {
            locale: None,
            start_on_monday: None,
            format: None,
            color: false,
        }
    }

    #[test]
    fn test_config_used_without_flags() {
        let config = GlobalConfig {
            locale: "de-DE".to_string(),
            start_on_monday: true,
            format: OutputFormat::Html,
        };
        let settings = no_overrides().apply(config);

        assert_eq!(settings.options.locale, "de-DE");
        assert_eq!(settings.options.week_start, WeekStart::Monday);
        assert_eq!(settings.format, OutputFormat::Html);
    }

    #[test]
    fn test_flags_override_config() {
        let config = GlobalConfig {
            locale: "de-DE".to_string(),
            start_on_monday: true,
            format: OutputFormat::Html,
        };
        let overrides = Overrides {
            locale: Some("fr-FR".to_string()),
            start_on_monday: Some(false),
            format: Some(OutputFormat::Json),
            color: true,
        };
        let settings = overrides.apply(config);

        assert_eq!(settings.options.locale, "fr-FR");
        assert_eq!(settings.options.week_start, WeekStart::Sunday);
        assert_eq!(settings.format, OutputFormat::Json);
        assert!(settings.color);
    }
}
