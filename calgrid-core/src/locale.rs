//! Locale-aware weekday and month names.
//!
//! Grid layout never looks at locale data directly. It asks a
//! `LocaleFormatter` for names, so tests can swap in a stub and callers can
//! plug in another localization backend.

use chrono::{Locale, NaiveDate, NaiveTime};

use tracing::debug;

use crate::error::{CalGridError, CalGridResult};

/// Formats dates into localized names for a locale tag such as `en-US`.
pub trait LocaleFormatter: Sync {
    /// Abbreviated weekday name of `date` ("Mon", "lun.").
    fn weekday_short(&self, date: NaiveDate, locale: &str) -> CalGridResult<String>;

    /// Full month name of `date` ("March", "mars").
    fn month_long(&self, date: NaiveDate, locale: &str) -> CalGridResult<String>;
}

/// Formatter backed by chrono's bundled locale tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoFormatter;

impl ChronoFormatter {
    fn format(&self, date: NaiveDate, locale: &str, pattern: &str) -> CalGridResult<String> {
        let locale = resolve_locale(locale)?;
        Ok(date
            .and_time(NaiveTime::MIN)
            .and_utc()
            .format_localized(pattern, locale)
            .to_string())
    }
}

impl LocaleFormatter for ChronoFormatter {
    fn weekday_short(&self, date: NaiveDate, locale: &str) -> CalGridResult<String> {
        self.format(date, locale, "%a")
    }

    fn month_long(&self, date: NaiveDate, locale: &str) -> CalGridResult<String> {
        self.format(date, locale, "%B")
    }
}

/// Territory used for a bare language tag when it differs from the
/// upper-cased language code (`de` -> `de_DE` needs no entry).
const DEFAULT_TERRITORIES: &[(&str, &str)] = &[
    ("ar", "SA"),
    ("ca", "ES"),
    ("cs", "CZ"),
    ("da", "DK"),
    ("el", "GR"),
    ("en", "US"),
    ("et", "EE"),
    ("fa", "IR"),
    ("ga", "IE"),
    ("he", "IL"),
    ("hi", "IN"),
    ("ja", "JP"),
    ("ko", "KR"),
    ("ms", "MY"),
    ("nb", "NO"),
    ("nn", "NO"),
    ("sl", "SI"),
    ("sq", "AL"),
    ("sr", "RS"),
    ("sv", "SE"),
    ("uk", "UA"),
    ("vi", "VN"),
    ("zh", "CN"),
];

/// Resolve a BCP-47 (`en-US`, `zh-Hans-CN`) or POSIX (`en_US`) tag to a
/// chrono locale.
///
/// Script subtags are dropped. A bare language, or a territory chrono has
/// no data for, falls back to the language's default territory.
pub fn resolve_locale(tag: &str) -> CalGridResult<Locale> {
    let subtags: Vec<&str> = tag
        .trim()
        .split(['-', '_'])
        .filter(|s| !s.is_empty())
        .collect();
    let Some((language, rest)) = subtags.split_first() else {
        return Err(CalGridError::UnsupportedLocale(tag.to_string()));
    };

    let language = language.to_ascii_lowercase();
    let territory = rest
        .iter()
        .find(|s| s.len() == 2 || (s.len() == 3 && s.chars().all(|c| c.is_ascii_digit())))
        .map(|s| s.to_ascii_uppercase());
    let default_territory = DEFAULT_TERRITORIES
        .iter()
        .find(|(lang, _)| *lang == language)
        .map(|(_, territory)| territory.to_string())
        .unwrap_or_else(|| language.to_ascii_uppercase());

    let mut candidates = Vec::with_capacity(3);
    if let Some(territory) = &territory {
        candidates.push(format!("{}_{}", language, territory));
    }
    candidates.push(format!("{}_{}", language, default_territory));
    candidates.push(language.clone());

    let resolved = candidates
        .iter()
        .find_map(|candidate| Locale::try_from(candidate.as_str()).ok());
    if let Some(locale) = resolved {
        debug!(tag, ?locale, "resolved locale");
    }
    resolved.ok_or_else(|| CalGridError::UnsupportedLocale(tag.to_string()))
}
