//! The dated event type placed onto month grids.
//!
//! An event only carries what a calendar view needs: when it happens, an
//! optional link target and an optional style tag for decorating its day.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};

/// A dated event. The date is local wall-clock time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(deserialize_with = "deserialize_event_date")]
    pub date: NaiveDateTime,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Style hint for the rendering layer (a CSS class, a color name)
    #[serde(
        default,
        rename = "className",
        alias = "class_name",
        alias = "style_tag",
        skip_serializing_if = "Option::is_none"
    )]
    pub style_tag: Option<String>,
}

impl Event {
    pub fn new(date: NaiveDateTime) -> Self {
        Event {
            date,
            url: None,
            style_tag: None,
        }
    }

    /// An event at local midnight of `date`.
    pub fn on(date: NaiveDate) -> Self {
        Event::new(date.and_time(NaiveTime::MIN))
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_style_tag(mut self, tag: impl Into<String>) -> Self {
        self.style_tag = Some(tag.into());
        self
    }
}

/// Parse the date forms accepted in event files.
///
/// - RFC 3339 with an offset (converted to local time)
/// - naive `YYYY-MM-DDTHH:MM[:SS]` or with a space separator
/// - plain `YYYY-MM-DD` (local midnight)
pub fn parse_event_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local).naive_local());
    }

    const NAIVE_FORMATS: [&str; 5] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

fn deserialize_event_date<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_event_date(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!(
            "Invalid event date '{}'. Expected RFC 3339, YYYY-MM-DDTHH:MM:SS or YYYY-MM-DD",
            raw
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_event_date_plain_date_is_midnight() {
        let parsed = parse_event_date("2025-06-15").unwrap();
        assert_eq!(
            parsed,
            NaiveDate::from_ymd_opt(2025, 6, 15)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_parse_event_date_naive_forms() {
        let expected = NaiveDate::from_ymd_opt(2025, 3, 20)
            .unwrap()
            .and_hms_opt(15, 30, 0)
            .unwrap();
        assert_eq!(parse_event_date("2025-03-20T15:30:00"), Some(expected));
        assert_eq!(parse_event_date("2025-03-20T15:30"), Some(expected));
        assert_eq!(parse_event_date("2025-03-20 15:30:00"), Some(expected));
    }

    #[test]
    fn test_parse_event_date_rejects_garbage() {
        assert_eq!(parse_event_date("next tuesday"), None);
        assert_eq!(parse_event_date("2025-13-01"), None);
    }

    #[test]
    fn test_deserialize_accepts_class_name_aliases() {
        let json = r#"[
            {"date": "2025-06-15", "url": "/a", "className": "highlight"},
            {"date": "2025-06-16", "class_name": "muted"},
            {"date": "2025-06-17"}
        ]"#;
        let events: Vec<Event> = serde_json::from_str(json).unwrap();

        assert_eq!(events.len(), 3);
        assert_eq!(events[0].url.as_deref(), Some("/a"));
        assert_eq!(events[0].style_tag.as_deref(), Some("highlight"));
        assert_eq!(events[1].style_tag.as_deref(), Some("muted"));
        assert_eq!(events[2].url, None);
        assert_eq!(events[2].style_tag, None);
    }

    #[test]
    fn test_deserialize_reports_bad_date() {
        let err = serde_json::from_str::<Event>(r#"{"date": "soon"}"#).unwrap_err();
        assert!(err.to_string().contains("Invalid event date 'soon'"), "{}", err);
    }

    #[test]
    fn test_serialized_event_reads_back() {
        let event = Event::on(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
            .with_url("https://example.com/leap")
            .with_style_tag("green");

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"className\":\"green\""), "{}", json);

        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
