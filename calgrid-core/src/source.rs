//! Loading event lists from files.
//!
//! JSON files hold an array of events, TOML files an `[[events]]` array of
//! tables, and .ics files one event per VEVENT. Dates in JSON and TOML are
//! quoted strings (see `event::parse_event_date`).

use std::path::Path;

use serde::Deserialize;

use crate::error::{CalGridError, CalGridResult};
use crate::event::Event;
use crate::ics;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventFormat {
    Json,
    Toml,
    Ics,
}

impl EventFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> CalGridResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("json") => Ok(EventFormat::Json),
            Some("toml") => Ok(EventFormat::Toml),
            Some("ics") | Some("ical") => Ok(EventFormat::Ics),
            _ => Err(CalGridError::EventSource(format!(
                "Cannot tell the event format of '{}'. Use a .json, .toml or .ics file",
                path.display()
            ))),
        }
    }
}

#[derive(Deserialize)]
struct TomlEvents {
    #[serde(default)]
    events: Vec<Event>,
}

/// Parse file contents in the given format.
pub fn parse_events(content: &str, format: EventFormat) -> CalGridResult<Vec<Event>> {
    match format {
        EventFormat::Json => {
            serde_json::from_str(content).map_err(|e| CalGridError::Serialization(e.to_string()))
        }
        EventFormat::Toml => toml::from_str::<TomlEvents>(content)
            .map(|file| file.events)
            .map_err(|e| CalGridError::Serialization(e.to_string())),
        EventFormat::Ics => ics::parse_events(content),
    }
}

/// Read and parse an event file, choosing the format by extension.
pub fn load_events(path: &Path) -> CalGridResult<Vec<Event>> {
    let format = EventFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;
    parse_events(&content, format)
}
