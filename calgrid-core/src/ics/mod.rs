//! Reading events from .ics files (RFC 5545).

mod parse;

pub use parse::parse_events;
