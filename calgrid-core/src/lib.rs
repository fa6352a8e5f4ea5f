//! Core types for calgrid.
//!
//! This crate turns a list of dated events into a sequence of month grids:
//! - `grid` lays out one month as week rows of exactly seven cells
//! - `aggregate` sorts events, enumerates the months they span and groups them by day
//! - `calendar_list` composes the two into one `MonthView` per month
//! - `source` and `ics` load events from JSON, TOML and .ics files

pub mod aggregate;
pub mod calendar_list;
pub mod config;
pub mod error;
pub mod event;
pub mod grid;
pub mod ics;
pub mod locale;
pub mod month;
pub mod source;

pub use aggregate::{DayKey, EventsByDay, GroupedEvents};
pub use calendar_list::{CalendarOptions, MonthView, calendar_list};
pub use error::{CalGridError, CalGridResult};
pub use event::Event;
pub use grid::{Day, DayCell, MonthGrid, WeekRow, build_grid};
pub use locale::{ChronoFormatter, LocaleFormatter};
pub use month::{MonthKey, WeekStart};
