//! One grid per month across the span of an event list.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregate::{EventsByDay, enumerate_months, event_range, group_events, sort_events};
use crate::error::CalGridResult;
use crate::event::Event;
use crate::grid::{Day, DayCell, MonthGrid, build_grid};
use crate::locale::LocaleFormatter;
use crate::month::WeekStart;

/// Locale and week layout shared by every month of a render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarOptions {
    pub locale: String,
    pub week_start: WeekStart,
}

impl Default for CalendarOptions {
    fn default() -> Self {
        CalendarOptions {
            locale: crate::config::DEFAULT_LOCALE.to_string(),
            week_start: WeekStart::Sunday,
        }
    }
}

/// A month grid plus the events that fall in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthView {
    pub grid: MonthGrid,
    pub events: Option<EventsByDay>,
}

impl MonthView {
    /// Every event on the cell's day. Padding cells have none.
    pub fn events_on(&self, cell: &DayCell) -> &[Event] {
        match (cell.day, &self.events) {
            (Day::Real(day), Some(events)) => events.get(day),
            _ => &[],
        }
    }

    /// The event a renderer uses to decorate the cell. Further events on
    /// the same day stay reachable through `events_on`.
    pub fn primary_event(&self, cell: &DayCell) -> Option<&Event> {
        self.events_on(cell).first()
    }
}

/// Build a view for every month from the earliest to the latest event.
///
/// With no events this is the current month.
pub fn calendar_list(
    events: &[Event],
    options: &CalendarOptions,
    formatter: &impl LocaleFormatter,
) -> CalGridResult<Vec<MonthView>> {
    calendar_list_at(events, options, formatter, Local::now().naive_local())
}

/// `calendar_list` with an explicit "now" for the empty case.
pub fn calendar_list_at(
    events: &[Event],
    options: &CalendarOptions,
    formatter: &impl LocaleFormatter,
    now: NaiveDateTime,
) -> CalGridResult<Vec<MonthView>> {
    let sorted = sort_events(events);
    let grouped = group_events(&sorted);
    let (start, end) = event_range(&sorted, now);
    let months = enumerate_months(start, end);

    debug!(
        events = sorted.len(),
        months = months.len(),
        locale = %options.locale,
        "building calendar list"
    );

    months
        .into_iter()
        .map(|month| {
            let grid = build_grid(month, &options.locale, options.week_start, formatter)?;
            Ok(MonthView {
                grid,
                events: grouped.month(month),
            })
        })
        .collect()
}
