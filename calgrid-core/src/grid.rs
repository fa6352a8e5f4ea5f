//! Month grid layout.
//!
//! A month is laid out as week rows of exactly seven cells. Leading and
//! trailing cells that fall outside the month are `Day::Padding`, so the
//! first row starts on the configured week start and the last row ends on
//! the day before it.

use chrono::{Datelike, Days};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CalGridResult;
use crate::locale::{ChronoFormatter, LocaleFormatter};
use crate::month::{MonthKey, WeekStart};

/// What a grid cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Day {
    /// Filler so the row has seven columns
    Padding,
    /// A real day of the month (1-based)
    Real(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    /// Position in the flattened grid, unique within a month
    pub index: usize,
    pub day: Day,
}

impl DayCell {
    pub fn is_padding(&self) -> bool {
        self.day == Day::Padding
    }

    /// Day of month, or 0 for padding.
    pub fn day_of_month(&self) -> u32 {
        match self.day {
            Day::Padding => 0,
            Day::Real(day) => day,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekRow {
    pub index: usize,
    pub cells: [DayCell; 7],
}

/// The computed layout of one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGrid {
    /// The month shown, normalized to 0..=11
    pub month: MonthKey,
    pub weeks: Vec<WeekRow>,
    /// "<long month name> <year>", e.g. "March 2025"
    pub label: String,
    /// Short weekday names starting at the configured week start
    pub weekday_headers: [String; 7],
    pub left_padding: u32,
    pub days_in_month: u32,
    pub right_padding: u32,
}

impl MonthGrid {
    pub fn total_cells(&self) -> usize {
        (self.left_padding + self.days_in_month + self.right_padding) as usize
    }

    /// All cells in row order.
    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flat_map(|week| week.cells.iter())
    }

    /// The real days in grid order.
    pub fn days(&self) -> impl Iterator<Item = u32> + '_ {
        self.cells().filter_map(|cell| match cell.day {
            Day::Real(day) => Some(day),
            Day::Padding => None,
        })
    }
}

/// Lay out `month` for `locale`, with rows starting on `week_start`.
///
/// Out-of-range month numbers roll over into the neighbouring year (see
/// `MonthKey::normalized`), and the label shows the rolled-over year:
/// `{2025, 12}` is "January 2026", not "January 2025". Formatter failures, such as an unsupported
/// locale, are returned as-is.
pub fn build_grid(
    month: MonthKey,
    locale: &str,
    week_start: WeekStart,
    formatter: &impl LocaleFormatter,
) -> CalGridResult<MonthGrid> {
    let month = month.normalized();
    let first = month.first_day()?;
    let days_in_month = month.days_in_month()?;
    let last = month.last_day()?;

    let left_padding = week_start.column_of(first.weekday());
    let right_padding = 6 - week_start.column_of(last.weekday());
    let total = (left_padding + days_in_month + right_padding) as usize;

    let weeks = (0..total / 7)
        .map(|row| WeekRow {
            index: row,
            cells: std::array::from_fn(|col| {
                cell_at(row * 7 + col, left_padding, days_in_month)
            }),
        })
        .collect::<Vec<_>>();

    let label = format!("{} {:04}", formatter.month_long(first, locale)?, month.year);
    let weekday_headers = weekday_headers(locale, week_start, formatter)?;

    debug!(
        %month,
        left_padding,
        days_in_month,
        right_padding,
        rows = weeks.len(),
        "built month grid"
    );

    Ok(MonthGrid {
        month,
        weeks,
        label,
        weekday_headers,
        left_padding,
        days_in_month,
        right_padding,
    })
}

/// `build_grid` with chrono's locale tables.
pub fn build_grid_default(
    month: MonthKey,
    locale: &str,
    week_start: WeekStart,
) -> CalGridResult<MonthGrid> {
    build_grid(month, locale, week_start, &ChronoFormatter)
}

/// Seven short weekday names from a fixed reference week, so every month
/// shares the same header for a given locale and week start.
pub fn weekday_headers(
    locale: &str,
    week_start: WeekStart,
    formatter: &impl LocaleFormatter,
) -> CalGridResult<[String; 7]> {
    let reference = week_start.reference_day();
    let mut headers: [String; 7] = Default::default();
    for (offset, header) in headers.iter_mut().enumerate() {
        *header = formatter.weekday_short(reference + Days::new(offset as u64), locale)?;
    }
    Ok(headers)
}

fn cell_at(index: usize, left_padding: u32, days_in_month: u32) -> DayCell {
    let day = index as i64 - left_padding as i64 + 1;
    let day = if (1..=days_in_month as i64).contains(&day) {
        Day::Real(day as u32)
    } else {
        Day::Padding
    };
    DayCell { index, day }
}
