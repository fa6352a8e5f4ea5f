//! Month keys and week-start arithmetic.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{CalGridError, CalGridResult};

/// A calendar month. `month` is 0-based (0 = January, 11 = December).
///
/// Values outside 0..=11 are kept as given and roll over into neighbouring
/// years when the month is resolved to dates: `{2025, 12}` is January 2026
/// and `{2025, -1}` is December 2024.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: i32,
}

impl MonthKey {
    pub fn new(year: i32, month: i32) -> Self {
        MonthKey { year, month }
    }

    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        MonthKey::new(date.year(), date.month0() as i32)
    }

    /// Fold an out-of-range month into the 0..=11 range, carrying into the year.
    pub fn normalized(self) -> Self {
        let total = self.year as i64 * 12 + self.month as i64;
        MonthKey {
            year: total.div_euclid(12) as i32,
            month: total.rem_euclid(12) as i32,
        }
    }

    /// The following month (normalized).
    pub fn next(self) -> Self {
        MonthKey::new(self.year, self.month + 1).normalized()
    }

    /// The 1st of this month.
    pub fn first_day(self) -> CalGridResult<NaiveDate> {
        let n = self.normalized();
        NaiveDate::from_ymd_opt(n.year, n.month as u32 + 1, 1)
            .ok_or_else(|| CalGridError::OutOfRange(self.to_string()))
    }

    /// Number of days in this month: the day before the 1st of the next month.
    pub fn days_in_month(self) -> CalGridResult<u32> {
        let last = self
            .next()
            .first_day()?
            .pred_opt()
            .ok_or_else(|| CalGridError::OutOfRange(self.to_string()))?;
        Ok(last.day())
    }

    /// The last day of this month.
    pub fn last_day(self) -> CalGridResult<NaiveDate> {
        let first = self.first_day()?;
        let days = self.days_in_month()?;
        first
            .with_day(days)
            .ok_or_else(|| CalGridError::OutOfRange(self.to_string()))
    }
}

impl fmt::Display for MonthKey {
    /// `YYYY-MM` with a 1-based month.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.normalized();
        write!(f, "{:04}-{:02}", n.year, n.month + 1)
    }
}

/// First column of every week row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn from_monday_flag(start_on_monday: bool) -> Self {
        if start_on_monday {
            WeekStart::Monday
        } else {
            WeekStart::Sunday
        }
    }

    /// Column of `weekday` in a row beginning on this week start (0..=6).
    pub fn column_of(self, weekday: Weekday) -> u32 {
        match self {
            WeekStart::Sunday => weekday.num_days_from_sunday(),
            WeekStart::Monday => weekday.num_days_from_monday(),
        }
    }

    /// First day of a fixed reference week that begins on this week start.
    /// Sunday 2025-01-05 or Monday 2025-01-06.
    pub fn reference_day(self) -> NaiveDate {
        match self {
            WeekStart::Sunday => NaiveDate::from_ymd_opt(2025, 1, 5),
            WeekStart::Monday => NaiveDate::from_ymd_opt(2025, 1, 6),
        }
        .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month_handles_leap_years() {
        assert_eq!(MonthKey::new(2024, 1).days_in_month().unwrap(), 29);
        assert_eq!(MonthKey::new(2023, 1).days_in_month().unwrap(), 28);
        assert_eq!(MonthKey::new(1900, 1).days_in_month().unwrap(), 28);
        assert_eq!(MonthKey::new(2000, 1).days_in_month().unwrap(), 29);
        assert_eq!(MonthKey::new(2025, 0).days_in_month().unwrap(), 31);
        assert_eq!(MonthKey::new(2025, 3).days_in_month().unwrap(), 30);
        assert_eq!(MonthKey::new(2025, 11).days_in_month().unwrap(), 31);
    }

    #[test]
    fn test_out_of_range_months_roll_over() {
        assert_eq!(MonthKey::new(2025, 12).normalized(), MonthKey::new(2026, 0));
        assert_eq!(MonthKey::new(2025, -1).normalized(), MonthKey::new(2024, 11));
        assert_eq!(MonthKey::new(2025, 25).normalized(), MonthKey::new(2027, 1));
        assert_eq!(
            MonthKey::new(2025, 12).first_day().unwrap(),
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_next_rolls_the_year() {
        assert_eq!(MonthKey::new(2024, 11).next(), MonthKey::new(2025, 0));
        assert_eq!(MonthKey::new(2024, 0).next(), MonthKey::new(2024, 1));
    }

    #[test]
    fn test_last_day() {
        assert_eq!(
            MonthKey::new(2024, 1).last_day().unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
    }

    #[test]
    fn test_display_is_one_based() {
        assert_eq!(MonthKey::new(2025, 2).to_string(), "2025-03");
        assert_eq!(MonthKey::new(2025, 12).to_string(), "2026-01");
    }

    #[test]
    fn test_week_start_columns() {
        assert_eq!(WeekStart::Sunday.column_of(Weekday::Sun), 0);
        assert_eq!(WeekStart::Sunday.column_of(Weekday::Sat), 6);
        assert_eq!(WeekStart::Monday.column_of(Weekday::Mon), 0);
        assert_eq!(WeekStart::Monday.column_of(Weekday::Sun), 6);
    }

    #[test]
    fn test_reference_day_falls_on_week_start() {
        assert_eq!(WeekStart::Sunday.reference_day().weekday(), Weekday::Sun);
        assert_eq!(WeekStart::Monday.reference_day().weekday(), Weekday::Mon);
    }
}
