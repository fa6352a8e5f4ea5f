//! Event sorting, month range enumeration and day grouping.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::event::Event;
use crate::month::MonthKey;

/// Sort events by date. Events sharing a date keep their input order.
pub fn sort_events(events: &[Event]) -> Vec<Event> {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|event| event.date);
    sorted
}

/// Every month from `start`'s month through the month containing `end`.
///
/// The walk advances a day-1 anchor so a start on the 31st never skips a
/// shorter month. Returns nothing when `start` is after `end`.
pub fn enumerate_months(start: NaiveDateTime, end: NaiveDateTime) -> Vec<MonthKey> {
    let mut months = Vec::new();
    let mut current = MonthKey::of(start.date());

    while let Ok(first) = current.first_day() {
        if first.and_time(NaiveTime::MIN) > end {
            break;
        }
        months.push(current);
        current = current.next();
    }

    debug!(%start, %end, count = months.len(), "enumerated months");
    months
}

/// First and last date of already sorted events, or `now` for both when
/// there are none.
pub fn event_range(sorted: &[Event], now: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
    let start = sorted.first().map(|e| e.date).unwrap_or(now);
    let end = sorted.last().map(|e| e.date).unwrap_or(now);
    (start, end)
}

/// Composite (year, month, day) key. `month` is 0-based, `day` 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DayKey {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DayKey {
    pub fn of(date: NaiveDateTime) -> Self {
        DayKey {
            year: date.year(),
            month: date.month0(),
            day: date.day(),
        }
    }
}

/// Events of a single month keyed by day of month.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventsByDay(BTreeMap<u32, Vec<Event>>);

impl EventsByDay {
    /// All events on `day`, in the order they were grouped.
    pub fn get(&self, day: u32) -> &[Event] {
        self.0.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The event that decides how `day` is displayed: the first in its bucket.
    pub fn primary(&self, day: u32) -> Option<&Event> {
        self.get(day).first()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &[Event])> {
        self.0.iter().map(|(day, events)| (*day, events.as_slice()))
    }

    /// Number of days with at least one event.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Events bucketed by the local calendar day they fall on.
///
/// Built once by `group_events` and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedEvents {
    days: BTreeMap<DayKey, Vec<Event>>,
}

impl GroupedEvents {
    /// Events on a given day (`month` 0-based).
    pub fn day(&self, year: i32, month: u32, day: u32) -> &[Event] {
        self.days
            .get(&DayKey { year, month, day })
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The per-day buckets of one month, or `None` if it has no events.
    pub fn month(&self, key: MonthKey) -> Option<EventsByDay> {
        let key = key.normalized();
        let month = key.month as u32;
        let lo = DayKey { year: key.year, month, day: 0 };
        let hi = DayKey { year: key.year, month, day: u32::MAX };

        let by_day: BTreeMap<u32, Vec<Event>> = self
            .days
            .range(lo..=hi)
            .map(|(k, events)| (k.day, events.clone()))
            .collect();

        if by_day.is_empty() {
            None
        } else {
            Some(EventsByDay(by_day))
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DayKey, &[Event])> {
        self.days.iter().map(|(key, events)| (key, events.as_slice()))
    }

    /// Number of distinct days with events.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn event_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }
}

/// Bucket events by (year, month, day), keeping input order within a day.
///
/// Input does not need to be sorted; sort first to get chronological buckets.
pub fn group_events(events: &[Event]) -> GroupedEvents {
    let mut days: BTreeMap<DayKey, Vec<Event>> = BTreeMap::new();
    for event in events {
        days.entry(DayKey::of(event.date))
            .or_default()
            .push(event.clone());
    }

    debug!(events = events.len(), days = days.len(), "grouped events");
    GroupedEvents { days }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> Event {
        Event::on(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn test_enumerate_months_inclusive() {
        let months = enumerate_months(at(2025, 1, 15, 0), at(2025, 3, 3, 0));
        assert_eq!(
            months,
            vec![
                MonthKey::new(2025, 0),
                MonthKey::new(2025, 1),
                MonthKey::new(2025, 2)
            ]
        );
    }

    #[test]
    fn test_enumerate_months_reversed_range_is_empty() {
        assert!(enumerate_months(at(2025, 3, 3, 0), at(2025, 1, 15, 0)).is_empty());
    }

    #[test]
    fn test_enumerate_months_same_instant_yields_its_month() {
        let t = at(2025, 6, 15, 12);
        assert_eq!(enumerate_months(t, t), vec![MonthKey::new(2025, 5)]);
    }

    #[test]
    fn test_enumerate_months_from_the_31st_does_not_skip_february() {
        let months = enumerate_months(at(2025, 1, 31, 0), at(2025, 3, 1, 0));
        assert_eq!(months.len(), 3);
        assert_eq!(months[1], MonthKey::new(2025, 1));
    }

    #[test]
    fn test_enumerate_months_crosses_year_boundary() {
        let months = enumerate_months(at(2024, 11, 20, 0), at(2025, 2, 1, 0));
        assert_eq!(
            months,
            vec![
                MonthKey::new(2024, 10),
                MonthKey::new(2024, 11),
                MonthKey::new(2025, 0),
                MonthKey::new(2025, 1)
            ]
        );
    }

    #[test]
    fn test_sort_events_is_stable() {
        let a = day(2025, 6, 15).with_url("a");
        let b = day(2025, 6, 15).with_url("b");
        let early = day(2025, 1, 1);

        let sorted = sort_events(&[a.clone(), b.clone(), early.clone()]);
        assert_eq!(sorted, vec![early, a, b]);
    }

    #[test]
    fn test_sort_events_leaves_input_untouched() {
        let input = vec![day(2025, 6, 15), day(2025, 1, 1)];
        let _ = sort_events(&input);
        assert_eq!(input[0].date.date(), NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
    }

    #[test]
    fn test_group_events_same_day_keeps_order() {
        let plain = day(2025, 6, 15);
        let linked = day(2025, 6, 15).with_url("x");

        let grouped = group_events(&[plain.clone(), linked.clone()]);
        assert_eq!(grouped.day(2025, 5, 15), &[plain, linked]);
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped.event_count(), 2);
    }

    #[test]
    fn test_group_events_uses_time_of_day_only_for_the_calendar_day() {
        let grouped = group_events(&[Event::new(at(2025, 6, 15, 23)), Event::new(at(2025, 6, 16, 0))]);
        assert_eq!(grouped.day(2025, 5, 15).len(), 1);
        assert_eq!(grouped.day(2025, 5, 16).len(), 1);
    }

    #[test]
    fn test_group_then_lookup_finds_each_event_once() {
        let events: Vec<Event> = (0..40u32)
            .map(|i| {
                Event::new(at(2024, 1 + (i % 12), 1 + (i * 7) % 28, i % 24))
                    .with_url(format!("/e/{}", i))
            })
            .collect();
        let grouped = group_events(&events);

        for event in &events {
            let key = DayKey::of(event.date);
            let hits = grouped
                .day(key.year, key.month, key.day)
                .iter()
                .filter(|e| *e == event)
                .count();
            assert_eq!(hits, 1, "{:?}", event);
        }
        assert_eq!(grouped.event_count(), events.len());
    }

    #[test]
    fn test_month_lookup() {
        let grouped = group_events(&[
            day(2025, 6, 1).with_style_tag("first"),
            day(2025, 6, 30),
            day(2025, 6, 1).with_style_tag("second"),
            day(2025, 7, 1),
        ]);

        let june = grouped.month(MonthKey::new(2025, 5)).unwrap();
        assert_eq!(june.len(), 2);
        assert_eq!(june.get(1).len(), 2);
        assert_eq!(june.primary(1).and_then(|e| e.style_tag.as_deref()), Some("first"));
        assert!(june.get(2).is_empty());

        assert!(grouped.month(MonthKey::new(2025, 4)).is_none());
        assert_eq!(grouped.month(MonthKey::new(2025, 6)).map(|m| m.len()), Some(1));
    }

    #[test]
    fn test_event_range_defaults_to_now() {
        let now = at(2026, 10, 19, 9);
        assert_eq!(event_range(&[], now), (now, now));

        let sorted = sort_events(&[day(2025, 3, 3), day(2025, 1, 15)]);
        let (start, end) = event_range(&sorted, now);
        assert_eq!(start, at(2025, 1, 15, 0));
        assert_eq!(end, at(2025, 3, 3, 0));
    }
}
