//! ICS parsing using the icalendar crate's parser.

use chrono::{Local, NaiveDateTime, NaiveTime, TimeZone};
use icalendar::{
    CalendarDateTime, DatePerhapsTime,
    parser::{Component, read_calendar, unfold},
};
use tracing::warn;

use crate::error::{CalGridError, CalGridResult};
use crate::event::Event;

/// Parse every VEVENT in `content` into an Event.
///
/// DTSTART gives the date, URL the link and the first CATEGORIES value the
/// style tag. Events without a usable DTSTART are skipped.
pub fn parse_events(content: &str) -> CalGridResult<Vec<Event>> {
    let unfolded = unfold(content);
    let calendar = read_calendar(&unfolded).map_err(|e| CalGridError::IcsParse(e.to_string()))?;

    Ok(calendar
        .components
        .iter()
        .filter(|c| c.name == "VEVENT")
        .filter_map(|vevent| {
            let event = parse_vevent(vevent);
            if event.is_none() {
                let uid = vevent.find_prop("UID").map(|p| p.val.to_string());
                warn!(uid = ?uid, "skipping VEVENT without a valid DTSTART");
            }
            event
        })
        .collect())
}

fn parse_vevent(vevent: &Component<'_>) -> Option<Event> {
    let start = DatePerhapsTime::try_from(vevent.find_prop("DTSTART")?).ok()?;

    let url = vevent.find_prop("URL").map(|p| p.val.to_string());
    let style_tag = vevent
        .find_prop("CATEGORIES")
        .and_then(|p| p.val.as_ref().split(',').next().map(str::trim).map(String::from))
        .filter(|tag| !tag.is_empty());

    Some(Event {
        date: to_local(start),
        url,
        style_tag,
    })
}

/// Convert icalendar's DatePerhapsTime to local wall-clock time
fn to_local(dpt: DatePerhapsTime) -> NaiveDateTime {
    match dpt {
        DatePerhapsTime::Date(d) => d.and_time(NaiveTime::MIN),
        DatePerhapsTime::DateTime(cal_dt) => match cal_dt {
            CalendarDateTime::Utc(dt) => dt.with_timezone(&Local).naive_local(),
            CalendarDateTime::Floating(naive) => naive,
            CalendarDateTime::WithTimezone { date_time, tzid } => {
                match tzid.parse::<chrono_tz::Tz>() {
                    Ok(tz) => tz
                        .from_local_datetime(&date_time)
                        .earliest()
                        .map(|zoned| zoned.with_timezone(&Local).naive_local())
                        .unwrap_or(date_time),
                    // Unknown TZID: keep the wall time as written
                    Err(_) => date_time,
                }
            }
        },
    }
}
