//! Google Calendar export links.

use chrono::{Duration, NaiveDateTime, NaiveTime};
use url::Url;

use crate::classify::parse_event_date;
use crate::error::{CampusError, CampusResult};
use crate::event::Event;

const RENDER_URL: &str = "https://calendar.google.com/calendar/render";

/// Build a Google Calendar "add event" link.
///
/// Start is the event's date plus its display time (12-hour "10:00 AM" or
/// 24-hour "14:00"; an unparseable time falls back to 09:00). The end is
/// fixed at exactly two hours after the start. Timestamps are floating
/// local times with no timezone designator. Pure formatting; no I/O.
pub fn google_calendar_url(event: &Event) -> CampusResult<Url> {
    let date = parse_event_date(&event.date).ok_or_else(|| {
        CampusError::CalendarLink(format!("unparseable event date '{}'", event.date))
    })?;
    let time = parse_event_time(&event.time)
        .or_else(|| NaiveTime::from_hms_opt(9, 0, 0))
        .unwrap_or_default();

    let start = NaiveDateTime::new(date, time);
    let end = start + Duration::hours(2);
    let dates = format!("{}/{}", format_stamp(&start), format_stamp(&end));

    let mut link = Url::parse(RENDER_URL)
        .map_err(|e| CampusError::CalendarLink(e.to_string()))?;
    link.query_pairs_mut()
        .append_pair("action", "TEMPLATE")
        .append_pair("text", &event.title)
        .append_pair("dates", &dates)
        .append_pair("details", &event.description)
        .append_pair("location", &event.venue)
        .append_pair("sf", "true");
    Ok(link)
}

fn format_stamp(datetime: &NaiveDateTime) -> String {
    datetime.format("%Y%m%dT%H%M%S").to_string()
}

/// Parse the free-text display time.
fn parse_event_time(time: &str) -> Option<NaiveTime> {
    let time = time.trim();
    NaiveTime::parse_from_str(time, "%I:%M %p")
        .ok()
        .or_else(|| NaiveTime::parse_from_str(time, "%H:%M").ok())
}
