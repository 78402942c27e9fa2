//! Dashboard aggregates over the event collection.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::classify::parse_event_date;
use crate::event::Event;

/// How many departments the per-department breakdowns keep.
const BREAKDOWN_LIMIT: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampusStats {
    /// Events dated in today's calendar month.
    pub events_this_month: usize,
    /// Sum of attendee counts across all events.
    pub total_attendees: u64,
    /// Display form of `total_attendees` ("1.5K+" above a thousand).
    pub active_students: String,
    /// Distinct organizers.
    pub unique_clubs: usize,
    /// Events dated exactly today.
    pub live_events: usize,
    /// Attendees per department, descending, capped at eight entries.
    pub attendees_by_department: Vec<(String, u64)>,
    /// Event counts per department, descending, capped at eight entries.
    pub events_by_department: Vec<(String, usize)>,
}

impl CampusStats {
    pub fn compute(events: &[Event], today: NaiveDate) -> CampusStats {
        let mut events_this_month = 0;
        let mut live_events = 0;
        let mut total_attendees: u64 = 0;
        let mut clubs: Vec<&str> = Vec::new();
        let mut dept_attendees: HashMap<&str, u64> = HashMap::new();
        let mut dept_events: HashMap<&str, usize> = HashMap::new();

        for event in events {
            total_attendees += u64::from(event.attendees);

            if !clubs.contains(&event.organizer.as_str()) {
                clubs.push(&event.organizer);
            }
            *dept_attendees.entry(&event.department).or_insert(0) += u64::from(event.attendees);
            *dept_events.entry(&event.department).or_insert(0) += 1;

            if let Some(date) = parse_event_date(&event.date) {
                if date == today {
                    live_events += 1;
                }
                if date.year() == today.year() && date.month() == today.month() {
                    events_this_month += 1;
                }
            }
        }

        CampusStats {
            events_this_month,
            total_attendees,
            active_students: format_attendees(total_attendees),
            unique_clubs: clubs.len(),
            live_events,
            attendees_by_department: top_entries(dept_attendees),
            events_by_department: top_entries(dept_events),
        }
    }
}

fn format_attendees(total: u64) -> String {
    if total > 1000 {
        format!("{:.1}K+", total as f64 / 1000.0)
    } else {
        total.to_string()
    }
}

fn top_entries<V: Ord + Copy>(map: HashMap<&str, V>) -> Vec<(String, V)> {
    let mut entries: Vec<(String, V)> = map
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect();
    // Descending by value, name as tiebreak for stable output
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(BREAKDOWN_LIMIT);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventCategory, EventMode};

    fn make_test_event(date: &str, organizer: &str, department: &str, attendees: u32) -> Event {
        Event {
            id: format!("{}-{}", organizer, date),
            title: "Event".to_string(),
            description: String::new(),
            date: date.to_string(),
            time: "10:00 AM".to_string(),
            venue: "Hall".to_string(),
            category: EventCategory::Tech,
            mode: EventMode::Offline,
            organizer: organizer.to_string(),
            department: department.to_string(),
            attendees,
            max_capacity: None,
            is_featured: false,
            google_form_link: None,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn counts_month_live_clubs_and_attendees() {
        let events = vec![
            make_test_event("2025-06-15", "Tech Club", "CS", 100),
            make_test_event("2025-06-20", "Tech Club", "CS", 200),
            make_test_event("2025-07-01", "Music Society", "Arts", 300),
        ];
        let stats = CampusStats::compute(&events, today());

        assert_eq!(stats.events_this_month, 2);
        assert_eq!(stats.live_events, 1);
        assert_eq!(stats.unique_clubs, 2);
        assert_eq!(stats.total_attendees, 600);
        assert_eq!(stats.active_students, "600");
    }

    #[test]
    fn large_attendee_totals_render_as_thousands() {
        let events = vec![
            make_test_event("2025-06-01", "A", "CS", 900),
            make_test_event("2025-06-02", "B", "CS", 600),
        ];
        let stats = CampusStats::compute(&events, today());
        assert_eq!(stats.active_students, "1.5K+");
    }

    #[test]
    fn department_breakdowns_sort_descending() {
        let events = vec![
            make_test_event("2025-06-01", "A", "Arts", 10),
            make_test_event("2025-06-02", "B", "CS", 50),
            make_test_event("2025-06-03", "C", "CS", 50),
        ];
        let stats = CampusStats::compute(&events, today());

        assert_eq!(
            stats.attendees_by_department,
            vec![("CS".to_string(), 100), ("Arts".to_string(), 10)]
        );
        assert_eq!(
            stats.events_by_department,
            vec![("CS".to_string(), 2), ("Arts".to_string(), 1)]
        );
    }

    #[test]
    fn malformed_dates_are_skipped_by_date_counters() {
        let events = vec![make_test_event("garbage", "A", "CS", 10)];
        let stats = CampusStats::compute(&events, today());
        assert_eq!(stats.events_this_month, 0);
        assert_eq!(stats.live_events, 0);
        assert_eq!(stats.total_attendees, 10);
    }
}
