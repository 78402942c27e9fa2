//! Search and filter predicates over the event collection.

use chrono::NaiveDate;

use crate::classify::{lifecycle_status, LifecycleStatus};
use crate::event::{Event, EventCategory, EventMode};

/// Combined search/category/mode/status filter, mirroring the browse
/// surface. Empty fields match everything.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Case-insensitive substring over title, description, organizer and
    /// venue.
    pub query: Option<String>,
    pub category: Option<EventCategory>,
    pub mode: Option<EventMode>,
    pub status: Option<LifecycleStatus>,
}

impl EventFilter {
    pub fn is_empty(&self) -> bool {
        self.query.is_none()
            && self.category.is_none()
            && self.mode.is_none()
            && self.status.is_none()
    }

    pub fn matches(&self, event: &Event, today: NaiveDate) -> bool {
        if let Some(query) = &self.query {
            let query = query.to_lowercase();
            let hit = event.title.to_lowercase().contains(&query)
                || event.description.to_lowercase().contains(&query)
                || event.organizer.to_lowercase().contains(&query)
                || event.venue.to_lowercase().contains(&query);
            if !hit {
                return false;
            }
        }
        if self.category.is_some_and(|c| c != event.category) {
            return false;
        }
        if self.mode.is_some_and(|m| m != event.mode) {
            return false;
        }
        if self
            .status
            .is_some_and(|s| s != lifecycle_status(event, today))
        {
            return false;
        }
        true
    }

    /// Filter a collection, preserving order.
    pub fn apply<'a>(&self, events: &'a [Event], today: NaiveDate) -> Vec<&'a Event> {
        events.iter().filter(|e| self.matches(e, today)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_event(title: &str, category: EventCategory, mode: EventMode, date: &str) -> Event {
        Event {
            id: title.to_lowercase().replace(' ', "-"),
            title: title.to_string(),
            description: "desc".to_string(),
            date: date.to_string(),
            time: "10:00 AM".to_string(),
            venue: "Main Hall".to_string(),
            category,
            mode,
            organizer: "Arts Society".to_string(),
            department: "Student Affairs".to_string(),
            attendees: 0,
            max_capacity: None,
            is_featured: false,
            google_form_link: None,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn empty_filter_matches_everything() {
        let event = make_test_event("Anything", EventCategory::Tech, EventMode::Online, "2025-07-01");
        assert!(EventFilter::default().matches(&event, today()));
    }

    #[test]
    fn query_is_case_insensitive_across_fields() {
        let event = make_test_event("Jazz Evening", EventCategory::Cultural, EventMode::Offline, "2025-07-01");

        let by_title = EventFilter {
            query: Some("jazz".to_string()),
            ..EventFilter::default()
        };
        assert!(by_title.matches(&event, today()));

        let by_organizer = EventFilter {
            query: Some("ARTS".to_string()),
            ..EventFilter::default()
        };
        assert!(by_organizer.matches(&event, today()));

        let miss = EventFilter {
            query: Some("basketball".to_string()),
            ..EventFilter::default()
        };
        assert!(!miss.matches(&event, today()));
    }

    #[test]
    fn category_mode_and_status_must_all_match() {
        let event = make_test_event("Robotics Demo", EventCategory::Tech, EventMode::Hybrid, "2025-06-15");

        let filter = EventFilter {
            category: Some(EventCategory::Tech),
            mode: Some(EventMode::Hybrid),
            status: Some(LifecycleStatus::Active),
            ..EventFilter::default()
        };
        assert!(filter.matches(&event, today()));

        let wrong_category = EventFilter {
            category: Some(EventCategory::Sports),
            ..EventFilter::default()
        };
        assert!(!wrong_category.matches(&event, today()));

        let wrong_status = EventFilter {
            status: Some(LifecycleStatus::Completed),
            ..EventFilter::default()
        };
        assert!(!wrong_status.matches(&event, today()));
    }

    #[test]
    fn apply_preserves_order() {
        let events = vec![
            make_test_event("A", EventCategory::Tech, EventMode::Online, "2025-07-01"),
            make_test_event("B", EventCategory::Sports, EventMode::Online, "2025-07-01"),
            make_test_event("C", EventCategory::Tech, EventMode::Online, "2025-07-01"),
        ];
        let filter = EventFilter {
            category: Some(EventCategory::Tech),
            ..EventFilter::default()
        };
        let hits: Vec<&str> = filter
            .apply(&events, today())
            .into_iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(hits, vec!["A", "C"]);
    }
}
