//! The event record and its supporting types.
//!
//! `Event` is the sole entity in the system. Lifecycle and seat status are
//! never stored on it; they are derived on every read by the `classify`
//! module so they cannot drift from the underlying date/attendee fields.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A campus event.
///
/// `date` is kept as a string (expected `YYYY-MM-DD`) rather than a typed
/// date: a malformed value on one record must degrade that record's
/// classification, not fail deserialization of the whole collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Opaque unique id, immutable after creation.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Calendar date, expected `YYYY-MM-DD`.
    pub date: String,
    /// Free-text display time (e.g. "10:00 AM"); only the calendar-link
    /// helper ever parses it.
    pub time: String,
    pub venue: String,
    pub category: EventCategory,
    pub mode: EventMode,
    pub organizer: String,
    pub department: String,
    /// Current registration count.
    pub attendees: u32,
    /// `None` means uncapped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_capacity: Option<u32>,
    /// Display prominence only.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_featured: bool,
    /// When present, registration is delegated to this external form and
    /// the local attendee counter is never touched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_form_link: Option<String>,
}

/// Input to `EventStore::add`: an event minus its id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub venue: String,
    pub category: EventCategory,
    pub mode: EventMode,
    pub organizer: String,
    pub department: String,
    pub attendees: u32,
    pub max_capacity: Option<u32>,
    pub is_featured: bool,
    pub google_form_link: Option<String>,
}

impl NewEvent {
    /// Turn the draft into a full record with the given id.
    pub fn with_id(self, id: String) -> Event {
        Event {
            id,
            title: self.title,
            description: self.description,
            date: self.date,
            time: self.time,
            venue: self.venue,
            category: self.category,
            mode: self.mode,
            organizer: self.organizer,
            department: self.department,
            attendees: self.attendees,
            max_capacity: self.max_capacity,
            is_featured: self.is_featured,
            google_form_link: self.google_form_link,
        }
    }
}

/// Partial field changes for `EventStore::update`.
///
/// `None` always means "leave unchanged"; optional event fields cannot be
/// cleared through a patch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub venue: Option<String>,
    pub category: Option<EventCategory>,
    pub mode: Option<EventMode>,
    pub organizer: Option<String>,
    pub department: Option<String>,
    pub attendees: Option<u32>,
    pub max_capacity: Option<u32>,
    pub is_featured: Option<bool>,
    pub google_form_link: Option<String>,
}

impl EventPatch {
    /// Merge the patch onto an existing record. The id is never touched.
    pub fn apply(&self, event: &mut Event) {
        if let Some(title) = &self.title {
            event.title = title.clone();
        }
        if let Some(description) = &self.description {
            event.description = description.clone();
        }
        if let Some(date) = &self.date {
            event.date = date.clone();
        }
        if let Some(time) = &self.time {
            event.time = time.clone();
        }
        if let Some(venue) = &self.venue {
            event.venue = venue.clone();
        }
        if let Some(category) = self.category {
            event.category = category;
        }
        if let Some(mode) = self.mode {
            event.mode = mode;
        }
        if let Some(organizer) = &self.organizer {
            event.organizer = organizer.clone();
        }
        if let Some(department) = &self.department {
            event.department = department.clone();
        }
        if let Some(attendees) = self.attendees {
            event.attendees = attendees;
        }
        if let Some(max_capacity) = self.max_capacity {
            event.max_capacity = Some(max_capacity);
        }
        if let Some(is_featured) = self.is_featured {
            event.is_featured = is_featured;
        }
        if let Some(link) = &self.google_form_link {
            event.google_form_link = Some(link.clone());
        }
    }

    /// True when the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self == &EventPatch::default()
    }
}

/// Closed set of event categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Workshop,
    Cultural,
    Tech,
    Sports,
    Seminar,
    Hackathon,
}

impl EventCategory {
    pub const ALL: [EventCategory; 6] = [
        EventCategory::Workshop,
        EventCategory::Cultural,
        EventCategory::Tech,
        EventCategory::Sports,
        EventCategory::Seminar,
        EventCategory::Hackathon,
    ];
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            EventCategory::Workshop => "workshop",
            EventCategory::Cultural => "cultural",
            EventCategory::Tech => "tech",
            EventCategory::Sports => "sports",
            EventCategory::Seminar => "seminar",
            EventCategory::Hackathon => "hackathon",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for EventCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "workshop" => Ok(EventCategory::Workshop),
            "cultural" => Ok(EventCategory::Cultural),
            "tech" => Ok(EventCategory::Tech),
            "sports" => Ok(EventCategory::Sports),
            "seminar" => Ok(EventCategory::Seminar),
            "hackathon" => Ok(EventCategory::Hackathon),
            other => Err(format!(
                "unknown category '{}' (expected workshop, cultural, tech, sports, seminar or hackathon)",
                other
            )),
        }
    }
}

/// How the event is attended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventMode {
    Offline,
    Online,
    Hybrid,
}

impl fmt::Display for EventMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            EventMode::Offline => "offline",
            EventMode::Online => "online",
            EventMode::Hybrid => "hybrid",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for EventMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "offline" | "in-person" => Ok(EventMode::Offline),
            "online" => Ok(EventMode::Online),
            "hybrid" => Ok(EventMode::Hybrid),
            other => Err(format!(
                "unknown mode '{}' (expected offline, online or hybrid)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_event() -> Event {
        Event {
            id: "evt-1".to_string(),
            title: "AI Workshop".to_string(),
            description: "Hands-on intro".to_string(),
            date: "2025-06-01".to_string(),
            time: "10:00 AM".to_string(),
            venue: "Lab 301".to_string(),
            category: EventCategory::Workshop,
            mode: EventMode::Offline,
            organizer: "Tech Club".to_string(),
            department: "Computer Science".to_string(),
            attendees: 12,
            max_capacity: Some(60),
            is_featured: false,
            google_form_link: None,
        }
    }

    #[test]
    fn serde_round_trip_preserves_all_fields() {
        let event = make_test_event();
        let json = serde_json::to_string(&event).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }

    #[test]
    fn optional_fields_are_omitted_when_absent() {
        let event = make_test_event();
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"maxCapacity\":60"));
        assert!(!json.contains("googleFormLink"));
        assert!(!json.contains("isFeatured"));
    }

    #[test]
    fn missing_optional_fields_deserialize_to_defaults() {
        let json = r#"{
            "id": "x",
            "title": "t",
            "description": "d",
            "date": "2025-01-01",
            "time": "9:00 AM",
            "venue": "v",
            "category": "tech",
            "mode": "online",
            "organizer": "o",
            "department": "dep",
            "attendees": 0
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.max_capacity, None);
        assert!(!event.is_featured);
        assert_eq!(event.google_form_link, None);
    }

    #[test]
    fn patch_merges_only_set_fields() {
        let mut event = make_test_event();
        let patch = EventPatch {
            title: Some("Renamed".to_string()),
            attendees: Some(20),
            ..EventPatch::default()
        };
        patch.apply(&mut event);
        assert_eq!(event.title, "Renamed");
        assert_eq!(event.attendees, 20);
        assert_eq!(event.venue, "Lab 301");
        assert_eq!(event.id, "evt-1");
    }

    #[test]
    fn category_and_mode_parse_from_str() {
        assert_eq!("Workshop".parse::<EventCategory>(), Ok(EventCategory::Workshop));
        assert_eq!("hybrid".parse::<EventMode>(), Ok(EventMode::Hybrid));
        assert!("picnic".parse::<EventCategory>().is_err());
    }
}
