//! Fixed sample events used to seed a fresh store.

use crate::event::{Event, EventCategory, EventMode};

/// Bump when the sample set changes shape, so existing installs reseed.
pub const SEED_VERSION: u32 = 3;

#[allow(clippy::too_many_arguments)]
fn event(
    id: &str,
    title: &str,
    description: &str,
    date: &str,
    time: &str,
    venue: &str,
    category: EventCategory,
    mode: EventMode,
    organizer: &str,
    department: &str,
    attendees: u32,
    max_capacity: Option<u32>,
    is_featured: bool,
) -> Event {
    Event {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        venue: venue.to_string(),
        category,
        mode,
        organizer: organizer.to_string(),
        department: department.to_string(),
        attendees,
        max_capacity,
        is_featured,
        google_form_link: None,
    }
}

/// The fixed seed set written on first initialization (and after a
/// version bump or corrupt state).
pub fn sample_events() -> Vec<Event> {
    vec![
        event(
            "1",
            "AI & Machine Learning Workshop",
            "Hands-on workshop covering neural networks, deep learning fundamentals, and practical applications using Python and TensorFlow.",
            "2025-01-15",
            "10:00 AM",
            "Computer Science Lab 301",
            EventCategory::Workshop,
            EventMode::Offline,
            "Tech Club",
            "Computer Science",
            45,
            Some(60),
            true,
        ),
        event(
            "2",
            "Annual Cultural Fest - Rhythm 2025",
            "Three-day extravaganza featuring music, dance, drama, and art competitions from colleges across the state.",
            "2025-01-20",
            "5:00 PM",
            "Main Auditorium",
            EventCategory::Cultural,
            EventMode::Offline,
            "Cultural Committee",
            "Student Affairs",
            500,
            Some(800),
            true,
        ),
        event(
            "3",
            "Hackathon: Code for Change",
            "24-hour coding marathon to build innovative solutions for social impact. Great prizes and networking opportunities!",
            "2025-01-25",
            "9:00 AM",
            "Innovation Hub",
            EventCategory::Tech,
            EventMode::Hybrid,
            "Developer Community",
            "Computer Science",
            120,
            Some(150),
            true,
        ),
        event(
            "4",
            "Inter-College Basketball Championship",
            "Annual basketball tournament featuring teams from 12 colleges. Come support your team!",
            "2025-01-18",
            "2:00 PM",
            "Sports Complex",
            EventCategory::Sports,
            EventMode::Offline,
            "Sports Council",
            "Physical Education",
            200,
            None,
            false,
        ),
        event(
            "5",
            "Guest Lecture: Future of Renewable Energy",
            "Dr. Sarah Mitchell from MIT discusses the latest advancements in solar and wind energy technology.",
            "2025-01-22",
            "3:00 PM",
            "Seminar Hall A",
            EventCategory::Seminar,
            EventMode::Hybrid,
            "Energy Club",
            "Electrical Engineering",
            80,
            Some(100),
            false,
        ),
        event(
            "6",
            "Photography Workshop: Capture the Moment",
            "Learn professional photography techniques including composition, lighting, and post-processing.",
            "2025-01-28",
            "11:00 AM",
            "Art Studio",
            EventCategory::Workshop,
            EventMode::Offline,
            "Photography Club",
            "Fine Arts",
            25,
            Some(30),
            false,
        ),
        event(
            "7",
            "Startup Pitch Competition",
            "Present your startup idea to a panel of investors and industry experts. Win funding and mentorship!",
            "2025-02-01",
            "10:00 AM",
            "Business School Auditorium",
            EventCategory::Tech,
            EventMode::Offline,
            "Entrepreneurship Cell",
            "Business Administration",
            60,
            None,
            false,
        ),
        event(
            "8",
            "Classical Music Night",
            "An evening of Indian classical music featuring renowned artists and student performers.",
            "2025-02-05",
            "6:30 PM",
            "Open Air Theatre",
            EventCategory::Cultural,
            EventMode::Offline,
            "Music Society",
            "Student Affairs",
            150,
            None,
            false,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_ids_are_unique() {
        let events = sample_events();
        let ids: HashSet<_> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), events.len());
    }

    #[test]
    fn seed_attendees_respect_capacity() {
        for event in sample_events() {
            if let Some(capacity) = event.max_capacity {
                assert!(event.attendees <= capacity, "seed event {} overbooked", event.id);
            }
        }
    }
}
