//! Pure status derivation for events.
//!
//! Nothing in here mutates or stores anything: lifecycle status, seat
//! status and registration eligibility are recomputed from the record (and
//! the caller-supplied "today") on every query, so the same record can
//! report different statuses on different days without being touched.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::event::Event;

/// Where an event sits relative to today, by date-only comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleStatus {
    /// Event date is strictly after today.
    Upcoming,
    /// Event date is today.
    Active,
    /// Event date is strictly before today.
    Completed,
}

impl fmt::Display for LifecycleStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            LifecycleStatus::Upcoming => "upcoming",
            LifecycleStatus::Active => "active",
            LifecycleStatus::Completed => "completed",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for LifecycleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "upcoming" => Ok(LifecycleStatus::Upcoming),
            // "ongoing" is the label some older data uses for today's events
            "active" | "ongoing" => Ok(LifecycleStatus::Active),
            "completed" => Ok(LifecycleStatus::Completed),
            other => Err(format!(
                "unknown status '{}' (expected upcoming, active or completed)",
                other
            )),
        }
    }
}

/// Seat availability, from the attendee/capacity ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeatStatus {
    Available,
    /// At or above 80% of capacity.
    FillingFast,
    /// At or above capacity.
    Full,
}

impl fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            SeatStatus::Available => "available",
            SeatStatus::FillingFast => "filling-fast",
            SeatStatus::Full => "full",
        };
        write!(f, "{}", name)
    }
}

/// Parse an event's stored date (`YYYY-MM-DD`).
pub fn parse_event_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()
}

/// Classify an event's lifecycle relative to `today`.
///
/// A malformed date fails closed to `Upcoming`: an event we cannot place in
/// time must never be shown (or gated) as already over. The bad value is
/// logged as a data-quality warning.
pub fn lifecycle_status(event: &Event, today: NaiveDate) -> LifecycleStatus {
    let Some(date) = parse_event_date(&event.date) else {
        tracing::warn!(
            event_id = %event.id,
            date = %event.date,
            "event has an unparseable date, treating as upcoming"
        );
        return LifecycleStatus::Upcoming;
    };

    match date.cmp(&today) {
        Ordering::Greater => LifecycleStatus::Upcoming,
        Ordering::Equal => LifecycleStatus::Active,
        Ordering::Less => LifecycleStatus::Completed,
    }
}

/// Classify seat availability. Uncapped events are always `Available`.
///
/// Thresholds are inclusive: exactly 80% is `FillingFast`, exactly 100% is
/// `Full`. Computed in integer arithmetic so boundary cases are exact.
pub fn seat_status(event: &Event) -> SeatStatus {
    let Some(capacity) = event.max_capacity else {
        return SeatStatus::Available;
    };

    if event.attendees >= capacity {
        return SeatStatus::Full;
    }
    // attendees / capacity >= 4/5, without floats
    if u64::from(event.attendees) * 5 >= u64::from(capacity) * 4 {
        return SeatStatus::FillingFast;
    }
    SeatStatus::Available
}

/// The single gate consulted before any registration action.
///
/// An event is registrable iff it is not completed and has seats left
/// (uncapped events always have seats left).
pub fn can_register(event: &Event, today: NaiveDate) -> bool {
    if lifecycle_status(event, today) == LifecycleStatus::Completed {
        return false;
    }
    match event.max_capacity {
        Some(capacity) => event.attendees < capacity,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventCategory, EventMode};

    fn make_test_event(date: &str, attendees: u32, max_capacity: Option<u32>) -> Event {
        Event {
            id: "evt-1".to_string(),
            title: "Test Event".to_string(),
            description: String::new(),
            date: date.to_string(),
            time: "10:00 AM".to_string(),
            venue: "Hall A".to_string(),
            category: EventCategory::Seminar,
            mode: EventMode::Offline,
            organizer: "Club".to_string(),
            department: "Dept".to_string(),
            attendees,
            max_capacity,
            is_featured: false,
            google_form_link: None,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn lifecycle_follows_date_comparison() {
        let today = day(2025, 6, 15);
        let event = make_test_event("2025-06-15", 0, None);
        assert_eq!(lifecycle_status(&event, today), LifecycleStatus::Active);

        let event = make_test_event("2025-06-16", 0, None);
        assert_eq!(lifecycle_status(&event, today), LifecycleStatus::Upcoming);

        let event = make_test_event("2025-06-14", 0, None);
        assert_eq!(lifecycle_status(&event, today), LifecycleStatus::Completed);
    }

    #[test]
    fn lifecycle_advances_monotonically_with_today() {
        let event = make_test_event("2025-06-15", 0, None);
        assert_eq!(
            lifecycle_status(&event, day(2025, 6, 14)),
            LifecycleStatus::Upcoming
        );
        assert_eq!(
            lifecycle_status(&event, day(2025, 6, 15)),
            LifecycleStatus::Active
        );
        assert_eq!(
            lifecycle_status(&event, day(2025, 6, 16)),
            LifecycleStatus::Completed
        );
    }

    #[test]
    fn malformed_date_fails_closed_to_upcoming() {
        let today = day(2025, 6, 15);
        for bad in ["not-a-date", "", "15/06/2025", "2025-13-40"] {
            let event = make_test_event(bad, 0, None);
            assert_eq!(
                lifecycle_status(&event, today),
                LifecycleStatus::Upcoming,
                "date {:?} should classify as upcoming",
                bad
            );
        }
    }

    #[test]
    fn seat_status_thresholds_are_inclusive() {
        // 48/60 is exactly 80%
        let event = make_test_event("2025-06-15", 48, Some(60));
        assert_eq!(seat_status(&event), SeatStatus::FillingFast);

        let event = make_test_event("2025-06-15", 47, Some(60));
        assert_eq!(seat_status(&event), SeatStatus::Available);

        let event = make_test_event("2025-06-15", 60, Some(60));
        assert_eq!(seat_status(&event), SeatStatus::Full);

        let event = make_test_event("2025-06-15", 61, Some(60));
        assert_eq!(seat_status(&event), SeatStatus::Full);
    }

    #[test]
    fn uncapped_events_are_always_available() {
        let event = make_test_event("2025-06-15", 1_000_000, None);
        assert_eq!(seat_status(&event), SeatStatus::Available);
    }

    #[test]
    fn eligibility_requires_not_completed_and_seats_left() {
        let today = day(2025, 6, 15);

        // 48/60 is filling fast but still registrable
        let event = make_test_event("2025-06-20", 48, Some(60));
        assert_eq!(seat_status(&event), SeatStatus::FillingFast);
        assert!(can_register(&event, today));

        // Full event, even though upcoming
        let event = make_test_event("2025-06-20", 60, Some(60));
        assert!(!can_register(&event, today));

        // Completed event, even with free seats
        let event = make_test_event("2025-06-01", 0, Some(60));
        assert!(!can_register(&event, today));

        // Today + uncapped
        let event = make_test_event("2025-06-15", 500, None);
        assert_eq!(lifecycle_status(&event, today), LifecycleStatus::Active);
        assert!(can_register(&event, today));
    }
}
