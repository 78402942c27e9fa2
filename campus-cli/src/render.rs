//! Terminal rendering for campus events.
//!
//! Extension traits that turn core types into colored badges, in the
//! spirit of status badges on the event cards.

use campus_core::classify::{lifecycle_status, seat_status, LifecycleStatus, SeatStatus};
use campus_core::event::{Event, EventMode};
use chrono::NaiveDate;
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for LifecycleStatus {
    fn render(&self) -> String {
        match self {
            LifecycleStatus::Upcoming => "upcoming".cyan().to_string(),
            LifecycleStatus::Active => "active".green().bold().to_string(),
            LifecycleStatus::Completed => "completed".dimmed().to_string(),
        }
    }
}

impl Render for SeatStatus {
    fn render(&self) -> String {
        match self {
            SeatStatus::Available => "available".green().to_string(),
            SeatStatus::FillingFast => "filling fast".yellow().to_string(),
            SeatStatus::Full => "full".red().to_string(),
        }
    }
}

impl Render for EventMode {
    fn render(&self) -> String {
        match self {
            EventMode::Offline => "📍 in-person".to_string(),
            EventMode::Online => "🌐 online".to_string(),
            EventMode::Hybrid => "🔄 hybrid".to_string(),
        }
    }
}

/// One-line listing entry: date, title, badges, seats.
pub fn event_line(event: &Event, today: NaiveDate) -> String {
    let star = if event.is_featured { "★ " } else { "" };
    let lifecycle = lifecycle_status(event, today);
    let seats = seat_status(event);

    let capacity = match event.max_capacity {
        Some(capacity) => format!("{}/{}", event.attendees, capacity),
        None => format!("{}", event.attendees),
    };

    format!(
        "{}  {}{}  [{}] [{}]  {} {}  {}",
        event.date,
        star,
        event.title.bold(),
        lifecycle.render(),
        seats.render(),
        capacity.dimmed(),
        "seats".dimmed(),
        format!("({})", event.id).dimmed(),
    )
}

/// Full multi-line view for `show`.
pub fn event_details(event: &Event, today: NaiveDate) -> String {
    let mut lines = vec![
        format!("{}", event.title.bold()),
        format!(
            "  {} at {}  [{}]",
            event.date,
            event.time,
            lifecycle_status(event, today).render()
        ),
        format!("  {}  {}", event.render_category(), event.mode.render()),
        format!("  Venue:      {}", event.venue),
        format!("  Organizer:  {} ({})", event.organizer, event.department),
        format!(
            "  Seats:      {}  [{}]",
            match event.max_capacity {
                Some(capacity) => format!("{}/{}", event.attendees, capacity),
                None => format!("{} (uncapped)", event.attendees),
            },
            seat_status(event).render()
        ),
    ];
    if let Some(link) = &event.google_form_link {
        lines.push(format!("  Register:   {}", link));
    }
    if !event.description.is_empty() {
        lines.push(String::new());
        lines.push(format!("  {}", event.description));
    }
    lines.join("\n")
}

trait CategoryBadge {
    fn render_category(&self) -> String;
}

impl CategoryBadge for Event {
    fn render_category(&self) -> String {
        format!("#{}", self.category).magenta().to_string()
    }
}
