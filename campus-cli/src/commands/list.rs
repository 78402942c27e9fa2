use anyhow::Result;
use campus_core::bookmarks::Bookmarks;
use campus_core::classify::parse_event_date;
use campus_core::event::Event;
use campus_core::filter::EventFilter;
use campus_core::store::EventStore;
use chrono::Local;
use owo_colors::OwoColorize;

use crate::render::event_line;

pub fn run(store: &mut EventStore, filter: EventFilter, bookmarked_only: bool) -> Result<()> {
    let today = Local::now().date_naive();
    let bookmarks = Bookmarks::open(store.dir());

    let mut events: Vec<Event> = store
        .list()
        .into_iter()
        .filter(|e| filter.matches(e, today))
        .filter(|e| !bookmarked_only || bookmarks.contains(&e.id))
        .collect();

    // Earliest first; undated events sink to the bottom
    events.sort_by_key(|e| parse_event_date(&e.date).unwrap_or(chrono::NaiveDate::MAX));

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        if !filter.is_empty() || bookmarked_only {
            println!("{}", "Try adjusting your filters or search terms".dimmed());
        }
        return Ok(());
    }

    for event in &events {
        let marker = if bookmarks.contains(&event.id) {
            "🔖 "
        } else {
            "   "
        };
        println!("{}{}", marker, event_line(event, today));
    }

    println!();
    let label = if events.len() == 1 { "event" } else { "events" };
    println!("{}", format!("{} {} found", events.len(), label).dimmed());
    Ok(())
}
