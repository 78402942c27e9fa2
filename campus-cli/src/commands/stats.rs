use anyhow::Result;
use campus_core::stats::CampusStats;
use campus_core::store::EventStore;
use chrono::Local;
use owo_colors::OwoColorize;

pub fn run(store: &mut EventStore) -> Result<()> {
    let today = Local::now().date_naive();
    let events = store.list();
    let stats = CampusStats::compute(&events, today);

    println!("{}", "Campus events".bold());
    println!("  Events this month:  {}", stats.events_this_month);
    println!("  Live today:         {}", stats.live_events);
    println!("  Active students:    {}", stats.active_students);
    println!("  Clubs & societies:  {}", stats.unique_clubs);

    if !stats.events_by_department.is_empty() {
        println!();
        println!("{}", "Events by department".bold());
        for (department, count) in &stats.events_by_department {
            println!("  {:<28} {}", department, count);
        }
    }

    if !stats.attendees_by_department.is_empty() {
        println!();
        println!("{}", "Attendees by department".bold());
        for (department, attendees) in &stats.attendees_by_department {
            println!("  {:<28} {}", department, attendees);
        }
    }

    Ok(())
}
