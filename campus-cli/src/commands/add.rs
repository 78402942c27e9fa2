use anyhow::Result;
use campus_core::classify::parse_event_date;
use campus_core::event::{EventCategory, EventMode, NewEvent};
use campus_core::store::EventStore;
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;

pub struct AddArgs {
    pub title: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub venue: Option<String>,
    pub description: Option<String>,
    pub category: Option<EventCategory>,
    pub mode: Option<EventMode>,
    pub organizer: Option<String>,
    pub department: Option<String>,
    pub capacity: Option<u32>,
    pub featured: bool,
    pub form_link: Option<String>,
}

pub fn run(store: &mut EventStore, args: AddArgs) -> Result<()> {
    let interactive = args.title.is_none() || args.date.is_none();

    // --- Title ---
    let title = match args.title {
        Some(t) => t,
        None => Input::<String>::new()
            .with_prompt("  Title")
            .interact_text()?,
    };

    // --- Date ---
    let date = match args.date {
        Some(d) => {
            validate_date(&d)?;
            d
        }
        None => prompt_date()?,
    };

    // --- Category ---
    let category = match args.category {
        Some(c) => c,
        None if interactive => prompt_category()?,
        None => EventCategory::Workshop,
    };

    let mode = args.mode.unwrap_or(EventMode::Offline);
    let time = prompt_or_default(args.time, interactive, "  Time (e.g. 10:00 AM)", "10:00 AM")?;
    let venue = prompt_or_default(args.venue, interactive, "  Venue", "TBA")?;

    let draft = NewEvent {
        title,
        description: args.description.unwrap_or_default(),
        date,
        time,
        venue,
        category,
        mode,
        organizer: args.organizer.unwrap_or_default(),
        department: args.department.unwrap_or_default(),
        attendees: 0,
        max_capacity: args.capacity,
        is_featured: args.featured,
        google_form_link: args.form_link,
    };

    let created = store.add(draft)?;

    if interactive {
        println!();
    }
    println!(
        "{}",
        format!("  Created: {} ({})", created.title, created.id).green()
    );
    Ok(())
}

fn validate_date(date: &str) -> Result<()> {
    if parse_event_date(date).is_none() {
        anyhow::bail!("Invalid date '{}' (expected YYYY-MM-DD)", date);
    }
    Ok(())
}

/// Prompt for a date with retry on parse errors.
fn prompt_date() -> Result<String> {
    loop {
        let input: String = Input::new()
            .with_prompt("  Date (YYYY-MM-DD)")
            .interact_text()?;
        match validate_date(&input) {
            Ok(()) => return Ok(input),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

fn prompt_category() -> Result<EventCategory> {
    let labels: Vec<String> = EventCategory::ALL.iter().map(|c| c.to_string()).collect();
    let index = Select::new()
        .with_prompt("  Category")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(EventCategory::ALL[index])
}

fn prompt_or_default(
    value: Option<String>,
    interactive: bool,
    prompt: &str,
    fallback: &str,
) -> Result<String> {
    if let Some(v) = value {
        return Ok(v);
    }
    if !interactive {
        return Ok(fallback.to_string());
    }
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(fallback.to_string())
        .interact_text()?;
    Ok(input)
}
