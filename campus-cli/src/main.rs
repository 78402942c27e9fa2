mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use campus_core::classify::LifecycleStatus;
use campus_core::event::{EventCategory, EventMode};
use campus_core::filter::EventFilter;
use campus_core::store::EventStore;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "campus")]
#[command(about = "Browse, manage and register for campus events")]
struct Cli {
    /// Directory holding event data (default: platform data dir,
    /// override with $CAMPUS_EVENTS_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List events, optionally filtered
    List {
        /// Only events in this category
        #[arg(short, long)]
        category: Option<EventCategory>,

        /// Only events in this mode (offline, online, hybrid)
        #[arg(short, long)]
        mode: Option<EventMode>,

        /// Only events with this status (upcoming, active, completed)
        #[arg(short, long)]
        status: Option<LifecycleStatus>,

        /// Search title, description, organizer and venue
        #[arg(short, long)]
        query: Option<String>,

        /// Only bookmarked events
        #[arg(short, long)]
        bookmarked: bool,
    },
    /// Show one event in full
    Show { id: String },
    /// Add a new event (prompts for anything not given as a flag)
    Add {
        #[arg(long)]
        title: Option<String>,

        /// Event date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Display time (e.g. "10:00 AM")
        #[arg(long)]
        time: Option<String>,

        #[arg(long)]
        venue: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        category: Option<EventCategory>,

        #[arg(long)]
        mode: Option<EventMode>,

        #[arg(long)]
        organizer: Option<String>,

        #[arg(long)]
        department: Option<String>,

        /// Maximum capacity (omit for uncapped)
        #[arg(long)]
        capacity: Option<u32>,

        /// Feature this event
        #[arg(long)]
        featured: bool,

        /// External registration form URL
        #[arg(long)]
        form_link: Option<String>,
    },
    /// Update fields on an existing event
    Update {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        date: Option<String>,

        #[arg(long)]
        time: Option<String>,

        #[arg(long)]
        venue: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        category: Option<EventCategory>,

        #[arg(long)]
        mode: Option<EventMode>,

        #[arg(long)]
        organizer: Option<String>,

        #[arg(long)]
        department: Option<String>,

        #[arg(long)]
        capacity: Option<u32>,

        #[arg(long)]
        featured: Option<bool>,

        #[arg(long)]
        form_link: Option<String>,
    },
    /// Delete an event
    Delete { id: String },
    /// Register for an event (opens the external form when one is set)
    Register { id: String },
    /// Bookmark or un-bookmark an event
    Bookmark { id: String },
    /// Show dashboard statistics
    Stats,
    /// Print a Google Calendar link for an event
    Calendar {
        id: String,

        /// Open the link in the browser
        #[arg(long)]
        open: bool,
    },
    /// Reload the collection from disk (after edits from elsewhere)
    Refresh,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let data_dir = resolve_data_dir(cli.data_dir)?;
    let mut store = EventStore::open(&data_dir);

    match cli.command {
        Commands::List {
            category,
            mode,
            status,
            query,
            bookmarked,
        } => {
            let filter = EventFilter {
                query,
                category,
                mode,
                status,
            };
            commands::list::run(&mut store, filter, bookmarked)
        }
        Commands::Show { id } => commands::show::run(&mut store, &id),
        Commands::Add {
            title,
            date,
            time,
            venue,
            description,
            category,
            mode,
            organizer,
            department,
            capacity,
            featured,
            form_link,
        } => commands::add::run(
            &mut store,
            commands::add::AddArgs {
                title,
                date,
                time,
                venue,
                description,
                category,
                mode,
                organizer,
                department,
                capacity,
                featured,
                form_link,
            },
        ),
        Commands::Update {
            id,
            title,
            date,
            time,
            venue,
            description,
            category,
            mode,
            organizer,
            department,
            capacity,
            featured,
            form_link,
        } => {
            let patch = campus_core::event::EventPatch {
                title,
                description,
                date,
                time,
                venue,
                category,
                mode,
                organizer,
                department,
                attendees: None,
                max_capacity: capacity,
                is_featured: featured,
                google_form_link: form_link,
            };
            commands::update::run(&mut store, &id, patch)
        }
        Commands::Delete { id } => commands::delete::run(&mut store, &id),
        Commands::Register { id } => commands::register::run(&mut store, &id),
        Commands::Bookmark { id } => commands::bookmark::run(&mut store, &id),
        Commands::Stats => commands::stats::run(&mut store),
        Commands::Calendar { id, open } => commands::calendar::run(&mut store, &id, open),
        Commands::Refresh => commands::refresh::run(&mut store),
    }
}

fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Ok(dir) = std::env::var("CAMPUS_EVENTS_DIR") {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let base = dirs::data_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine a data directory"))?;
    Ok(base.join("campus-events"))
}
