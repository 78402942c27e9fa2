use anyhow::Result;
use campus_core::store::EventStore;
use chrono::Local;

use crate::render::event_details;

pub fn run(store: &mut EventStore, id: &str) -> Result<()> {
    let today = Local::now().date_naive();

    let Some(event) = store.get(id) else {
        anyhow::bail!("Event not found: {}", id);
    };

    println!("{}", event_details(event, today));
    Ok(())
}
