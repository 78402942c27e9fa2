use anyhow::{Context, Result};
use campus_core::calendar_link::google_calendar_url;
use campus_core::store::EventStore;

pub fn run(store: &mut EventStore, id: &str, open_link: bool) -> Result<()> {
    let Some(event) = store.get(id) else {
        anyhow::bail!("Event not found: {}", id);
    };

    let url = google_calendar_url(event)?;
    println!("{}", url);

    if open_link {
        open::that(url.as_str()).with_context(|| format!("Failed to open {}", url))?;
    }
    Ok(())
}
