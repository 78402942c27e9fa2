use anyhow::{Context, Result};
use campus_core::error::CampusError;
use campus_core::store::EventStore;
use owo_colors::OwoColorize;

pub fn run(store: &mut EventStore, id: &str) -> Result<()> {
    let Some(event) = store.get(id) else {
        anyhow::bail!("Event not found: {}", id);
    };

    // External form: registration is delegated, the local counter is
    // never touched.
    if let Some(link) = event.google_form_link.clone() {
        println!("  Registration for this event is handled externally.");
        println!("  Opening {}", link.dimmed());
        open::that(&link).with_context(|| format!("Failed to open {}", link))?;
        return Ok(());
    }

    match store.register(id) {
        Ok(updated) => {
            let seats = match updated.max_capacity {
                Some(capacity) => format!("{}/{}", updated.attendees, capacity),
                None => updated.attendees.to_string(),
            };
            println!(
                "{}",
                format!("  Registration successful! {} registered.", seats).green()
            );
            Ok(())
        }
        Err(e @ (CampusError::FullyBooked | CampusError::RegistrationClosed)) => {
            println!("{}", format!("  {}", e).red());
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
