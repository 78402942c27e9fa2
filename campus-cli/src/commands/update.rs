use anyhow::{Context, Result};
use campus_core::event::EventPatch;
use campus_core::store::EventStore;
use owo_colors::OwoColorize;

pub fn run(store: &mut EventStore, id: &str, patch: EventPatch) -> Result<()> {
    if patch.is_empty() {
        anyhow::bail!("Nothing to update; pass at least one field flag");
    }

    let updated = store
        .update(id, patch)
        .with_context(|| format!("Failed to update event {}", id))?;

    println!("{}", format!("  Updated: {}", updated.title).green());
    Ok(())
}
