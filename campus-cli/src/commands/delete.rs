use anyhow::Result;
use campus_core::store::EventStore;
use owo_colors::OwoColorize;

pub fn run(store: &mut EventStore, id: &str) -> Result<()> {
    if store.delete(id)? {
        println!("{}", format!("  Deleted: {}", id).green());
    } else {
        println!("{}", format!("  No event with id {}", id).dimmed());
    }
    Ok(())
}
