use anyhow::Result;
use campus_core::store::EventStore;
use owo_colors::OwoColorize;

pub fn run(store: &mut EventStore) -> Result<()> {
    store.refresh();
    let count = store.events().len();
    println!(
        "{}",
        format!("  Reloaded {} events from {}", count, store.dir().display()).dimmed()
    );
    Ok(())
}
