use anyhow::Result;
use campus_core::bookmarks::Bookmarks;
use campus_core::store::EventStore;
use owo_colors::OwoColorize;

pub fn run(store: &mut EventStore, id: &str) -> Result<()> {
    let Some(event) = store.get(id) else {
        anyhow::bail!("Event not found: {}", id);
    };
    let title = event.title.clone();

    let mut bookmarks = Bookmarks::open(store.dir());
    if bookmarks.toggle(id)? {
        println!("{}", format!("  Bookmarked: {}", title).green());
    } else {
        println!("{}", format!("  Removed bookmark: {}", title).dimmed());
    }
    Ok(())
}
