//! On-disk persistence for the event collection.
//!
//! Two files under the store directory: `events.json` holds the serialized
//! collection, `seed_version` a small integer that guards reseeding when
//! the shape of the seed data changes between releases. Anything missing,
//! unreadable or version-mismatched reads as "no persisted state".

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CampusResult;
use crate::event::Event;

const EVENTS_FILE: &str = "events.json";
const VERSION_FILE: &str = "seed_version";

pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    pub fn new(dir: &Path) -> Storage {
        Storage {
            dir: dir.to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn events_path(&self) -> PathBuf {
        self.dir.join(EVENTS_FILE)
    }

    fn version_path(&self) -> PathBuf {
        self.dir.join(VERSION_FILE)
    }

    /// Read the persisted collection.
    ///
    /// Returns `None` when there is nothing usable on disk: no files yet, a
    /// seed version other than `expected_version`, or content that fails to
    /// parse. Corrupt state is logged and treated as absent, never
    /// propagated as an error.
    pub fn load(&self, expected_version: u32) -> Option<Vec<Event>> {
        if self.stored_version()? != expected_version {
            return None;
        }

        let content = fs::read_to_string(self.events_path()).ok()?;
        match serde_json::from_str(&content) {
            Ok(events) => Some(events),
            Err(e) => {
                tracing::warn!(error = %e, "persisted event collection is corrupt, reseeding");
                None
            }
        }
    }

    fn stored_version(&self) -> Option<u32> {
        fs::read_to_string(self.version_path())
            .ok()?
            .trim()
            .parse()
            .ok()
    }

    /// Persist the full collection and the seed version.
    pub fn save(&self, events: &[Event], version: u32) -> CampusResult<()> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(events)?;
        write_atomic(&self.events_path(), &json)?;
        write_atomic(&self.version_path(), &version.to_string())?;
        Ok(())
    }
}

/// Write via a temp file + rename so readers never see a partial file.
fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    let temp = path.with_extension("tmp");
    fs::write(&temp, content)?;
    fs::rename(&temp, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventCategory, EventMode};
    use tempfile::TempDir;

    fn make_test_event(id: &str) -> Event {
        Event {
            id: id.to_string(),
            title: "Stored Event".to_string(),
            description: "d".to_string(),
            date: "2025-04-01".to_string(),
            time: "2:00 PM".to_string(),
            venue: "Hall".to_string(),
            category: EventCategory::Cultural,
            mode: EventMode::Hybrid,
            organizer: "Committee".to_string(),
            department: "Student Affairs".to_string(),
            attendees: 10,
            max_capacity: Some(50),
            is_featured: true,
            google_form_link: Some("https://example.com/form".to_string()),
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path());
        let events = vec![make_test_event("a"), make_test_event("b")];

        storage.save(&events, 3).unwrap();
        assert_eq!(storage.load(3), Some(events));
    }

    #[test]
    fn load_returns_none_when_nothing_persisted() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path());
        assert_eq!(storage.load(3), None);
    }

    #[test]
    fn load_returns_none_on_version_mismatch() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path());
        storage.save(&[make_test_event("a")], 2).unwrap();
        assert_eq!(storage.load(3), None);
    }

    #[test]
    fn load_returns_none_on_corrupt_content() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path());
        storage.save(&[make_test_event("a")], 3).unwrap();
        fs::write(dir.path().join(EVENTS_FILE), "{ not json").unwrap();
        assert_eq!(storage.load(3), None);
    }
}
