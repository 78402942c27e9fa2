//! Persisted event bookmarks.
//!
//! A flat list of event ids in its own JSON file, separate from the event
//! collection. A missing or corrupt file loads as an empty list.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CampusResult;

const BOOKMARKS_FILE: &str = "bookmarks.json";

pub struct Bookmarks {
    path: PathBuf,
    ids: Vec<String>,
}

impl Bookmarks {
    pub fn open(dir: &Path) -> Bookmarks {
        let path = dir.join(BOOKMARKS_FILE);
        let ids = fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default();
        Bookmarks { path, ids }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|i| i == id)
    }

    /// Toggle a bookmark and persist. Returns `true` when the event is now
    /// bookmarked.
    pub fn toggle(&mut self, id: &str) -> CampusResult<bool> {
        let added = if self.contains(id) {
            self.ids.retain(|i| i != id);
            false
        } else {
            self.ids.push(id.to_string());
            true
        };
        self.save()?;
        Ok(added)
    }

    fn save(&self) -> CampusResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string(&self.ids)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn toggle_adds_then_removes_and_persists() {
        let dir = TempDir::new().unwrap();

        let mut bookmarks = Bookmarks::open(dir.path());
        assert!(bookmarks.toggle("evt-1").unwrap());
        assert!(bookmarks.contains("evt-1"));

        // New handle sees the persisted state
        let mut reloaded = Bookmarks::open(dir.path());
        assert!(reloaded.contains("evt-1"));

        assert!(!reloaded.toggle("evt-1").unwrap());
        assert!(!reloaded.contains("evt-1"));
    }

    #[test]
    fn corrupt_file_loads_as_empty() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(BOOKMARKS_FILE), "not json at all").unwrap();

        let bookmarks = Bookmarks::open(dir.path());
        assert!(bookmarks.ids().is_empty());
    }
}
