use super::{load_or_default, persist};
use crate::models::history::SearchHistoryItem;
use chrono::Local;
use std::path::{Path, PathBuf};

/// Upper bound on stored searches; a configured limit can only lower it.
pub const DEFAULT_LIMIT: usize = 10;

/// Recent searches, most recent first, without case-insensitive duplicates.
pub struct HistoryStore {
    path: PathBuf,
    limit: usize,
    items: Vec<SearchHistoryItem>,
}

impl HistoryStore {
    pub fn open(path: &Path, limit: usize) -> Self {
        let mut store = Self {
            path: path.to_path_buf(),
            limit: limit.clamp(1, DEFAULT_LIMIT),
            items: load_or_default(path),
        };
        store.normalize();
        store
    }

    /// Insert `city` at the head, dropping any earlier entry for the same city.
    pub fn add_or_promote(&mut self, city: &str) {
        let now = Local::now().to_rfc3339();
        self.add_or_promote_at(city, &now);
    }

    pub fn add_or_promote_at(&mut self, city: &str, timestamp: &str) {
        self.items.retain(|item| !item.same_city(city));
        self.items.insert(
            0,
            SearchHistoryItem {
                city: city.to_string(),
                timestamp: timestamp.to_string(),
            },
        );
        self.items.truncate(self.limit);
        persist(&self.path, &self.items);
    }

    /// Returns false (and writes nothing) when the city is not present.
    pub fn remove(&mut self, city: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| !item.same_city(city));
        if self.items.len() == before {
            return false;
        }
        persist(&self.path, &self.items);
        true
    }

    pub fn clear(&mut self) {
        self.items.clear();
        persist(&self.path, &self.items);
    }

    pub fn list(&self) -> &[SearchHistoryItem] {
        &self.items
    }

    /// The most recently searched city.
    pub fn current(&self) -> Option<&SearchHistoryItem> {
        self.items.first()
    }

    // A hand-edited file may break the length and uniqueness rules.
    fn normalize(&mut self) {
        let mut seen: Vec<String> = Vec::new();
        self.items.retain(|item| {
            let key = item.city.to_lowercase();
            if seen.contains(&key) {
                false
            } else {
                seen.push(key);
                true
            }
        });
        self.items.truncate(self.limit);
    }
}
