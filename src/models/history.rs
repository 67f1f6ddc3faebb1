use serde::{Deserialize, Serialize};

/// One successful weather lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHistoryItem {
    pub city: String,
    /// Local time in ISO 8601 format (e.g., "2026-10-18T09:30:00.123+02:00").
    pub timestamp: String,
}

impl SearchHistoryItem {
    pub fn same_city(&self, city: &str) -> bool {
        self.city.to_lowercase() == city.to_lowercase()
    }
}
