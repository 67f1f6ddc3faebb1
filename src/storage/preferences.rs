use super::{load_or_default, persist};
use crate::models::preferences::UserPreferences;
use std::path::{Path, PathBuf};

pub struct PreferencesStore {
    path: PathBuf,
    prefs: UserPreferences,
}

impl PreferencesStore {
    pub fn open(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            prefs: load_or_default(path),
        }
    }

    pub fn get(&self) -> &UserPreferences {
        &self.prefs
    }

    pub fn use_fahrenheit(&self) -> bool {
        self.prefs.use_fahrenheit
    }

    pub fn set_fahrenheit(&mut self, value: bool) {
        self.prefs.use_fahrenheit = value;
        persist(&self.path, &self.prefs);
    }

    /// Flip the unit; returns true when Fahrenheit is now selected.
    pub fn toggle_unit(&mut self) -> bool {
        let next = !self.prefs.use_fahrenheit;
        self.set_fahrenheit(next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("p.json");

        let mut p = PreferencesStore::open(&path);
        assert!(!p.use_fahrenheit());
        assert!(p.toggle_unit());

        let reloaded = PreferencesStore::open(&path);
        assert_eq!(reloaded.get(), &UserPreferences { use_fahrenheit: true });
    }

    #[test]
    fn malformed_file_defaults_to_celsius() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("p.json");
        std::fs::write(&path, "[1,2,3]").unwrap();
        assert!(!PreferencesStore::open(&path).use_fahrenheit());
    }
}
