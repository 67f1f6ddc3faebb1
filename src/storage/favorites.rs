use super::{load_or_default, persist};
use std::path::{Path, PathBuf};

/// Favorite cities in insertion order, unique ignoring case.
pub struct FavoritesStore {
    path: PathBuf,
    cities: Vec<String>,
}

impl FavoritesStore {
    pub fn open(path: &Path) -> Self {
        let mut store = Self {
            path: path.to_path_buf(),
            cities: load_or_default(path),
        };
        store.normalize();
        store
    }

    pub fn is_favorite(&self, city: &str) -> bool {
        let city = city.to_lowercase();
        self.cities.iter().any(|c| c.to_lowercase() == city)
    }

    /// Returns false when the city is already a favorite.
    pub fn add(&mut self, city: &str) -> bool {
        if self.is_favorite(city) {
            return false;
        }
        self.cities.push(city.to_string());
        persist(&self.path, &self.cities);
        true
    }

    /// Returns false (and writes nothing) when the city is not a favorite.
    pub fn remove(&mut self, city: &str) -> bool {
        let lower = city.to_lowercase();
        let before = self.cities.len();
        self.cities.retain(|c| c.to_lowercase() != lower);
        if self.cities.len() == before {
            return false;
        }
        persist(&self.path, &self.cities);
        true
    }

    /// Flip the favorite state of `city`; returns the new state.
    pub fn toggle(&mut self, city: &str) -> bool {
        if self.is_favorite(city) {
            self.remove(city);
            false
        } else {
            self.add(city);
            true
        }
    }

    pub fn list(&self) -> &[String] {
        &self.cities
    }

    // A hand-edited file may repeat a city in another case; the first wins.
    fn normalize(&mut self) {
        let mut seen: Vec<String> = Vec::new();
        self.cities.retain(|city| {
            let key = city.to_lowercase();
            if seen.contains(&key) {
                false
            } else {
                seen.push(key);
                true
            }
        });
    }
}
