//! Weather search flow: validate, fetch, record history, report.

use crate::core::validation::validate_city;
use crate::errors::{AppError, AppResult};
use crate::models::weather::WeatherSnapshot;
use crate::service::WeatherProvider;
use crate::storage::favorites::FavoritesStore;
use crate::storage::history::HistoryStore;
use crate::storage::preferences::PreferencesStore;
use crate::storage::{FAVORITES_FILE, HISTORY_FILE, PREFERENCES_FILE};
use std::path::Path;

pub struct WeatherLogic {
    pub history: HistoryStore,
    pub favorites: FavoritesStore,
    pub prefs: PreferencesStore,
}

/// Everything needed to render one search result.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub snapshot: WeatherSnapshot,
    pub is_favorite: bool,
    pub use_fahrenheit: bool,
}

impl WeatherLogic {
    /// Read the three stores from `data_dir`. Unreadable files start empty.
    pub fn open(data_dir: &Path, history_limit: usize) -> Self {
        Self {
            history: HistoryStore::open(&data_dir.join(HISTORY_FILE), history_limit),
            favorites: FavoritesStore::open(&data_dir.join(FAVORITES_FILE)),
            prefs: PreferencesStore::open(&data_dir.join(PREFERENCES_FILE)),
        }
    }

    /// History is only touched when the provider answers.
    pub async fn search<P: WeatherProvider>(
        &mut self,
        provider: &P,
        city: &str,
    ) -> AppResult<SearchOutcome> {
        let city = validate_city(city)?;
        let snapshot = provider.fetch(&city).await?;

        self.history.add_or_promote(&snapshot.city);
        tracing::info!(city = %snapshot.city, "weather search succeeded");

        Ok(SearchOutcome {
            is_favorite: self.favorites.is_favorite(&snapshot.city),
            use_fahrenheit: self.prefs.use_fahrenheit(),
            snapshot,
        })
    }

    /// Search again for the most recent city.
    pub async fn refresh<P: WeatherProvider>(&mut self, provider: &P) -> AppResult<SearchOutcome> {
        let city = self.current_city()?;
        self.search(provider, &city).await
    }

    pub fn current_city(&self) -> AppResult<String> {
        self.history
            .current()
            .map(|item| item.city.clone())
            .ok_or(AppError::NoCurrentCity)
    }

    /// Toggle the most recent city; returns it with its new favorite state.
    pub fn toggle_current_favorite(&mut self) -> AppResult<(String, bool)> {
        let city = self.current_city()?;
        let now = self.favorites.toggle(&city);
        Ok((city, now))
    }
}
