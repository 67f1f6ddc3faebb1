use serde::{Deserialize, Serialize};

/// Persisted user preferences for the weather tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    #[serde(default)]
    pub use_fahrenheit: bool,
}
