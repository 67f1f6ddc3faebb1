//! Weather snapshot and the subset of the provider payload it is built from.

use serde::{Deserialize, Serialize};

/// Immutable, fully-populated weather data for one city.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherSnapshot {
    pub city: String,
    pub country: String,
    /// Degrees Celsius.
    pub temperature: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub condition_code: u32,
    pub description: String,
    /// Provider icon code; a trailing `n` marks night time.
    pub icon: String,
    pub humidity: u32,
    /// Metres per second.
    pub wind_speed: f64,
    /// Hectopascal.
    pub pressure: u32,
    pub cloudiness: u32,
}

impl WeatherSnapshot {
    pub fn is_night(&self) -> bool {
        self.icon.ends_with('n')
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RawWeather {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub sys: RawSys,
    #[serde(default)]
    pub main: RawMain,
    #[serde(default)]
    pub weather: Vec<RawCondition>,
    #[serde(default)]
    pub wind: RawWind,
    #[serde(default)]
    pub clouds: RawClouds,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawSys {
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawMain {
    #[serde(default)]
    pub temp: f64,
    #[serde(default)]
    pub feels_like: f64,
    #[serde(default)]
    pub temp_min: f64,
    #[serde(default)]
    pub temp_max: f64,
    #[serde(default)]
    pub humidity: u32,
    #[serde(default)]
    pub pressure: u32,
}

#[derive(Debug, Deserialize)]
pub struct RawCondition {
    #[serde(default = "default_condition_id")]
    pub id: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_icon")]
    pub icon: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawWind {
    #[serde(default)]
    pub speed: f64,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawClouds {
    #[serde(default)]
    pub all: u32,
}

fn default_condition_id() -> u32 {
    800
}
fn default_icon() -> String {
    "01d".to_string()
}

impl RawWeather {
    /// Build a snapshot, falling back to `requested_city` when the payload has no name.
    pub fn into_snapshot(self, requested_city: &str) -> WeatherSnapshot {
        let (condition_code, description, icon) = match self.weather.into_iter().next() {
            Some(c) => (c.id, c.description, c.icon),
            None => (default_condition_id(), String::new(), default_icon()),
        };

        WeatherSnapshot {
            city: self
                .name
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| requested_city.to_string()),
            country: self.sys.country,
            temperature: self.main.temp,
            feels_like: self.main.feels_like,
            temp_min: self.main.temp_min,
            temp_max: self.main.temp_max,
            condition_code,
            description,
            icon,
            humidity: self.main.humidity,
            wind_speed: self.wind.speed,
            pressure: self.main.pressure,
            cloudiness: self.clouds.all,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_payload_is_mapped() {
        let body = r#"{
            "name": "London",
            "sys": {"country": "GB"},
            "main": {"temp": 12.5, "feels_like": 11.0, "temp_min": 10.0,
                     "temp_max": 14.0, "humidity": 81, "pressure": 1012},
            "weather": [{"id": 500, "description": "light rain", "icon": "10n"}],
            "wind": {"speed": 4.1},
            "clouds": {"all": 75}
        }"#;
        let raw: RawWeather = serde_json::from_str(body).unwrap();
        let snap = raw.into_snapshot("london");

        assert_eq!(snap.city, "London");
        assert_eq!(snap.country, "GB");
        assert_eq!(snap.condition_code, 500);
        assert_eq!(snap.humidity, 81);
        assert_eq!(snap.cloudiness, 75);
        assert!(snap.is_night());
    }

    #[test]
    fn sparse_payload_uses_defaults() {
        let raw: RawWeather = serde_json::from_str("{}").unwrap();
        let snap = raw.into_snapshot("Nowhere");

        assert_eq!(snap.city, "Nowhere");
        assert_eq!(snap.temperature, 0.0);
        assert_eq!(snap.condition_code, 800);
        assert_eq!(snap.icon, "01d");
        assert!(!snap.is_night());
    }
}
