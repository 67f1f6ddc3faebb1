//! Presentation values derived from a weather snapshot. No state, no errors.

use crate::models::weather::WeatherSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    Night,
    Storm,
    Rain,
    Snow,
    Atmosphere,
    Clear,
    FewClouds,
    Cloudy,
    Default,
}

impl Background {
    pub fn for_condition(code: u32, icon: &str) -> Self {
        if icon.ends_with('n') {
            return Background::Night;
        }
        match code {
            200..=299 => Background::Storm,
            300..=599 => Background::Rain,
            600..=699 => Background::Snow,
            700..=799 => Background::Atmosphere,
            800 => Background::Clear,
            801 => Background::FewClouds,
            802..=804 => Background::Cloudy,
            _ => Background::Default,
        }
    }

    /// Dark tones are paired with light text.
    pub fn is_dark(&self) -> bool {
        matches!(
            self,
            Background::Night | Background::Storm | Background::Rain
        )
    }
}

/// Short advice, first match wins.
pub fn advisory(code: u32, temperature: f64, humidity: u32) -> &'static str {
    if (300..600).contains(&code) {
        "Don't forget your umbrella today! ☔"
    } else if (200..300).contains(&code) {
        "Stay indoors if possible. Thunderstorm warning! ⚡"
    } else if (600..700).contains(&code) {
        "Bundle up warm! Snow expected ❄️"
    } else if temperature > 30.0 {
        "Stay hydrated! It's hot out there! 💧"
    } else if temperature < 5.0 {
        "Dress warmly! It's quite cold today 🧥"
    } else if humidity > 80 {
        "High humidity today. Stay cool! 😌"
    } else if code == 800 {
        "Perfect weather for outdoor activities! ☀️"
    } else if (801..=804).contains(&code) {
        "Cloudy skies today. Bring a light jacket! ☁️"
    } else if (700..800).contains(&code) {
        "Visibility might be low. Drive safely! 🌫️"
    } else {
        "Have a great day! Stay weather-aware! 🌤️"
    }
}

pub fn snapshot_advisory(s: &WeatherSnapshot) -> &'static str {
    advisory(s.condition_code, s.temperature, s.humidity)
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

pub fn unit_symbol(use_fahrenheit: bool) -> &'static str {
    if use_fahrenheit { "°F" } else { "°C" }
}

/// Format a Celsius reading in the selected unit, one decimal.
pub fn format_temp(celsius: f64, use_fahrenheit: bool) -> String {
    let value = if use_fahrenheit {
        celsius_to_fahrenheit(celsius)
    } else {
        celsius
    };
    format!("{:.1}{}", value, unit_symbol(use_fahrenheit))
}

/// "light rain" -> "Light Rain"
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
