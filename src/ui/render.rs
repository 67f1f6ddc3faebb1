//! Views recomputed from store contents. Every function is pure and returns
//! the text to print.

use crate::core::display::{Background, format_temp, snapshot_advisory, title_case};
use crate::core::grades::{BarTier, GradeStats};
use crate::core::weather::SearchOutcome;
use crate::models::contact::Contact;
use crate::models::grade::{GradeEntry, GradeTier};
use crate::models::history::SearchHistoryItem;
use crate::utils::colors::{BLUE, GREEN, GREY, RED, RESET, YELLOW};
use crate::utils::table::{Column, Table};
use chrono::DateTime;

const BAR_WIDTH: usize = 20;

fn tier_color(tier: GradeTier) -> &'static str {
    match tier {
        GradeTier::Top => BLUE,
        GradeTier::Good => GREEN,
        GradeTier::Pass => YELLOW,
        GradeTier::Fail => RED,
    }
}

pub fn grade_rows(entries: &[GradeEntry]) -> String {
    let mut out = String::new();
    for (i, entry) in entries.iter().enumerate() {
        out.push_str(&format!(
            "{}#{:<3} ● {}{}\n",
            tier_color(entry.tier()),
            i + 1,
            entry,
            RESET
        ));
    }
    out
}

pub fn grade_stats(stats: Option<&GradeStats>) -> String {
    let Some(stats) = stats else {
        return format!("{GREY}No grades recorded{RESET}\n");
    };

    let color = match stats.bar_tier() {
        BarTier::Green => GREEN,
        BarTier::Orange => YELLOW,
        BarTier::Red => RED,
    };
    let filled = (stats.fill() * BAR_WIDTH as f64).round() as usize;

    format!(
        "{stats}\n{color}[{}{}]{RESET} {:.0}%\n",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled),
        stats.fill() * 100.0
    )
}

pub fn contact_cards(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return "No contacts found.\n".to_string();
    }

    let mut table = Table::new(vec![
        Column::new("ID"),
        Column::new("Name"),
        Column::new("📞 Phone"),
        Column::new("✉️ Email"),
    ]);
    for c in contacts {
        table.add_row(vec![
            c.id.to_string(),
            c.name.clone(),
            c.phone_or_na().to_string(),
            c.email_or_na().to_string(),
        ]);
    }
    table.render()
}

/// ANSI background for a weather tone, with light text on dark tones.
fn tone_style(bg: Background) -> String {
    let code = match bg {
        Background::Night => 44,
        Background::Storm => 100,
        Background::Rain => 104,
        Background::Snow => 107,
        Background::Atmosphere => 47,
        Background::Clear => 103,
        Background::FewClouds => 106,
        Background::Cloudy => 46,
        Background::Default => 104,
    };
    let fg = if bg.is_dark() { 97 } else { 30 };
    format!("\x1b[{code};{fg}m")
}

pub fn weather_card(outcome: &SearchOutcome) -> String {
    let s = &outcome.snapshot;
    let f = outcome.use_fahrenheit;
    let style = tone_style(Background::for_condition(s.condition_code, &s.icon));

    let place = if s.country.is_empty() {
        s.city.clone()
    } else {
        format!("{}, {}", s.city, s.country)
    };
    let star = if outcome.is_favorite { "★" } else { "☆" };

    let mut out = String::new();
    out.push_str(&format!("{style} 📍 {place} {star} {RESET}\n"));
    out.push_str(&format!("   {}\n", title_case(&s.description)));
    out.push_str(&format!(
        "   🌡️  {}  (feels like {})\n",
        format_temp(s.temperature, f),
        format_temp(s.feels_like, f)
    ));
    out.push_str(&format!(
        "   {RED}↑ {}{RESET}  {BLUE}↓ {}{RESET}\n",
        format_temp(s.temp_max, f),
        format_temp(s.temp_min, f)
    ));
    out.push_str(&format!(
        "   💧 Humidity: {}%   💨 Wind Speed: {} m/s\n",
        s.humidity, s.wind_speed
    ));
    out.push_str(&format!(
        "   🧭 Pressure: {} hPa   ☁️  Cloudiness: {}%\n",
        s.pressure, s.cloudiness
    ));
    out.push_str(&format!("{GREEN}💡 {}{RESET}\n", snapshot_advisory(s)));
    out
}

/// "Oct 18, 09:30 AM"; empty when the stored timestamp does not parse.
fn history_time(timestamp: &str) -> String {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.format("%b %d, %I:%M %p").to_string())
        .unwrap_or_default()
}

pub fn history_list(items: &[SearchHistoryItem]) -> String {
    if items.is_empty() {
        return "No recent searches.\n".to_string();
    }

    let mut out = String::from("🕘 Recent Searches\n");
    for (i, item) in items.iter().enumerate() {
        let when = history_time(&item.timestamp);
        if when.is_empty() {
            out.push_str(&format!("{:>2}. {}\n", i + 1, item.city));
        } else {
            out.push_str(&format!("{:>2}. {}  {GREY}{when}{RESET}\n", i + 1, item.city));
        }
    }
    out
}

pub fn favorites_list(cities: &[String]) -> String {
    if cities.is_empty() {
        return "No favorite cities.\n".to_string();
    }

    let mut out = String::from("⭐ Favorite Cities\n");
    for city in cities {
        out.push_str(&format!("  {YELLOW}★{RESET} {city}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grades::GradeBook;
    use crate::core::validation::validate_grade;
    use crate::models::weather::RawWeather;

    #[test]
    fn top_tier_row_is_blue() {
        let entry = validate_grade("Alice", Some("Math"), "95").unwrap();
        let out = grade_rows(std::slice::from_ref(&entry));
        assert!(out.starts_with(BLUE));
        assert!(out.contains("Math - Alice: 95"));
    }

    #[test]
    fn stats_view_for_empty_and_filled_book() {
        assert!(grade_stats(None).contains("No grades recorded"));

        let mut book = GradeBook::new();
        book.add(validate_grade("Alice", Some("Math"), "95").unwrap());
        let out = grade_stats(book.stats().as_ref());
        assert!(out.contains("Total Grades: 1 | Average: 95.0 | Highest: 95 | Lowest: 95"));
        assert!(out.contains("95%"));
    }

    #[test]
    fn contacts_render_na_for_missing_fields() {
        let out = contact_cards(&[Contact {
            id: 3,
            name: "Ada".into(),
            phone: None,
            email: Some("ada@x.io".into()),
        }]);
        assert!(out.contains("Ada"));
        assert!(out.contains("N/A"));
        assert!(out.contains("ada@x.io"));
        assert_eq!(contact_cards(&[]), "No contacts found.\n");
    }

    #[test]
    fn weather_card_uses_selected_unit() {
        let raw: RawWeather = serde_json::from_str(
            r#"{"name":"Cairo","sys":{"country":"EG"},"main":{"temp":35.0,"humidity":20},
                "weather":[{"id":800,"description":"clear sky","icon":"01d"}]}"#,
        )
        .unwrap();
        let outcome = SearchOutcome {
            snapshot: raw.into_snapshot("cairo"),
            is_favorite: true,
            use_fahrenheit: true,
        };

        let out = weather_card(&outcome);
        assert!(out.contains("Cairo, EG ★"));
        assert!(out.contains("95.0°F"));
        assert!(out.contains("Clear Sky"));
        assert!(out.contains("hydrated"));
    }

    #[test]
    fn history_shows_parsed_time_only_when_valid() {
        let items = vec![
            SearchHistoryItem {
                city: "London".into(),
                timestamp: "2026-10-18T09:30:00+00:00".into(),
            },
            SearchHistoryItem {
                city: "Paris".into(),
                timestamp: "garbage".into(),
            },
        ];
        let out = history_list(&items);
        assert!(out.contains("London"));
        assert!(out.contains("Oct 18, 09:30 AM"));
        assert!(out.contains(" 2. Paris\n"));
    }
}
