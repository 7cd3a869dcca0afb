//! Terminal rendering
//!
//! Text and JSON views of lookup results. Everything here formats values
//! that are already display-ready; no weather logic lives in this module.

use std::fmt;

use application::{ApplicationError, Suggestion, ViewModel};
use serde::Serialize;

/// Human-readable weather report
pub struct WeatherText<'a>(pub &'a ViewModel);

impl fmt::Display for WeatherText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        let unit = view.temperature_unit;

        write!(f, "{}", view.city_name)?;
        if let Some(region) = &view.region {
            write!(f, ", {region}")?;
        }
        writeln!(f, ", {}", view.country)?;
        writeln!(f, "{}", view.date_label)?;
        writeln!(f)?;
        writeln!(f, "{}  {}", view.icon, view.mood)?;
        writeln!(f, "{}{unit}  {}", view.current_temp, view.description)?;
        writeln!(
            f,
            "Feels like {}{unit} | High {}{unit} | Low {}{unit}",
            view.feels_like, view.temp_high, view.temp_low
        )?;
        writeln!(
            f,
            "Wind {} {} | Humidity {}% | Visibility {} {} | Pressure {} {}",
            view.wind_speed,
            view.wind_unit,
            view.humidity,
            view.visibility,
            view.visibility_unit,
            view.pressure,
            view.pressure_unit
        )?;

        if !view.hourly.is_empty() {
            writeln!(f)?;
            writeln!(f, "Hourly")?;
            for hour in &view.hourly {
                writeln!(
                    f,
                    "  {:<6} {}  {:>4}{unit}  {:>3}%",
                    hour.time_label, hour.icon, hour.temp, hour.precipitation_chance
                )?;
            }
        }

        if !view.daily.is_empty() {
            writeln!(f)?;
            writeln!(f, "Daily")?;
            for day in &view.daily {
                writeln!(
                    f,
                    "  {:<9} {}  {:>4}{unit} / {:>4}{unit}  {:>3}%",
                    day.day_label, day.icon, day.high, day.low, day.precipitation_chance
                )?;
            }
        }

        if let Some(alerts) = &view.alerts {
            writeln!(f)?;
            writeln!(f, "Alerts")?;
            for alert in alerts {
                write!(f, "  ⚠️  {}", alert.event)?;
                if let Some(sender) = &alert.sender {
                    write!(f, " ({sender})")?;
                }
                writeln!(f)?;
                writeln!(f, "     {} to {}", alert.starts, alert.ends)?;
                for line in alert.description.lines().filter(|l| !l.trim().is_empty()) {
                    writeln!(f, "     {}", line.trim())?;
                }
            }
        }

        Ok(())
    }
}

/// One suggestion per line, or a hint when there are none
pub struct SuggestionText<'a>(pub &'a [Suggestion]);

impl fmt::Display for SuggestionText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No suggestions");
        }
        for suggestion in self.0 {
            writeln!(f, "{}  ({})", suggestion.label, suggestion.location)?;
        }
        Ok(())
    }
}

/// Single-line error banner
#[must_use]
pub fn error_banner(error: &ApplicationError) -> String {
    format!("❌ {}", error.user_message())
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    kind: &'static str,
    message: String,
    retryable: bool,
}

#[derive(Debug, Serialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

/// Error as a JSON document for `--json` output
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn error_json(error: &ApplicationError) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ErrorEnvelope {
        error: ErrorBody {
            kind: error.kind(),
            message: error.user_message(),
            retryable: error.is_retryable(),
        },
    })
}

#[cfg(test)]
mod tests {
    use application::{AlertView, DailyView, HourlyView};
    use domain::GeoLocation;

    use super::*;

    fn view() -> ViewModel {
        ViewModel {
            city_name: "Miami".to_string(),
            country: "US".to_string(),
            region: Some("Florida".to_string()),
            date_label: "Today".to_string(),
            icon: "🌧️",
            mood: "Rainy Day!",
            description: "Light rain".to_string(),
            temperature_unit: "°C",
            current_temp: 30,
            feels_like: 34,
            temp_high: 31,
            temp_low: 25,
            wind_speed: 16,
            wind_unit: "km/h",
            humidity: 70,
            visibility: "10.0".to_string(),
            visibility_unit: "km",
            pressure: "1013".to_string(),
            pressure_unit: "hPa",
            hourly: vec![HourlyView {
                time_label: "2 PM".to_string(),
                icon: "🌧️",
                temp: 30,
                precipitation_chance: 40,
            }],
            daily: vec![DailyView {
                day_label: "Today".to_string(),
                icon: "🌧️",
                high: 31,
                low: 25,
                precipitation_chance: 60,
            }],
            alerts: None,
        }
    }

    #[test]
    fn weather_text_header() {
        let text = WeatherText(&view()).to_string();
        let mut lines = text.lines();

        assert_eq!(lines.next(), Some("Miami, Florida, US"));
        assert_eq!(lines.next(), Some("Today"));
        assert!(text.contains("30°C  Light rain"));
        assert!(text.contains("Feels like 34°C | High 31°C | Low 25°C"));
        assert!(text.contains(
            "Wind 16 km/h | Humidity 70% | Visibility 10.0 km | Pressure 1013 hPa"
        ));
    }

    #[test]
    fn weather_text_without_region() {
        let mut view = view();
        view.region = None;

        let text = WeatherText(&view).to_string();
        assert!(text.starts_with("Miami, US\n"));
    }

    #[test]
    fn weather_text_series() {
        let text = WeatherText(&view()).to_string();
        assert!(text.contains("Hourly\n  2 PM   🌧️    30°C   40%"));
        assert!(text.contains("Daily\n  Today     🌧️    31°C /   25°C   60%"));
        assert!(!text.contains("Alerts"));
    }

    #[test]
    fn weather_text_alerts() {
        let mut view = view();
        view.alerts = Some(vec![AlertView {
            sender: Some("NWS Miami".to_string()),
            event: "Heat Advisory".to_string(),
            description: "Heat index up to 108.\n\nStay hydrated.".to_string(),
            starts: "Today".to_string(),
            ends: "Tomorrow".to_string(),
        }]);

        let text = WeatherText(&view).to_string();
        assert!(text.contains("⚠️  Heat Advisory (NWS Miami)"));
        assert!(text.contains("     Today to Tomorrow\n"));
        assert!(text.contains("     Heat index up to 108.\n     Stay hydrated.\n"));
    }

    #[test]
    fn suggestion_text() {
        let list = vec![Suggestion {
            label: "Miami, Florida, US".to_string(),
            name: "Miami".to_string(),
            location: GeoLocation::new_unchecked(25.77, -80.19),
        }];

        assert_eq!(
            SuggestionText(&list).to_string(),
            "Miami, Florida, US  (25.7700, -80.1900)\n"
        );
        assert_eq!(SuggestionText(&[]).to_string(), "No suggestions\n");
    }

    #[test]
    fn banner_uses_user_message() {
        assert_eq!(
            error_banner(&ApplicationError::city_not_found()),
            "❌ City not found"
        );
    }

    #[test]
    fn error_json_shape() {
        let json = error_json(&ApplicationError::weather_fetch_failed()).expect("serializes");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["error"]["kind"], "fetch");
        assert_eq!(value["error"]["message"], "Failed to fetch weather data");
        assert_eq!(value["error"]["retryable"], true);
    }
}
