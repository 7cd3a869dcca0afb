//! OpenWeather wire models
//!
//! Raw response shapes as delivered by the provider. Unknown fields are
//! ignored; values are in the unit system requested with `units=`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One match from `/geo/1.0/direct` or `/geo/1.0/reverse`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodingResult {
    pub name: String,
    /// Localized names keyed by ISO 639 language code
    #[serde(default)]
    pub local_names: Option<HashMap<String, String>>,
    pub lat: f64,
    pub lon: f64,
    /// ISO 3166 country code
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub state: Option<String>,
}

/// Condition entry shared by current, hourly and daily blocks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherDescription {
    /// Condition code (2xx thunderstorm ... 8xx clouds)
    pub id: u32,
    /// Category, e.g. `Rain` or `Clouds`
    pub main: String,
    pub description: String,
    pub icon: String,
}

/// `/data/3.0/onecall` response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneCallResponse {
    pub lat: f64,
    pub lon: f64,
    /// IANA zone name, e.g. `America/New_York`
    pub timezone: String,
    /// Shift in seconds from UTC
    pub timezone_offset: i32,
    pub current: CurrentBlock,
    pub hourly: Vec<HourlyBlock>,
    pub daily: Vec<DailyBlock>,
    #[serde(default)]
    pub alerts: Option<Vec<AlertBlock>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentBlock {
    /// Unix timestamp (UTC)
    pub dt: i64,
    #[serde(default)]
    pub sunrise: Option<i64>,
    #[serde(default)]
    pub sunset: Option<i64>,
    pub temp: f64,
    pub feels_like: f64,
    /// Sea-level pressure in hPa
    pub pressure: f64,
    /// Relative humidity in percent
    pub humidity: f64,
    /// Meters; omitted by the provider for some stations
    #[serde(default)]
    pub visibility: Option<f64>,
    /// m/s for metric, mph for imperial
    pub wind_speed: f64,
    #[serde(default)]
    pub weather: Vec<WeatherDescription>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyBlock {
    pub dt: i64,
    pub temp: f64,
    /// Probability of precipitation, 0.0 to 1.0
    pub pop: f64,
    #[serde(default)]
    pub weather: Vec<WeatherDescription>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBlock {
    pub dt: i64,
    pub temp: DailyTemperature,
    pub pop: f64,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub weather: Vec<WeatherDescription>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyTemperature {
    pub min: f64,
    pub max: f64,
    #[serde(default)]
    pub day: Option<f64>,
    #[serde(default)]
    pub night: Option<f64>,
}

/// National weather alert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertBlock {
    #[serde(default)]
    pub sender_name: Option<String>,
    pub event: String,
    pub start: i64,
    pub end: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geocoding_result_without_state() {
        let json = r#"{"name":"Miami","lat":25.77,"lon":-80.19,"country":"US"}"#;
        let parsed: GeocodingResult = serde_json::from_str(json).expect("valid json");
        assert_eq!(parsed.name, "Miami");
        assert!(parsed.state.is_none());
        assert!(parsed.local_names.is_none());
    }

    #[test]
    fn geocoding_result_with_local_names() {
        let json = r#"{
            "name":"London",
            "local_names":{"en":"London","fr":"Londres"},
            "lat":51.5073,"lon":-0.1276,"country":"GB","state":"England"
        }"#;
        let parsed: GeocodingResult = serde_json::from_str(json).expect("valid json");
        assert_eq!(parsed.state.as_deref(), Some("England"));
        let names = parsed.local_names.expect("local names present");
        assert_eq!(names.get("fr").map(String::as_str), Some("Londres"));
    }

    #[test]
    fn current_block_without_visibility() {
        let json = r#"{
            "dt":1700000000,"temp":30.2,"feels_like":33.0,"pressure":1015,
            "humidity":70,"wind_speed":4.1,
            "weather":[{"id":800,"main":"Clear","description":"clear sky","icon":"01d"}]
        }"#;
        let parsed: CurrentBlock = serde_json::from_str(json).expect("valid json");
        assert!(parsed.visibility.is_none());
        assert_eq!(parsed.weather[0].main, "Clear");
    }

    #[test]
    fn one_call_without_alerts() {
        let json = r#"{
            "lat":25.77,"lon":-80.19,"timezone":"America/New_York","timezone_offset":-14400,
            "current":{"dt":1,"temp":1.0,"feels_like":1.0,"pressure":1000,"humidity":50,"wind_speed":1.0},
            "hourly":[{"dt":1,"temp":1.0,"pop":0.0}],
            "daily":[{"dt":1,"temp":{"min":0.0,"max":2.0},"pop":0.1}]
        }"#;
        let parsed: OneCallResponse = serde_json::from_str(json).expect("valid json");
        assert!(parsed.alerts.is_none());
        assert_eq!(parsed.hourly.len(), 1);
        assert_eq!(parsed.daily.len(), 1);
        assert_eq!(parsed.timezone_offset, -14_400);
    }

    #[test]
    fn missing_series_is_rejected() {
        let json = r#"{
            "lat":25.77,"lon":-80.19,"timezone":"UTC","timezone_offset":0,
            "current":{"dt":1,"temp":1.0,"feels_like":1.0,"pressure":1000,"humidity":50,"wind_speed":1.0},
            "daily":[]
        }"#;
        assert!(serde_json::from_str::<OneCallResponse>(json).is_err());
    }

    #[test]
    fn missing_precipitation_chance_is_rejected() {
        let hourly = r#"{"dt":1,"temp":1.0}"#;
        assert!(serde_json::from_str::<HourlyBlock>(hourly).is_err());

        let daily = r#"{"dt":1,"temp":{"min":0.0,"max":2.0}}"#;
        assert!(serde_json::from_str::<DailyBlock>(daily).is_err());
    }

    #[test]
    fn missing_current_is_rejected() {
        let json = r#"{"lat":0,"lon":0,"timezone":"UTC","timezone_offset":0}"#;
        assert!(serde_json::from_str::<OneCallResponse>(json).is_err());
    }
}
