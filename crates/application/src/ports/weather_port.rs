//! Weather service port
//!
//! Defines the provider-neutral weather snapshot and the interface for
//! retrieving it.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{GeoLocation, UnitSystem};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Provider condition category with its free-text description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionTag {
    /// Category such as `Rain` or `Clouds`; matched case-insensitively
    pub category: String,
    pub description: String,
}

impl ConditionTag {
    pub fn new(category: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            description: description.into(),
        }
    }
}

/// Current weather conditions
///
/// Temperatures and wind speed are in the unit system of the request:
/// °C and m/s for metric, °F and mph for imperial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub observed_at: DateTime<Utc>,
    pub temperature: f64,
    pub feels_like: f64,
    /// Relative humidity in percent (0-100)
    pub humidity: f64,
    pub pressure_hpa: f64,
    pub visibility_m: Option<f64>,
    pub wind_speed: f64,
    /// Most significant condition first
    pub conditions: Vec<ConditionTag>,
}

/// One entry of the hourly series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyConditions {
    pub time: DateTime<Utc>,
    pub temperature: f64,
    /// Probability of precipitation (0.0-1.0)
    pub precipitation_probability: f64,
    pub conditions: Vec<ConditionTag>,
}

/// One entry of the daily series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyConditions {
    pub time: DateTime<Utc>,
    pub temperature_max: f64,
    pub temperature_min: f64,
    pub precipitation_probability: f64,
    pub conditions: Vec<ConditionTag>,
}

/// Weather advisory issued for the location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherAlert {
    pub sender: Option<String>,
    pub event: String,
    pub description: String,
    pub starts: DateTime<Utc>,
    pub ends: DateTime<Utc>,
}

/// Everything fetched for one location in one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Offset of the location's local time from UTC, in seconds
    pub timezone_offset_secs: i32,
    pub current: CurrentConditions,
    /// Chronological
    pub hourly: Vec<HourlyConditions>,
    /// Chronological, starting with today
    pub daily: Vec<DailyConditions>,
    pub alerts: Option<Vec<WeatherAlert>>,
}

/// Port for weather service operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Fetch current, hourly and daily conditions plus alerts
    async fn fetch_weather(
        &self,
        location: &GeoLocation,
        units: UnitSystem,
    ) -> Result<WeatherSnapshot, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn WeatherPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn WeatherPort>();
    }

    #[test]
    fn condition_tag_new() {
        let tag = ConditionTag::new("Rain", "light rain");
        assert_eq!(tag.category, "Rain");
        assert_eq!(tag.description, "light rain");
    }
}
