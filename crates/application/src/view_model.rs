//! Display-ready view model
//!
//! Flat structure of strings and integers produced by the presenter.
//! Renderers print it without further computation.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewModel {
    pub city_name: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// "Today", "Tomorrow" or e.g. "Mon, Oct 19"
    pub date_label: String,
    pub icon: &'static str,
    pub mood: &'static str,
    pub description: String,
    pub temperature_unit: &'static str,
    pub current_temp: i64,
    pub feels_like: i64,
    pub temp_high: i64,
    pub temp_low: i64,
    pub wind_speed: i64,
    pub wind_unit: &'static str,
    /// Percent
    pub humidity: i64,
    pub visibility: String,
    pub visibility_unit: &'static str,
    pub pressure: String,
    pub pressure_unit: &'static str,
    pub hourly: Vec<HourlyView>,
    pub daily: Vec<DailyView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alerts: Option<Vec<AlertView>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourlyView {
    /// e.g. "2 PM"
    pub time_label: String,
    pub icon: &'static str,
    pub temp: i64,
    /// Percent
    pub precipitation_chance: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyView {
    /// "Today", "Tomorrow" or a short weekday
    pub day_label: String,
    pub icon: &'static str,
    pub high: i64,
    pub low: i64,
    pub precipitation_chance: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
    pub event: String,
    pub description: String,
    pub starts: String,
    pub ends: String,
}
