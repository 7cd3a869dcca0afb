//! Weather presenter
//!
//! Pure mapping from a resolved place and its weather snapshot to a
//! [`ViewModel`]. The reference time is an input so that equal inputs
//! always produce equal output.

use chrono::{DateTime, FixedOffset, NaiveDate, Timelike, Utc};
use domain::{PlaceIdentity, UnitSystem};

use crate::{
    error::ApplicationError,
    ports::{ConditionTag, WeatherAlert, WeatherSnapshot},
    services::condition_style::{is_daytime, style_for},
    view_model::{AlertView, DailyView, HourlyView, ViewModel},
};

/// Maximum number of hourly entries shown
pub const HOURLY_LIMIT: usize = 24;
/// Maximum number of daily entries shown
pub const DAILY_LIMIT: usize = 7;

/// Maps weather snapshots to view models for one unit system
#[derive(Debug, Clone, Copy)]
pub struct Presenter {
    units: UnitSystem,
}

impl Presenter {
    #[must_use]
    pub const fn new(units: UnitSystem) -> Self {
        Self { units }
    }

    #[must_use]
    pub const fn units(&self) -> UnitSystem {
        self.units
    }

    /// Build the view model
    ///
    /// `now` decides which dates are labelled "Today" and "Tomorrow"; it
    /// is shifted into the location's local time first.
    ///
    /// # Errors
    ///
    /// Returns `MalformedData` when a field needed for display is missing
    /// or not a finite number, or when the timezone offset is out of range.
    pub fn present(
        &self,
        identity: &PlaceIdentity,
        snapshot: &WeatherSnapshot,
        now: DateTime<Utc>,
    ) -> Result<ViewModel, ApplicationError> {
        let offset = FixedOffset::east_opt(snapshot.timezone_offset_secs).ok_or_else(|| {
            ApplicationError::malformed(format!(
                "Invalid timezone offset: {}s",
                snapshot.timezone_offset_secs
            ))
        })?;
        let today = now.with_timezone(&offset).date_naive();

        let current = &snapshot.current;
        let condition = primary_condition(&current.conditions, "current conditions")?;
        let style = style_for(&condition.category);
        let observed = current.observed_at.with_timezone(&offset);

        let today_forecast = snapshot
            .daily
            .first()
            .ok_or_else(|| ApplicationError::malformed("Missing daily forecast for today"))?;

        let visibility_m = current
            .visibility_m
            .ok_or_else(|| ApplicationError::malformed("Missing visibility"))?;
        let visibility = finite(self.units.display_visibility(visibility_m), "visibility")?;
        let pressure = finite(self.units.display_pressure(current.pressure_hpa), "pressure")?;
        let pressure = match self.units {
            UnitSystem::Metric => format!("{pressure:.0}"),
            UnitSystem::Imperial => format!("{pressure:.2}"),
        };

        let hourly = snapshot
            .hourly
            .iter()
            .take(HOURLY_LIMIT)
            .map(|hour| {
                let local = hour.time.with_timezone(&offset);
                let condition = primary_condition(&hour.conditions, "hourly forecast")?;
                Ok(HourlyView {
                    time_label: local.format("%-I %p").to_string(),
                    icon: style_for(&condition.category).icon(is_daytime(local.hour())),
                    temp: round_whole(hour.temperature, "hourly temperature")?,
                    precipitation_chance: percent(hour.precipitation_probability)?,
                })
            })
            .collect::<Result<Vec<_>, ApplicationError>>()?;

        let daily = snapshot
            .daily
            .iter()
            .take(DAILY_LIMIT)
            .map(|day| {
                let local = day.time.with_timezone(&offset);
                let condition = primary_condition(&day.conditions, "daily forecast")?;
                Ok(DailyView {
                    day_label: relative_label(local.date_naive(), today)
                        .map_or_else(|| local.format("%a").to_string(), str::to_string),
                    icon: style_for(&condition.category).day,
                    high: round_whole(day.temperature_max, "daily maximum")?,
                    low: round_whole(day.temperature_min, "daily minimum")?,
                    precipitation_chance: percent(day.precipitation_probability)?,
                })
            })
            .collect::<Result<Vec<_>, ApplicationError>>()?;

        let alerts = match &snapshot.alerts {
            Some(alerts) if !alerts.is_empty() => Some(
                alerts
                    .iter()
                    .map(|alert| present_alert(alert, offset, today))
                    .collect(),
            ),
            _ => None,
        };

        Ok(ViewModel {
            city_name: identity.display_name().to_string(),
            country: identity.country().to_string(),
            region: identity.region().map(str::to_string),
            date_label: full_date_label(observed, today),
            icon: style.icon(is_daytime(observed.hour())),
            mood: style.mood,
            description: capitalize_first(&condition.description),
            temperature_unit: self.units.temperature_label(),
            current_temp: round_whole(current.temperature, "temperature")?,
            feels_like: round_whole(current.feels_like, "feels-like temperature")?,
            temp_high: round_whole(today_forecast.temperature_max, "daily maximum")?,
            temp_low: round_whole(today_forecast.temperature_min, "daily minimum")?,
            wind_speed: round_whole(self.units.display_wind(current.wind_speed), "wind speed")?,
            wind_unit: self.units.wind_label(),
            humidity: round_whole(current.humidity, "humidity")?,
            visibility: format!("{visibility:.1}"),
            visibility_unit: self.units.visibility_label(),
            pressure,
            pressure_unit: self.units.pressure_label(),
            hourly,
            daily,
            alerts,
        })
    }
}

fn present_alert(alert: &WeatherAlert, offset: FixedOffset, today: NaiveDate) -> AlertView {
    AlertView {
        sender: alert.sender.clone(),
        event: alert.event.clone(),
        description: alert.description.clone(),
        starts: full_date_label(alert.starts.with_timezone(&offset), today),
        ends: full_date_label(alert.ends.with_timezone(&offset), today),
    }
}

fn primary_condition<'a>(
    conditions: &'a [ConditionTag],
    section: &str,
) -> Result<&'a ConditionTag, ApplicationError> {
    conditions
        .first()
        .ok_or_else(|| ApplicationError::malformed(format!("Missing condition in {section}")))
}

fn finite(value: f64, field: &str) -> Result<f64, ApplicationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ApplicationError::malformed(format!("Non-finite {field}")))
    }
}

/// Round half away from zero
#[allow(clippy::cast_possible_truncation)]
fn round_whole(value: f64, field: &str) -> Result<i64, ApplicationError> {
    finite(value, field).map(|v| v.round() as i64)
}

fn percent(probability: f64) -> Result<i64, ApplicationError> {
    round_whole(probability * 100.0, "precipitation probability")
}

fn relative_label(date: NaiveDate, today: NaiveDate) -> Option<&'static str> {
    if date == today {
        Some("Today")
    } else if today.succ_opt() == Some(date) {
        Some("Tomorrow")
    } else {
        None
    }
}

fn full_date_label(time: DateTime<FixedOffset>, today: NaiveDate) -> String {
    relative_label(time.date_naive(), today)
        .map_or_else(|| time.format("%a, %b %-d").to_string(), str::to_string)
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
