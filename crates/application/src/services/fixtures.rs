//! Shared test data: Miami on 2025-10-19, local offset UTC-4

#![allow(clippy::expect_used)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use domain::{GeoLocation, PlaceIdentity};

use crate::ports::{
    ConditionTag, CurrentConditions, DailyConditions, HourlyConditions, WeatherAlert,
    WeatherSnapshot,
};

pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("valid timestamp")
}

pub fn miami_location() -> GeoLocation {
    GeoLocation::new_unchecked(25.77, -80.19)
}

pub fn miami() -> PlaceIdentity {
    PlaceIdentity::new("Miami", "US", None, miami_location())
}

fn rain() -> ConditionTag {
    ConditionTag::new("Rain", "light rain")
}

fn clouds() -> ConditionTag {
    ConditionTag::new("Clouds", "scattered clouds")
}

/// Snapshot observed at 14:00 local with the given current temperature
pub fn snapshot(temperature: f64) -> WeatherSnapshot {
    let mut weather = with_series(30, 8);
    weather.current.temperature = temperature;
    weather.current.feels_like = temperature + 3.9;
    weather
}

/// Snapshot with `hours` hourly and `days` daily entries
pub fn with_series(hours: usize, days: usize) -> WeatherSnapshot {
    let start = at(2025, 10, 19, 18, 0);

    let hourly = (0..hours)
        .map(|i| HourlyConditions {
            time: start + Duration::hours(i64::try_from(i).expect("small index")),
            temperature: 29.0,
            precipitation_probability: if i == 0 { 0.4 } else { 0.1 },
            conditions: vec![if i == 0 { rain() } else { clouds() }],
        })
        .collect();

    let daily = (0..days)
        .map(|i| DailyConditions {
            time: at(2025, 10, 19, 16, 0) + Duration::days(i64::try_from(i).expect("small index")),
            temperature_max: if i == 0 { 31.4 } else { 30.0 },
            temperature_min: if i == 0 { 25.1 } else { 24.0 },
            precipitation_probability: if i == 0 { 0.6 } else { 0.2 },
            conditions: vec![if i == 0 { rain() } else { clouds() }],
        })
        .collect();

    WeatherSnapshot {
        timezone_offset_secs: -14_400,
        current: CurrentConditions {
            observed_at: start,
            temperature: 30.2,
            feels_like: 34.1,
            humidity: 70.0,
            pressure_hpa: 1013.0,
            visibility_m: Some(10_000.0),
            wind_speed: 4.5,
            conditions: vec![rain()],
        },
        hourly,
        daily,
        alerts: Some(vec![WeatherAlert {
            sender: Some("NWS Miami".to_string()),
            event: "Heat Advisory".to_string(),
            description: "Heat index values up to 108.".to_string(),
            starts: start,
            ends: at(2025, 10, 20, 18, 0),
        }]),
    }
}
