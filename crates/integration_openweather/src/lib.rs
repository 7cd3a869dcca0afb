//! OpenWeather integration
//!
//! Client for the OpenWeather Geocoding API 1.0 and One Call API 3.0
//! (<https://openweathermap.org/api>). Every request carries the
//! configured API key as the `appid` query parameter.

pub mod client;
mod models;

pub use client::{OpenWeatherApi, OpenWeatherClient, OpenWeatherConfig, OpenWeatherError};
pub use models::{
    AlertBlock, CurrentBlock, DailyBlock, DailyTemperature, GeocodingResult, HourlyBlock,
    OneCallResponse, WeatherDescription,
};
