//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod device_position_port;
mod geocoding_port;
mod weather_port;

pub use device_position_port::DevicePositionPort;
#[cfg(test)]
pub use device_position_port::MockDevicePositionPort;
pub use geocoding_port::GeocodingPort;
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
#[cfg(test)]
pub use weather_port::MockWeatherPort;
pub use weather_port::{
    ConditionTag, CurrentConditions, DailyConditions, HourlyConditions, WeatherAlert,
    WeatherPort, WeatherSnapshot,
};
