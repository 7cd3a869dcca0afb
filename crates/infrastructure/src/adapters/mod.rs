//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod configured_position_adapter;
mod openweather_adapter;

pub use configured_position_adapter::ConfiguredPositionAdapter;
pub use openweather_adapter::OpenWeatherAdapter;
