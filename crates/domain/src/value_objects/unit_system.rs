//! Measurement unit system and conversion formulas
//!
//! The provider already reports temperatures and wind speed in the
//! requested system (°C and m/s for metric, °F and mph for imperial).
//! Pressure always arrives in hPa and visibility in meters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

const KMH_PER_MPS: f64 = 3.6;
const INHG_PER_HPA: f64 = 0.02953;
const METERS_PER_KM: f64 = 1000.0;
const METERS_PER_MILE: f64 = 1609.34;

/// Metric or imperial measurement convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    /// Value of the provider's `units` query parameter
    #[must_use]
    pub const fn api_param(self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }

    #[must_use]
    pub const fn temperature_label(self) -> &'static str {
        match self {
            Self::Metric => "°C",
            Self::Imperial => "°F",
        }
    }

    #[must_use]
    pub const fn wind_label(self) -> &'static str {
        match self {
            Self::Metric => "km/h",
            Self::Imperial => "mph",
        }
    }

    #[must_use]
    pub const fn pressure_label(self) -> &'static str {
        match self {
            Self::Metric => "hPa",
            Self::Imperial => "inHg",
        }
    }

    #[must_use]
    pub const fn visibility_label(self) -> &'static str {
        match self {
            Self::Metric => "km",
            Self::Imperial => "mi",
        }
    }

    /// Wind speed as displayed, from the provider's value in this system
    #[must_use]
    pub fn display_wind(self, speed: f64) -> f64 {
        match self {
            Self::Metric => mps_to_kmh(speed),
            Self::Imperial => speed,
        }
    }

    #[must_use]
    pub fn display_pressure(self, hpa: f64) -> f64 {
        match self {
            Self::Metric => hpa,
            Self::Imperial => hpa_to_inhg(hpa),
        }
    }

    #[must_use]
    pub fn display_visibility(self, meters: f64) -> f64 {
        match self {
            Self::Metric => meters_to_km(meters),
            Self::Imperial => meters_to_miles(meters),
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.api_param())
    }
}

impl FromStr for UnitSystem {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" => Ok(Self::Metric),
            "imperial" => Ok(Self::Imperial),
            _ => Err(DomainError::UnknownUnitSystem(s.to_string())),
        }
    }
}

#[must_use]
pub fn mps_to_kmh(mps: f64) -> f64 {
    mps * KMH_PER_MPS
}

#[must_use]
pub fn hpa_to_inhg(hpa: f64) -> f64 {
    hpa * INHG_PER_HPA
}

/// Inverse of [`hpa_to_inhg`]
#[must_use]
pub fn inhg_to_hpa(inhg: f64) -> f64 {
    inhg / INHG_PER_HPA
}

#[must_use]
pub fn meters_to_km(meters: f64) -> f64 {
    meters / METERS_PER_KM
}

#[must_use]
pub fn meters_to_miles(meters: f64) -> f64 {
    meters / METERS_PER_MILE
}
