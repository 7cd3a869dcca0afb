//! Location query value object

use serde::{Deserialize, Serialize};
use std::fmt;

use super::GeoLocation;
use crate::errors::DomainError;

/// What the user asked to look up: a free-text city or a coordinate pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LocationQuery {
    City { name: String },
    Coordinates { location: GeoLocation },
}

impl LocationQuery {
    /// Build a city query, trimming surrounding whitespace
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyCityName` if nothing is left after trimming.
    pub fn city(name: &str) -> Result<Self, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::EmptyCityName);
        }
        Ok(Self::City {
            name: name.to_string(),
        })
    }

    /// Build a coordinate query
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` for out-of-range values.
    pub fn coordinates(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        Ok(Self::Coordinates {
            location: GeoLocation::new(latitude, longitude)?,
        })
    }
}

impl From<GeoLocation> for LocationQuery {
    fn from(location: GeoLocation) -> Self {
        Self::Coordinates { location }
    }
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::City { name } => f.write_str(name),
            Self::Coordinates { location } => write!(f, "({location})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_is_trimmed() {
        let query = LocationQuery::city("  Miami ").expect("valid city");
        assert_eq!(
            query,
            LocationQuery::City {
                name: "Miami".to_string()
            }
        );
    }

    #[test]
    fn blank_city_rejected() {
        assert_eq!(LocationQuery::city("   "), Err(DomainError::EmptyCityName));
        assert_eq!(LocationQuery::city(""), Err(DomainError::EmptyCityName));
    }

    #[test]
    fn out_of_range_coordinates_rejected() {
        assert!(matches!(
            LocationQuery::coordinates(100.0, 0.0),
            Err(DomainError::InvalidCoordinates(_))
        ));
    }

    #[test]
    fn display() {
        let city = LocationQuery::city("Oslo").expect("valid city");
        assert_eq!(city.to_string(), "Oslo");

        let coords = LocationQuery::coordinates(25.77, -80.19).expect("valid coordinates");
        assert_eq!(coords.to_string(), "(25.7700, -80.1900)");
    }
}
