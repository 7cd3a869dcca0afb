//! Resolved place identity

use serde::{Deserialize, Serialize};
use std::fmt;

use super::GeoLocation;

/// Canonical record of a geocoded place
///
/// Produced once per lookup by the resolver and never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceIdentity {
    display_name: String,
    country: String,
    region: Option<String>,
    location: GeoLocation,
}

impl PlaceIdentity {
    #[must_use]
    pub fn new(
        display_name: impl Into<String>,
        country: impl Into<String>,
        region: Option<String>,
        location: GeoLocation,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            country: country.into(),
            region: region.filter(|r| !r.trim().is_empty()),
            location,
        }
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// State or province, when the geocoder reports one
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    #[must_use]
    pub const fn location(&self) -> GeoLocation {
        self.location
    }

    /// Same place, pinned to different coordinates
    #[must_use]
    pub fn with_location(mut self, location: GeoLocation) -> Self {
        self.location = location;
        self
    }

    /// Label in the `name, state, country` form, omitting a missing state
    #[must_use]
    pub fn label(&self) -> String {
        match &self.region {
            Some(region) => format!("{}, {}, {}", self.display_name, region, self.country),
            None => format!("{}, {}", self.display_name, self.country),
        }
    }
}

impl fmt::Display for PlaceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
