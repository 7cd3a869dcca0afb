//! Location resolver
//!
//! Turns a [`LocationQuery`] into a [`PlaceIdentity`] with a single
//! geocoding request. First match wins; nothing is cached or retried.

use std::{fmt, sync::Arc};

use domain::{LocationQuery, PlaceIdentity};
use tracing::{debug, instrument};

use crate::{error::ApplicationError, ports::GeocodingPort};

const RESOLVE_LIMIT: u8 = 1;

pub struct LocationResolver {
    geocoding: Arc<dyn GeocodingPort>,
}

impl fmt::Debug for LocationResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocationResolver").finish_non_exhaustive()
    }
}

impl LocationResolver {
    pub fn new(geocoding: Arc<dyn GeocodingPort>) -> Self {
        Self { geocoding }
    }

    /// Resolve a city name or coordinate pair
    ///
    /// Coordinate queries keep the requested coordinates and borrow only
    /// the names from the reverse match.
    ///
    /// # Errors
    ///
    /// `NotFound` when the geocoder has no match; adapter errors pass through.
    #[instrument(skip(self), fields(query = %query))]
    pub async fn resolve(&self, query: &LocationQuery) -> Result<PlaceIdentity, ApplicationError> {
        let place = match query {
            LocationQuery::City { name } => self
                .geocoding
                .search(name, RESOLVE_LIMIT)
                .await?
                .into_iter()
                .next()
                .ok_or_else(ApplicationError::city_not_found)?,
            LocationQuery::Coordinates { location } => self
                .geocoding
                .reverse(location, RESOLVE_LIMIT)
                .await?
                .into_iter()
                .next()
                .ok_or_else(ApplicationError::location_not_found)?
                .with_location(*location),
        };

        debug!(place = %place, location = %place.location(), "Resolved location");
        Ok(place)
    }
}
