//! Caller-owned lookup session
//!
//! Holds the chosen unit system and the last requested query so that a
//! failed lookup can be retried. Nothing here is global; each front end
//! owns its own session.

use domain::{LocationQuery, UnitSystem};
use tracing::{info, instrument, warn};

use crate::{
    error::{ApplicationError, DEVICE_LOCATION_FAILED},
    ports::DevicePositionPort,
    services::{LookupOutcome, LookupService},
};

#[derive(Debug, Clone)]
pub struct Session {
    units: UnitSystem,
    default_city: String,
    last_query: Option<LocationQuery>,
}

impl Session {
    /// `default_city` is looked up when the device position is unknown at start
    pub fn new(units: UnitSystem, default_city: impl Into<String>) -> Self {
        Self {
            units,
            default_city: default_city.into(),
            last_query: None,
        }
    }

    #[must_use]
    pub const fn units(&self) -> UnitSystem {
        self.units
    }

    pub fn set_units(&mut self, units: UnitSystem) {
        self.units = units;
    }

    #[must_use]
    pub const fn last_query(&self) -> Option<&LocationQuery> {
        self.last_query.as_ref()
    }

    /// Look up weather for a city name
    ///
    /// # Errors
    ///
    /// Blank names fail before any request; pipeline errors pass through.
    pub async fn search(
        &mut self,
        service: &LookupService,
        city: &str,
    ) -> Result<LookupOutcome, ApplicationError> {
        let query = LocationQuery::city(city)?;
        self.run(service, query).await
    }

    /// Look up weather for explicit coordinates
    pub async fn locate(
        &mut self,
        service: &LookupService,
        latitude: f64,
        longitude: f64,
    ) -> Result<LookupOutcome, ApplicationError> {
        let query = LocationQuery::coordinates(latitude, longitude)?;
        self.run(service, query).await
    }

    /// Initial lookup: the device position, or the default city if that
    /// position is unavailable
    #[instrument(skip(self, service, device))]
    pub async fn start(
        &mut self,
        service: &LookupService,
        device: &dyn DevicePositionPort,
    ) -> Result<LookupOutcome, ApplicationError> {
        let query = match device.current_position().await {
            Ok(position) => LocationQuery::from(position),
            Err(e) => {
                warn!(
                    error = %e,
                    default_city = %self.default_city,
                    "Device position unavailable, using default city"
                );
                LocationQuery::city(&self.default_city)?
            },
        };
        self.run(service, query).await
    }

    /// Explicit "use my location" request; failure is reported, not replaced
    ///
    /// # Errors
    ///
    /// `LocationUnavailable` when the device position cannot be determined.
    pub async fn locate_me(
        &mut self,
        service: &LookupService,
        device: &dyn DevicePositionPort,
    ) -> Result<LookupOutcome, ApplicationError> {
        let position = device.current_position().await.map_err(|e| {
            warn!(error = %e, "Device position unavailable");
            ApplicationError::LocationUnavailable(DEVICE_LOCATION_FAILED.to_string())
        })?;
        self.run(service, LocationQuery::from(position)).await
    }

    /// Re-run the last requested query from scratch
    ///
    /// # Errors
    ///
    /// `NothingToRetry` if no query has been requested yet.
    pub async fn retry(
        &mut self,
        service: &LookupService,
    ) -> Result<LookupOutcome, ApplicationError> {
        let query = self
            .last_query
            .clone()
            .ok_or(ApplicationError::NothingToRetry)?;
        info!(query = %query, "Retrying last lookup");
        self.run(service, query).await
    }

    async fn run(
        &mut self,
        service: &LookupService,
        query: LocationQuery,
    ) -> Result<LookupOutcome, ApplicationError> {
        let outcome = service.lookup(&query, self.units).await;
        self.last_query = Some(query);
        outcome
    }
}
