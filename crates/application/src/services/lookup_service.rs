//! Weather lookup pipeline
//!
//! Resolve, fetch, present. Each run holds a [`LookupTicket`]; when a
//! newer run starts, the older one drops its result at the next stage
//! boundary, whether that result is a success or an error.

use std::{fmt, sync::Arc};

use chrono::{DateTime, Utc};
use domain::{LocationQuery, UnitSystem};
use tracing::{info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{GeocodingPort, WeatherPort},
    services::{
        location_resolver::LocationResolver,
        lookup_tracker::{LookupTicket, LookupTracker},
        presenter::Presenter,
        weather_fetcher::WeatherFetcher,
    },
    view_model::ViewModel,
};

/// Source of the reference time handed to the presenter
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Result of a lookup that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Completed(Box<ViewModel>),
    /// A newer lookup started before this one finished
    Superseded,
}

impl LookupOutcome {
    #[must_use]
    pub fn into_view(self) -> Option<ViewModel> {
        match self {
            Self::Completed(view) => Some(*view),
            Self::Superseded => None,
        }
    }
}

pub struct LookupService {
    resolver: LocationResolver,
    fetcher: WeatherFetcher,
    tracker: LookupTracker,
    clock: Clock,
}

impl fmt::Debug for LookupService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LookupService")
            .field("tracker", &self.tracker)
            .finish_non_exhaustive()
    }
}

impl LookupService {
    pub fn new(geocoding: Arc<dyn GeocodingPort>, weather: Arc<dyn WeatherPort>) -> Self {
        Self {
            resolver: LocationResolver::new(geocoding),
            fetcher: WeatherFetcher::new(weather),
            tracker: LookupTracker::new(),
            clock: Arc::new(Utc::now),
        }
    }

    /// Replace the wall clock, e.g. with a fixed instant
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Run the full pipeline for one query
    ///
    /// # Errors
    ///
    /// Returns the first stage error of a lookup that is still current.
    #[instrument(skip(self), fields(query = %query, units = %units))]
    pub async fn lookup(
        &self,
        query: &LocationQuery,
        units: UnitSystem,
    ) -> Result<LookupOutcome, ApplicationError> {
        let ticket = self.tracker.begin();
        info!(ticket = ticket.id(), "Starting weather lookup");

        let resolved = self.resolver.resolve(query).await;
        if !self.tracker.is_current(ticket) {
            return Ok(Self::discard(ticket, "resolve"));
        }
        let place = resolved?;

        let fetched = self.fetcher.fetch(&place.location(), units).await;
        if !self.tracker.is_current(ticket) {
            return Ok(Self::discard(ticket, "fetch"));
        }
        let snapshot = fetched?;

        let view = Presenter::new(units).present(&place, &snapshot, (self.clock)())?;
        info!(ticket = ticket.id(), place = %place, "Weather lookup completed");
        Ok(LookupOutcome::Completed(Box::new(view)))
    }

    fn discard(ticket: LookupTicket, stage: &str) -> LookupOutcome {
        warn!(ticket = ticket.id(), stage, "Discarding superseded lookup");
        LookupOutcome::Superseded
    }
}
