//! Weather fetcher
//!
//! Single request for a resolved location; any failure aborts the lookup.

use std::{fmt, sync::Arc};

use domain::{GeoLocation, UnitSystem};
use tracing::{debug, instrument};

use crate::{
    error::ApplicationError,
    ports::{WeatherPort, WeatherSnapshot},
};

pub struct WeatherFetcher {
    weather: Arc<dyn WeatherPort>,
}

impl fmt::Debug for WeatherFetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherFetcher").finish_non_exhaustive()
    }
}

impl WeatherFetcher {
    pub fn new(weather: Arc<dyn WeatherPort>) -> Self {
        Self { weather }
    }

    /// Fetch the weather snapshot for a location
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude(), units = %units))]
    pub async fn fetch(
        &self,
        location: &GeoLocation,
        units: UnitSystem,
    ) -> Result<WeatherSnapshot, ApplicationError> {
        let snapshot = self.weather.fetch_weather(location, units).await?;
        debug!(
            hourly = snapshot.hourly.len(),
            daily = snapshot.daily.len(),
            alerts = snapshot.alerts.as_ref().map_or(0, Vec::len),
            "Fetched weather"
        );
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockWeatherPort;
    use crate::services::fixtures::{miami_location, snapshot};

    #[tokio::test]
    async fn passes_units_through() {
        let mut weather = MockWeatherPort::new();
        weather
            .expect_fetch_weather()
            .withf(|location, units| *location == miami_location() && *units == UnitSystem::Imperial)
            .times(1)
            .returning(|_, _| Ok(snapshot(86.0)));

        let fetcher = WeatherFetcher::new(Arc::new(weather));
        let result = fetcher.fetch(&miami_location(), UnitSystem::Imperial).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn failure_is_returned() {
        let mut weather = MockWeatherPort::new();
        weather
            .expect_fetch_weather()
            .returning(|_, _| Err(ApplicationError::weather_fetch_failed()));

        let fetcher = WeatherFetcher::new(Arc::new(weather));
        let result = fetcher.fetch(&miami_location(), UnitSystem::Metric).await;

        assert_eq!(result, Err(ApplicationError::weather_fetch_failed()));
    }
}
