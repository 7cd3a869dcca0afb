//! OpenWeather adapter - Implements GeocodingPort and WeatherPort using
//! integration_openweather

use std::sync::Arc;

use application::error::ApplicationError;
use application::error::{CITY_NOT_FOUND, LOCATION_NAME_FAILED};
use application::ports::{
    ConditionTag, CurrentConditions, DailyConditions, GeocodingPort, HourlyConditions,
    WeatherAlert, WeatherPort, WeatherSnapshot,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{DomainError, GeoLocation, InvalidCoordinates, PlaceIdentity, UnitSystem};
use integration_openweather::{
    AlertBlock, GeocodingResult, OneCallResponse, OpenWeatherApi, OpenWeatherClient,
    OpenWeatherConfig, OpenWeatherError, WeatherDescription,
};
use tracing::{debug, instrument, warn};

/// Adapter for geocoding and weather using the OpenWeather API
pub struct OpenWeatherAdapter {
    client: Arc<dyn OpenWeatherApi>,
}

impl std::fmt::Debug for OpenWeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherAdapter")
            .field("client", &"OpenWeatherApi")
            .finish()
    }
}

impl OpenWeatherAdapter {
    /// Create with the reqwest-backed client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: OpenWeatherConfig) -> Result<Self, ApplicationError> {
        let client = OpenWeatherClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Create around any `OpenWeatherApi` implementation
    pub fn with_client(client: Arc<dyn OpenWeatherApi>) -> Self {
        Self { client }
    }

    /// Map a geocoding failure; any rejected request counts as not found
    fn map_geocoding_error(err: OpenWeatherError, not_found: &str) -> ApplicationError {
        warn!(error = %err, status = ?err.status(), "Geocoding request failed");
        match err {
            OpenWeatherError::InvalidCoordinates => {
                ApplicationError::Domain(DomainError::InvalidCoordinates(InvalidCoordinates))
            },
            OpenWeatherError::ParseError(e) => {
                ApplicationError::MalformedData(format!("Unexpected geocoding response: {e}"))
            },
            e if e.is_transport() => {
                ApplicationError::Fetch("Failed to reach the geocoding service".to_string())
            },
            _ => ApplicationError::NotFound(not_found.to_string()),
        }
    }

    fn map_weather_error(err: OpenWeatherError) -> ApplicationError {
        warn!(error = %err, status = ?err.status(), "Weather request failed");
        match err {
            OpenWeatherError::InvalidCoordinates => {
                ApplicationError::Domain(DomainError::InvalidCoordinates(InvalidCoordinates))
            },
            OpenWeatherError::ParseError(e) => {
                ApplicationError::MalformedData(format!("Unexpected weather response: {e}"))
            },
            _ => ApplicationError::weather_fetch_failed(),
        }
    }

    fn map_place(result: GeocodingResult) -> Result<PlaceIdentity, ApplicationError> {
        let location = GeoLocation::new(result.lat, result.lon).map_err(|_| {
            ApplicationError::malformed(format!(
                "Geocoding returned invalid coordinates for {}",
                result.name
            ))
        })?;
        Ok(PlaceIdentity::new(
            result.name,
            result.country,
            result.state,
            location,
        ))
    }

    /// Invalid matches are dropped; fails only when every match is invalid
    fn map_places(results: Vec<GeocodingResult>) -> Result<Vec<PlaceIdentity>, ApplicationError> {
        let mut places = Vec::with_capacity(results.len());
        let mut first_error = None;
        for result in results {
            match Self::map_place(result) {
                Ok(place) => places.push(place),
                Err(e) => {
                    warn!(error = %e, "Skipping geocoding match");
                    first_error.get_or_insert(e);
                },
            }
        }
        match first_error {
            Some(e) if places.is_empty() => Err(e),
            _ => Ok(places),
        }
    }

    fn timestamp(seconds: i64, field: &str) -> Result<DateTime<Utc>, ApplicationError> {
        DateTime::from_timestamp(seconds, 0).ok_or_else(|| {
            ApplicationError::malformed(format!("Timestamp out of range in {field}: {seconds}"))
        })
    }

    fn map_conditions(weather: Vec<WeatherDescription>) -> Vec<ConditionTag> {
        weather
            .into_iter()
            .map(|w| ConditionTag::new(w.main, w.description))
            .collect()
    }

    fn map_alert(alert: AlertBlock) -> Result<WeatherAlert, ApplicationError> {
        Ok(WeatherAlert {
            starts: Self::timestamp(alert.start, "alert start")?,
            ends: Self::timestamp(alert.end, "alert end")?,
            sender: alert.sender_name,
            event: alert.event,
            description: alert.description,
        })
    }

    /// Convert the One Call response into a provider-neutral snapshot
    fn map_snapshot(raw: OneCallResponse) -> Result<WeatherSnapshot, ApplicationError> {
        let current = CurrentConditions {
            observed_at: Self::timestamp(raw.current.dt, "current")?,
            temperature: raw.current.temp,
            feels_like: raw.current.feels_like,
            humidity: raw.current.humidity,
            pressure_hpa: raw.current.pressure,
            visibility_m: raw.current.visibility,
            wind_speed: raw.current.wind_speed,
            conditions: Self::map_conditions(raw.current.weather),
        };

        let hourly = raw
            .hourly
            .into_iter()
            .map(|hour| {
                Ok(HourlyConditions {
                    time: Self::timestamp(hour.dt, "hourly")?,
                    temperature: hour.temp,
                    precipitation_probability: hour.pop,
                    conditions: Self::map_conditions(hour.weather),
                })
            })
            .collect::<Result<Vec<_>, ApplicationError>>()?;

        let daily = raw
            .daily
            .into_iter()
            .map(|day| {
                Ok(DailyConditions {
                    time: Self::timestamp(day.dt, "daily")?,
                    temperature_max: day.temp.max,
                    temperature_min: day.temp.min,
                    precipitation_probability: day.pop,
                    conditions: Self::map_conditions(day.weather),
                })
            })
            .collect::<Result<Vec<_>, ApplicationError>>()?;

        let alerts = raw
            .alerts
            .map(|alerts| alerts.into_iter().map(Self::map_alert).collect())
            .transpose()?;

        Ok(WeatherSnapshot {
            timezone_offset_secs: raw.timezone_offset,
            current,
            hourly,
            daily,
            alerts,
        })
    }
}

#[async_trait]
impl GeocodingPort for OpenWeatherAdapter {
    #[instrument(skip(self))]
    async fn search(&self, city: &str, limit: u8) -> Result<Vec<PlaceIdentity>, ApplicationError> {
        let results = self
            .client
            .geocode_direct(city, limit)
            .await
            .map_err(|e| Self::map_geocoding_error(e, CITY_NOT_FOUND))?;
        debug!(matches = results.len(), "Geocoded city");
        Self::map_places(results)
    }

    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn reverse(
        &self,
        location: &GeoLocation,
        limit: u8,
    ) -> Result<Vec<PlaceIdentity>, ApplicationError> {
        let results = self
            .client
            .geocode_reverse(location.latitude(), location.longitude(), limit)
            .await
            .map_err(|e| Self::map_geocoding_error(e, LOCATION_NAME_FAILED))?;
        debug!(matches = results.len(), "Reverse geocoded coordinates");
        Self::map_places(results)
    }
}

#[async_trait]
impl WeatherPort for OpenWeatherAdapter {
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude(), units = %units))]
    async fn fetch_weather(
        &self,
        location: &GeoLocation,
        units: UnitSystem,
    ) -> Result<WeatherSnapshot, ApplicationError> {
        let raw = self
            .client
            .one_call(location.latitude(), location.longitude(), units)
            .await
            .map_err(Self::map_weather_error)?;
        debug!(timezone = %raw.timezone, "Retrieved One Call response");
        Self::map_snapshot(raw)
    }
}
