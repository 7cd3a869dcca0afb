//! OpenWeather client
//!
//! HTTP client for the geocoding and One Call endpoints.

use async_trait::async_trait;
use domain::UnitSystem;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::{GeocodingResult, OneCallResponse};

/// OpenWeather client errors
#[derive(Debug, Error)]
pub enum OpenWeatherError {
    /// The HTTP client could not be built or the server could not be reached
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// No response within the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// The API key was missing or rejected
    #[error("Unauthorized: invalid or missing API key")]
    Unauthorized,

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Provider-side failure (5xx)
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Any other non-success status
    #[error("Request failed: HTTP {status}")]
    RequestFailed { status: u16 },

    /// Body did not match the expected shape
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,
}

impl OpenWeatherError {
    /// HTTP status that produced this error, if any
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::RateLimitExceeded => Some(429),
            Self::RequestFailed { status } => Some(*status),
            _ => None,
        }
    }

    /// True for errors raised before a response was received
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::ConnectionFailed(_) | Self::Timeout)
    }
}

/// OpenWeather service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct OpenWeatherConfig {
    /// API base URL (default: <https://api.openweathermap.org>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as `appid`; an empty key is sent as-is
    #[serde(default, skip_serializing)]
    pub api_key: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for OpenWeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherConfig")
            .field("base_url", &self.base_url)
            .field(
                "api_key",
                &if self.api_key.is_empty() {
                    None
                } else {
                    Some("[REDACTED]")
                },
            )
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://api.openweathermap.org".to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl Default for OpenWeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_secs: default_timeout(),
        }
    }
}

/// OpenWeather API operations used by the lookup pipeline
#[async_trait]
pub trait OpenWeatherApi: Send + Sync {
    /// Forward geocoding: place name to matches, best first
    async fn geocode_direct(
        &self,
        query: &str,
        limit: u8,
    ) -> Result<Vec<GeocodingResult>, OpenWeatherError>;

    /// Reverse geocoding: coordinates to nearby named places
    async fn geocode_reverse(
        &self,
        latitude: f64,
        longitude: f64,
        limit: u8,
    ) -> Result<Vec<GeocodingResult>, OpenWeatherError>;

    /// Current, hourly and daily conditions plus alerts
    async fn one_call(
        &self,
        latitude: f64,
        longitude: f64,
        units: UnitSystem,
    ) -> Result<OneCallResponse, OpenWeatherError>;
}

/// reqwest-backed OpenWeather client
#[derive(Debug)]
pub struct OpenWeatherClient {
    client: Client,
    config: OpenWeatherConfig,
}

impl OpenWeatherClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: OpenWeatherConfig) -> Result<Self, OpenWeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| OpenWeatherError::ConnectionFailed(e.to_string()))?;

        if config.api_key.is_empty() {
            warn!("OpenWeather API key is not configured; requests will be rejected");
        }

        Ok(Self { client, config })
    }

    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), OpenWeatherError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(OpenWeatherError::InvalidCoordinates);
        }
        Ok(())
    }

    fn map_status(status: StatusCode) -> Result<(), OpenWeatherError> {
        if status.is_success() {
            return Ok(());
        }
        Err(match status {
            StatusCode::UNAUTHORIZED => OpenWeatherError::Unauthorized,
            StatusCode::TOO_MANY_REQUESTS => OpenWeatherError::RateLimitExceeded,
            s if s.is_server_error() => OpenWeatherError::ServiceUnavailable(format!("HTTP {s}")),
            s => OpenWeatherError::RequestFailed {
                status: s.as_u16(),
            },
        })
    }

    fn map_transport(e: &reqwest::Error) -> OpenWeatherError {
        if e.is_timeout() {
            OpenWeatherError::Timeout
        } else {
            OpenWeatherError::ConnectionFailed(e.to_string())
        }
    }

    /// GET `{base_url}{path}` with `params` plus `appid`, decoding JSON
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, OpenWeatherError> {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);
        debug!(url = %url, params = ?params, "Calling OpenWeather");

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("appid", self.config.api_key.as_str())])
            .send()
            .await
            .map_err(|e| Self::map_transport(&e))?;

        Self::map_status(response.status())?;

        let body = response.text().await.map_err(|e| Self::map_transport(&e))?;
        serde_json::from_str(&body).map_err(|e| OpenWeatherError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl OpenWeatherApi for OpenWeatherClient {
    #[instrument(skip(self), fields(limit = %limit))]
    async fn geocode_direct(
        &self,
        query: &str,
        limit: u8,
    ) -> Result<Vec<GeocodingResult>, OpenWeatherError> {
        self.get_json(
            "/geo/1.0/direct",
            &[("q", query.to_string()), ("limit", limit.to_string())],
        )
        .await
    }

    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn geocode_reverse(
        &self,
        latitude: f64,
        longitude: f64,
        limit: u8,
    ) -> Result<Vec<GeocodingResult>, OpenWeatherError> {
        Self::validate_coordinates(latitude, longitude)?;
        self.get_json(
            "/geo/1.0/reverse",
            &[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("limit", limit.to_string()),
            ],
        )
        .await
    }

    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude, units = %units))]
    async fn one_call(
        &self,
        latitude: f64,
        longitude: f64,
        units: UnitSystem,
    ) -> Result<OneCallResponse, OpenWeatherError> {
        Self::validate_coordinates(latitude, longitude)?;
        self.get_json(
            "/data/3.0/onecall",
            &[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("units", units.api_param().to_string()),
            ],
        )
        .await
    }
}
