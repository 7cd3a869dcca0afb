//! Application-level errors

use domain::DomainError;
use thiserror::Error;

pub const CITY_NOT_FOUND: &str = "City not found";
pub const LOCATION_NOT_FOUND: &str = "Location not found";
pub const LOCATION_NAME_FAILED: &str = "Failed to get location name";
pub const WEATHER_FETCH_FAILED: &str = "Failed to fetch weather data";
pub const DEVICE_LOCATION_FAILED: &str = "Can't find your location! Try searching for a city";

/// Errors that can occur in the application layer
///
/// `NotFound`, `Fetch` and `MalformedData` display their message verbatim
/// so it can be shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Geocoding returned no match or a non-success status
    #[error("{0}")]
    NotFound(String),

    /// Weather request failed, including transport failures
    #[error("{0}")]
    Fetch(String),

    /// Response is missing a field the presenter needs
    #[error("{0}")]
    MalformedData(String),

    /// Device position cannot be determined
    #[error("{0}")]
    LocationUnavailable(String),

    /// Retry requested before any lookup was made
    #[error("Nothing to retry: no lookup has been made yet")]
    NothingToRetry,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    #[must_use]
    pub fn city_not_found() -> Self {
        Self::NotFound(CITY_NOT_FOUND.to_string())
    }

    #[must_use]
    pub fn location_not_found() -> Self {
        Self::NotFound(LOCATION_NOT_FOUND.to_string())
    }

    #[must_use]
    pub fn weather_fetch_failed() -> Self {
        Self::Fetch(WEATHER_FETCH_FAILED.to_string())
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedData(message.into())
    }

    /// Text for the error banner
    #[must_use]
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Stable machine-readable kind, used in JSON output
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Domain(_) => "invalid_input",
            Self::NotFound(_) => "not_found",
            Self::Fetch(_) => "fetch",
            Self::MalformedData(_) => "malformed_data",
            Self::LocationUnavailable(_) => "location_unavailable",
            Self::NothingToRetry => "nothing_to_retry",
            Self::Configuration(_) => "configuration",
        }
    }

    /// Check whether re-running the same lookup could succeed
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_)
                | Self::Fetch(_)
                | Self::MalformedData(_)
                | Self::LocationUnavailable(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_not_found_message() {
        let err = ApplicationError::city_not_found();
        assert_eq!(err.user_message(), "City not found");
        assert_eq!(err.kind(), "not_found");
    }

    #[test]
    fn weather_fetch_failed_message() {
        assert_eq!(
            ApplicationError::weather_fetch_failed().to_string(),
            "Failed to fetch weather data"
        );
    }

    #[test]
    fn domain_errors_are_transparent() {
        let err = ApplicationError::from(DomainError::EmptyCityName);
        assert_eq!(err.to_string(), "City name must not be empty");
        assert!(!err.is_retryable());
    }

    #[test]
    fn retryable_errors() {
        assert!(ApplicationError::city_not_found().is_retryable());
        assert!(ApplicationError::weather_fetch_failed().is_retryable());
        assert!(ApplicationError::malformed("x").is_retryable());
        assert!(!ApplicationError::NothingToRetry.is_retryable());
        assert!(!ApplicationError::Configuration("x".to_string()).is_retryable());
    }
}
