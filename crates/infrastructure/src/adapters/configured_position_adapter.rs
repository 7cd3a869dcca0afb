//! Device position from configuration
//!
//! A terminal has no location sensor, so the "device" position is the
//! `default_location` configured for the weather section.

use application::error::ApplicationError;
use application::ports::DevicePositionPort;
use async_trait::async_trait;
use domain::GeoLocation;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct ConfiguredPositionAdapter {
    position: Option<GeoLocation>,
}

impl ConfiguredPositionAdapter {
    #[must_use]
    pub const fn new(position: Option<GeoLocation>) -> Self {
        Self { position }
    }
}

#[async_trait]
impl DevicePositionPort for ConfiguredPositionAdapter {
    async fn current_position(&self) -> Result<GeoLocation, ApplicationError> {
        debug!(configured = self.position.is_some(), "Reading configured position");
        self.position.ok_or_else(|| {
            ApplicationError::LocationUnavailable("No default location configured".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_configured_position() {
        let position = GeoLocation::new_unchecked(25.77, -80.19);
        let adapter = ConfiguredPositionAdapter::new(Some(position));
        assert_eq!(adapter.current_position().await, Ok(position));
    }

    #[tokio::test]
    async fn unavailable_without_configuration() {
        let adapter = ConfiguredPositionAdapter::default();
        assert!(matches!(
            adapter.current_position().await,
            Err(ApplicationError::LocationUnavailable(_))
        ));
    }
}
