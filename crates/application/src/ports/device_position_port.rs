//! Device position port

use async_trait::async_trait;
use domain::GeoLocation;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Source of the user's own position
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DevicePositionPort: Send + Sync {
    /// Current position, or `LocationUnavailable` when it cannot be determined
    async fn current_position(&self) -> Result<GeoLocation, ApplicationError>;
}
