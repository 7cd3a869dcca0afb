//! Geocoding port
//!
//! Forward (name to coordinates) and reverse (coordinates to name) lookups.

use async_trait::async_trait;
use domain::{GeoLocation, PlaceIdentity};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for geocoding operations
///
/// Results are ordered best match first. An empty vector is a valid
/// answer; callers decide whether that is an error.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Find places matching a free-text name
    async fn search(&self, city: &str, limit: u8) -> Result<Vec<PlaceIdentity>, ApplicationError>;

    /// Find named places at the given coordinates
    async fn reverse(
        &self,
        location: &GeoLocation,
        limit: u8,
    ) -> Result<Vec<PlaceIdentity>, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn GeocodingPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn GeocodingPort>();
    }
}
