//! City suggestions while typing
//!
//! Requests are debounced: each call waits for the debounce window and
//! gives up if another call arrived meanwhile. Failures never reach the
//! caller; they are logged and yield an empty list.

use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

use domain::GeoLocation;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::ports::GeocodingPort;

/// Debounce and size limits for suggestions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionSettings {
    pub debounce: Duration,
    /// Shorter queries produce no request
    pub min_query_len: usize,
    pub limit: u8,
}

impl Default for SuggestionSettings {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(300),
            min_query_len: 2,
            limit: 5,
        }
    }
}

/// One entry of the suggestion list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    /// `name, state, country`
    pub label: String,
    /// Plain city name, used as the follow-up search query
    pub name: String,
    pub location: GeoLocation,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionOutcome {
    Ready(Vec<Suggestion>),
    /// A newer request arrived within the debounce window
    Superseded,
}

pub struct SuggestionService {
    geocoding: Arc<dyn GeocodingPort>,
    settings: SuggestionSettings,
    generation: AtomicU64,
}

impl fmt::Debug for SuggestionService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuggestionService")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl SuggestionService {
    pub fn new(geocoding: Arc<dyn GeocodingPort>, settings: SuggestionSettings) -> Self {
        Self {
            geocoding,
            settings,
            generation: AtomicU64::new(0),
        }
    }

    fn is_latest(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    /// Suggest places for partially typed text
    #[instrument(skip(self))]
    pub async fn suggest(&self, text: &str) -> SuggestionOutcome {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let query = text.trim();
        if query.chars().count() < self.settings.min_query_len {
            return SuggestionOutcome::Ready(Vec::new());
        }

        tokio::time::sleep(self.settings.debounce).await;
        if !self.is_latest(generation) {
            debug!(generation, "Suggestion request superseded");
            return SuggestionOutcome::Superseded;
        }

        let places = match self.geocoding.search(query, self.settings.limit).await {
            Ok(places) => places,
            Err(e) => {
                warn!(error = %e, "Failed to get suggestions");
                return SuggestionOutcome::Ready(Vec::new());
            },
        };
        if !self.is_latest(generation) {
            return SuggestionOutcome::Superseded;
        }

        SuggestionOutcome::Ready(
            places
                .into_iter()
                .map(|place| Suggestion {
                    label: place.label(),
                    name: place.display_name().to_string(),
                    location: place.location(),
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use domain::PlaceIdentity;

    use super::*;
    use crate::error::ApplicationError;
    use crate::ports::MockGeocodingPort;
    use crate::services::fixtures::miami_location;

    fn places() -> Vec<PlaceIdentity> {
        vec![
            PlaceIdentity::new("Miami", "US", Some("Florida".to_string()), miami_location()),
            PlaceIdentity::new("Miami Beach", "US", None, miami_location()),
        ]
    }

    #[tokio::test(start_paused = true)]
    async fn labels_include_state_when_present() {
        let mut geocoding = MockGeocodingPort::new();
        geocoding
            .expect_search()
            .withf(|city, limit| city == "Mia" && *limit == 5)
            .times(1)
            .returning(|_, _| Ok(places()));

        let service = SuggestionService::new(Arc::new(geocoding), SuggestionSettings::default());
        let SuggestionOutcome::Ready(list) = service.suggest("Mia").await else {
            unreachable!("single request cannot be superseded");
        };

        let labels: Vec<_> = list.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["Miami, Florida, US", "Miami Beach, US"]);
        assert_eq!(list[1].name, "Miami Beach");
    }

    #[tokio::test(start_paused = true)]
    async fn short_query_makes_no_request() {
        let mut geocoding = MockGeocodingPort::new();
        geocoding.expect_search().times(0);

        let service = SuggestionService::new(Arc::new(geocoding), SuggestionSettings::default());

        assert_eq!(service.suggest("M").await, SuggestionOutcome::Ready(Vec::new()));
        assert_eq!(service.suggest("  ").await, SuggestionOutcome::Ready(Vec::new()));
    }

    #[tokio::test(start_paused = true)]
    async fn burst_only_sends_last_query() {
        let mut geocoding = MockGeocodingPort::new();
        geocoding
            .expect_search()
            .withf(|city, _| city == "Miami")
            .times(1)
            .returning(|_, _| Ok(places()));

        let service = SuggestionService::new(Arc::new(geocoding), SuggestionSettings::default());

        let (first, second, third) = tokio::join!(
            service.suggest("Mi"),
            async {
                tokio::time::sleep(Duration::from_millis(100)).await;
                service.suggest("Mia").await
            },
            async {
                tokio::time::sleep(Duration::from_millis(200)).await;
                service.suggest("Miami").await
            },
        );

        assert_eq!(first, SuggestionOutcome::Superseded);
        assert_eq!(second, SuggestionOutcome::Superseded);
        assert!(matches!(third, SuggestionOutcome::Ready(ref list) if list.len() == 2));
    }

    #[tokio::test(start_paused = true)]
    async fn requests_outside_window_both_run() {
        let mut geocoding = MockGeocodingPort::new();
        geocoding
            .expect_search()
            .times(2)
            .returning(|_, _| Ok(places()));

        let service = SuggestionService::new(Arc::new(geocoding), SuggestionSettings::default());

        assert!(matches!(service.suggest("Mi").await, SuggestionOutcome::Ready(_)));
        assert!(matches!(service.suggest("Mia").await, SuggestionOutcome::Ready(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn failure_yields_empty_list() {
        let mut geocoding = MockGeocodingPort::new();
        geocoding
            .expect_search()
            .returning(|_, _| Err(ApplicationError::Fetch("connection refused".to_string())));

        let service = SuggestionService::new(Arc::new(geocoding), SuggestionSettings::default());

        assert_eq!(service.suggest("Miami").await, SuggestionOutcome::Ready(Vec::new()));
    }
}
