//! Suggestion configuration

use std::time::Duration;

use application::services::SuggestionSettings;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionAppConfig {
    /// Quiet period before a suggestion request is sent
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,

    /// Maximum number of suggestions (OpenWeather caps this at 5)
    #[serde(default = "default_limit")]
    pub limit: u8,
}

const fn default_debounce_ms() -> u64 {
    300
}

const fn default_min_query_len() -> usize {
    2
}

const fn default_limit() -> u8 {
    5
}

impl Default for SuggestionAppConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            min_query_len: default_min_query_len(),
            limit: default_limit(),
        }
    }
}

impl SuggestionAppConfig {
    #[must_use]
    pub const fn to_settings(&self) -> SuggestionSettings {
        SuggestionSettings {
            debounce: Duration::from_millis(self.debounce_ms),
            min_query_len: self.min_query_len,
            limit: self.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_service_defaults() {
        assert_eq!(
            SuggestionAppConfig::default().to_settings(),
            SuggestionSettings::default()
        );
    }

    #[test]
    fn custom_settings() {
        let config = SuggestionAppConfig {
            debounce_ms: 50,
            min_query_len: 3,
            limit: 2,
        };
        let settings = config.to_settings();
        assert_eq!(settings.debounce, Duration::from_millis(50));
        assert_eq!(settings.min_query_len, 3);
        assert_eq!(settings.limit, 2);
    }
}
