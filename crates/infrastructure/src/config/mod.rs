//! Application configuration
//!
//! Sources, later ones winning: built-in defaults, `skycast.toml` in the
//! working directory (or an explicit file), then `SKYCAST_*` environment
//! variables with `__` between nested keys, e.g. `SKYCAST_WEATHER__API_KEY`.

mod suggestions;
mod weather;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::telemetry::LoggingConfig;

pub use suggestions::SuggestionAppConfig;
pub use weather::{GeoLocationConfig, WeatherAppConfig};

/// Base name of the optional config file in the working directory
pub const CONFIG_FILE_NAME: &str = "skycast";

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "SKYCAST";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// OpenWeather access and lookup defaults
    #[serde(default)]
    pub weather: WeatherAppConfig,

    /// City suggestion behavior
    #[serde(default)]
    pub suggestions: SuggestionAppConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional `skycast.toml`
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or a value has the wrong type.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, reading `path` instead of `skycast.toml` when given
    ///
    /// An explicit file must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or any source is invalid.
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(CONFIG_FILE_NAME).required(false),
        };

        let builder = config::Config::builder().add_source(file).add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Problems worth reporting that do not prevent startup
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if !self.weather.has_api_key() {
            warnings.push(
                "No OpenWeather API key configured; set SKYCAST_WEATHER__API_KEY or \
                 weather.api_key"
                    .to_string(),
            );
        }
        if let Some(location) = self.weather.default_location
            && location.to_geo_location().is_none()
        {
            warnings.push(format!(
                "Ignoring invalid weather.default_location ({}, {})",
                location.latitude, location.longitude
            ));
        }
        if self.weather.default_city.trim().is_empty() {
            warnings.push("weather.default_city is empty".to_string());
        }
        warnings
    }
}

#[cfg(test)]
mod tests {
    use domain::UnitSystem;
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.weather.base_url, "https://api.openweathermap.org");
        assert_eq!(config.weather.timeout_secs, 10);
        assert_eq!(config.weather.units, UnitSystem::Metric);
        assert_eq!(config.weather.default_city, "Miami");
        assert!(config.weather.api_key.is_none());
        assert_eq!(config.suggestions.debounce_ms, 300);
        assert_eq!(config.suggestions.min_query_len, 2);
        assert_eq!(config.suggestions.limit, 5);
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").expect("empty config parses");
        assert_eq!(config.weather.default_city, "Miami");
        assert_eq!(config.suggestions.limit, 5);
    }

    #[test]
    fn toml_deserialize() {
        let config: AppConfig = toml::from_str(
            r#"
            [weather]
            api_key = "secret-key"
            units = "imperial"
            default_city = "Boston"
            default_location = { latitude = 42.36, longitude = -71.06 }

            [suggestions]
            debounce_ms = 150
            "#,
        )
        .expect("valid config");

        assert_eq!(
            config
                .weather
                .api_key
                .as_ref()
                .map(|k| k.expose_secret().to_string()),
            Some("secret-key".to_string())
        );
        assert_eq!(config.weather.units, UnitSystem::Imperial);
        assert_eq!(config.weather.default_city, "Boston");
        assert!(config.weather.default_position().is_some());
        assert_eq!(config.suggestions.debounce_ms, 150);
        assert_eq!(config.suggestions.min_query_len, 2);
    }

    #[test]
    fn unknown_units_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[weather]\nunits = \"kelvin\"");
        assert!(result.is_err());
    }

    #[test]
    fn warnings_for_missing_key() {
        let warnings = AppConfig::default().warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("API key"));
    }

    #[test]
    fn warnings_for_invalid_default_location() {
        let mut config: AppConfig =
            toml::from_str("[weather]\napi_key = \"k\"").expect("valid config");
        config.weather.default_location = Some(GeoLocationConfig {
            latitude: 200.0,
            longitude: 0.0,
        });

        let warnings = config.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("default_location"));
        assert!(config.weather.default_position().is_none());
    }

    #[test]
    fn api_key_not_serialized() {
        let config: AppConfig =
            toml::from_str("[weather]\napi_key = \"hidden\"").expect("valid config");
        let json = serde_json::to_string(&config).expect("serializes");
        assert!(!json.contains("hidden"));
        assert!(!format!("{config:?}").contains("hidden"));
    }

    #[test]
    fn load_from_missing_explicit_file_fails() {
        let result = AppConfig::load_from(Some(Path::new("/nonexistent/skycast.toml")));
        assert!(result.is_err());
    }
}
