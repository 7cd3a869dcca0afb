//! Application services
//!
//! The lookup pipeline (resolver, fetcher, presenter) and the services
//! built around it.

pub mod condition_style;
mod location_resolver;
mod lookup_service;
mod lookup_tracker;
pub mod presenter;
mod suggestion_service;
mod weather_fetcher;

#[cfg(test)]
pub(crate) mod fixtures;

pub use condition_style::{ConditionStyle, FALLBACK_STYLE, is_daytime, style_for};
pub use location_resolver::LocationResolver;
pub use lookup_service::{Clock, LookupOutcome, LookupService};
pub use lookup_tracker::{LookupTicket, LookupTracker};
pub use presenter::{DAILY_LIMIT, HOURLY_LIMIT, Presenter};
pub use suggestion_service::{
    Suggestion, SuggestionOutcome, SuggestionService, SuggestionSettings,
};
pub use weather_fetcher::WeatherFetcher;
