//! Application layer - Weather lookup pipeline
//!
//! Resolves a location query into a place, fetches its weather and maps
//! the result into a display-ready view model. Talks to the outside
//! world only through the ports defined here.

pub mod error;
pub mod ports;
pub mod services;
pub mod session;
pub mod view_model;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
pub use session::Session;
pub use view_model::{AlertView, DailyView, HourlyView, ViewModel};
