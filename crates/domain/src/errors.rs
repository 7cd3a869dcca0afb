//! Domain-level errors

use thiserror::Error;

use crate::value_objects::InvalidCoordinates;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A city query was empty after trimming
    #[error("City name must not be empty")]
    EmptyCityName,

    /// Coordinates outside the valid latitude/longitude range
    #[error(transparent)]
    InvalidCoordinates(#[from] InvalidCoordinates),

    /// Unknown unit system name
    #[error("Unknown unit system: {0}. Use 'metric' or 'imperial'")]
    UnknownUnitSystem(String),
}
