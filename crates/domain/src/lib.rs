//! Domain layer for SkyCast
//!
//! Contains the value objects of a weather lookup: where (coordinates,
//! resolved places, queries) and how to measure (unit systems).
//! This layer performs no I/O.

pub mod errors;
pub mod value_objects;

pub use errors::DomainError;
pub use value_objects::*;
