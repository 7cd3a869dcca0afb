//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod location_query;
mod place_identity;
mod unit_system;

pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use location_query::LocationQuery;
pub use place_identity::PlaceIdentity;
pub use unit_system::{
    UnitSystem, hpa_to_inhg, inhg_to_hpa, meters_to_km, meters_to_miles, mps_to_kmh,
};
