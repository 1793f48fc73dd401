//! Distance and travel time matrices.
//!
//! Node index 0 is the depot; indices `1..=n` are the clients in instance
//! order. [`TravelMatrix::haversine`] builds both lookups from coordinates.

mod matrix;
mod travel;

pub use matrix::DistanceMatrix;
pub use travel::{haversine_km, TravelMatrix, DEFAULT_AVG_SPEED_KMH, EARTH_RADIUS_KM};
