//! # cvrp-ga
//!
//! Single-depot capacitated vehicle routing solved with a genetic
//! algorithm. A candidate is a set of depot-anchored routes; the GA works on
//! the flattened client permutation and rebuilds routes greedily under the
//! fleet's representative capacity and range. Violations are priced with a
//! big-M penalty instead of being rejected.
//!
//! ## Modules
//!
//! - [`models`] — Depot, clients, vehicles, the validated [`Instance`](models::Instance), routes and solutions
//! - [`distance`] — Distance/time matrices and great-circle construction
//! - [`evaluation`] — Representative fleet limits and the penalized cost
//! - [`ga`] — Route builder, OX/swap operators, and the evolutionary loop
//! - [`report`] — Per-route verification rows
//! - [`experiment`] — Repeated independently seeded runs
//! - [`error`] — Error type

pub mod distance;
pub mod error;
pub mod evaluation;
pub mod experiment;
pub mod ga;
pub mod models;
pub mod report;

#[cfg(test)]
mod testing;

pub use error::{Result, RoutingError};
