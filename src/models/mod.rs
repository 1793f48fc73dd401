//! Domain model types for single-depot capacitated vehicle routing.
//!
//! Provides the depot and client nodes, the vehicle fleet, the validated
//! [`Instance`] that ties them to a travel matrix, and the value-like
//! [`Route`] and [`Solution`] types the genetic algorithm evolves.

mod client;
mod instance;
mod route;
mod solution;
mod vehicle;

pub use client::{Client, Depot};
pub use instance::{CostCoefficients, Instance, LEGACY_DEPOT_PLACEHOLDER};
pub use route::Route;
pub use solution::Solution;
pub use vehicle::Vehicle;
