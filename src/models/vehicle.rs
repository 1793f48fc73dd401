//! Vehicle type with capacity, range, and fuel cost.

use serde::{Deserialize, Serialize};

/// A fleet vehicle.
///
/// Routes are not bound to a specific vehicle; the fleet is summarised into
/// [`FleetLimits`](crate::evaluation::FleetLimits) and its size sets the
/// number of initial routes.
///
/// # Examples
///
/// ```
/// use cvrp_ga::models::Vehicle;
///
/// let v = Vehicle::new(1, "v001", 120.0, 80.0).with_fuel_cost_per_km(0.35);
/// assert_eq!(v.capacity(), 120.0);
/// assert_eq!(v.max_range_km(), 80.0);
/// assert_eq!(v.fuel_cost_per_km(), 0.35);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    id: usize,
    code: String,
    capacity: f64,
    max_range_km: f64,
    fuel_cost_per_km: f64,
}

impl Vehicle {
    /// Creates a vehicle with the given capacity and range.
    ///
    /// Fuel cost defaults to zero.
    pub fn new(id: usize, code: impl Into<String>, capacity: f64, max_range_km: f64) -> Self {
        Self {
            id,
            code: code.into(),
            capacity,
            max_range_km,
            fuel_cost_per_km: 0.0,
        }
    }

    /// Sets the fuel cost per kilometre.
    pub fn with_fuel_cost_per_km(mut self, cost: f64) -> Self {
        self.fuel_cost_per_km = cost;
        self
    }

    /// Vehicle ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Vehicle code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Maximum load.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Maximum kilometres per route.
    pub fn max_range_km(&self) -> f64 {
        self.max_range_km
    }

    /// Fuel cost per kilometre travelled.
    pub fn fuel_cost_per_km(&self) -> f64 {
        self.fuel_cost_per_km
    }
}
