//! Representative per-route limits for a heterogeneous fleet.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoutingError};
use crate::models::Vehicle;

/// Scalars that stand in for the whole fleet during route building and
/// evaluation.
///
/// - `capacity`: the smallest vehicle capacity, so any route is bound by the
///   most restrictive vehicle that could be assigned to it
/// - `fuel_cost_per_km`: the mean over all vehicles
/// - `max_range_km`: the most frequent range; on a tie, the value seen first
///   in fleet order. `None` when range is not modelled.
///
/// # Examples
///
/// ```
/// use cvrp_ga::evaluation::FleetLimits;
/// use cvrp_ga::models::Vehicle;
///
/// let fleet = vec![
///     Vehicle::new(1, "v1", 100.0, 80.0).with_fuel_cost_per_km(0.2),
///     Vehicle::new(2, "v2", 60.0, 120.0).with_fuel_cost_per_km(0.4),
///     Vehicle::new(3, "v3", 90.0, 120.0).with_fuel_cost_per_km(0.3),
/// ];
/// let limits = FleetLimits::from_vehicles(&fleet).unwrap();
/// assert_eq!(limits.capacity, 60.0);
/// assert_eq!(limits.max_range_km, Some(120.0));
/// assert!((limits.fuel_cost_per_km - 0.3).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FleetLimits {
    pub capacity: f64,
    pub max_range_km: Option<f64>,
    pub fuel_cost_per_km: f64,
}

impl FleetLimits {
    /// Summarises a fleet.
    ///
    /// # Errors
    ///
    /// [`RoutingError::EmptyFleet`] if `vehicles` is empty.
    pub fn from_vehicles(vehicles: &[Vehicle]) -> Result<Self> {
        if vehicles.is_empty() {
            return Err(RoutingError::EmptyFleet);
        }

        let capacity = vehicles
            .iter()
            .map(Vehicle::capacity)
            .fold(f64::INFINITY, f64::min);
        let fuel_cost_per_km =
            vehicles.iter().map(Vehicle::fuel_cost_per_km).sum::<f64>() / vehicles.len() as f64;
        let ranges: Vec<f64> = vehicles.iter().map(Vehicle::max_range_km).collect();

        Ok(Self {
            capacity,
            max_range_km: mode_first(&ranges),
            fuel_cost_per_km,
        })
    }

    /// Drops the range limit.
    pub fn without_range(mut self) -> Self {
        self.max_range_km = None;
        self
    }

    /// Capacity overflow of a route carrying `load`, zero when it fits.
    pub fn capacity_excess(&self, load: f64) -> f64 {
        (load - self.capacity).max(0.0)
    }

    /// Range overflow of a route of `distance_km`, zero when it fits or
    /// range is not modelled.
    pub fn range_excess(&self, distance_km: f64) -> f64 {
        self.max_range_km
            .map_or(0.0, |r| (distance_km - r).max(0.0))
    }
}

/// Most frequent value; ties go to the value encountered first.
fn mode_first(values: &[f64]) -> Option<f64> {
    let mut counts: Vec<(f64, usize)> = Vec::new();
    for &v in values {
        match counts.iter_mut().find(|(seen, _)| *seen == v) {
            Some((_, n)) => *n += 1,
            None => counts.push((v, 1)),
        }
    }
    // Strict comparison keeps the earliest value among equal counts.
    let mut best: Option<(f64, usize)> = None;
    for (v, n) in counts {
        if best.map_or(true, |(_, bn)| n > bn) {
            best = Some((v, n));
        }
    }
    best.map(|(v, _)| v)
}
