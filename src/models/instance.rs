//! Single-depot CVRP instance.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{Client, Depot, Vehicle};
use crate::distance::TravelMatrix;
use crate::error::{Result, RoutingError};
use crate::evaluation::FleetLimits;

/// Node code older route data uses in place of the depot code.
pub const LEGACY_DEPOT_PLACEHOLDER: &str = "0";

/// Objective weights.
///
/// # Examples
///
/// ```
/// use cvrp_ga::models::CostCoefficients;
///
/// let costs = CostCoefficients::new(100.0, 1.0, 0.0);
/// assert_eq!(costs.big_m, 1e5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostCoefficients {
    /// Cost per vehicle used.
    pub fixed: f64,
    /// Cost per kilometre.
    pub distance: f64,
    /// Cost per hour.
    pub time: f64,
    /// Penalty per unit of capacity or range violation.
    pub big_m: f64,
}

impl CostCoefficients {
    /// Default penalty weight.
    pub const DEFAULT_BIG_M: f64 = 1e5;

    /// Creates coefficients with the default big-M penalty.
    pub fn new(fixed: f64, distance: f64, time: f64) -> Self {
        Self {
            fixed,
            distance,
            time,
            big_m: Self::DEFAULT_BIG_M,
        }
    }

    /// Overrides the penalty weight.
    pub fn with_big_m(mut self, big_m: f64) -> Self {
        self.big_m = big_m;
        self
    }

    fn validate(&self) -> Result<()> {
        let all = [self.fixed, self.distance, self.time, self.big_m];
        if all.iter().any(|v| !v.is_finite()) {
            return Err(RoutingError::InvalidCosts("coefficients must be finite"));
        }
        if all.iter().any(|&v| v < 0.0) {
            return Err(RoutingError::InvalidCosts("coefficients must be non-negative"));
        }
        Ok(())
    }
}

/// A validated, read-only problem instance.
///
/// Travel matrix index 0 is the depot; index `i + 1` is `clients[i]`.
/// Client and vehicle order is preserved and is the iteration order used
/// wherever order matters (initial shuffles, the range-mode tie-break).
///
/// # Examples
///
/// ```
/// use cvrp_ga::distance::{DistanceMatrix, TravelMatrix};
/// use cvrp_ga::models::{Client, CostCoefficients, Depot, Instance, Vehicle};
///
/// let depot = Depot::new(0, "D", 0.0, 0.0);
/// let clients = vec![Client::new(1, "A", 0.0, 0.0, 3.0)];
/// let vehicles = vec![Vehicle::new(1, "V1", 10.0, 100.0)];
/// let dm = DistanceMatrix::from_data(2, vec![0.0, 1.0, 1.0, 0.0]).unwrap();
/// let travel = TravelMatrix::from_distances(dm, 30.0);
///
/// let inst = Instance::new(depot, clients, vehicles, CostCoefficients::new(100.0, 1.0, 0.0), travel)
///     .unwrap();
/// assert_eq!(inst.num_clients(), 1);
/// assert_eq!(inst.node_index("A").unwrap(), 1);
/// assert!(inst.node_index("Z").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Instance {
    depot: Depot,
    clients: Vec<Client>,
    vehicles: Vec<Vehicle>,
    costs: CostCoefficients,
    travel: TravelMatrix,
    index: HashMap<String, usize>,
    limits: FleetLimits,
}

impl Instance {
    /// Validates and assembles an instance.
    ///
    /// # Errors
    ///
    /// - [`RoutingError::EmptyFleet`] if `vehicles` is empty
    /// - [`RoutingError::DuplicateCode`] if two nodes share a code
    /// - [`RoutingError::InvalidVehicle`] / [`RoutingError::InvalidClient`]
    ///   for non-positive capacity or range, negative fuel cost or demand
    /// - [`RoutingError::InvalidCosts`] for negative or non-finite weights
    /// - [`RoutingError::MatrixSizeMismatch`] if `travel` does not cover
    ///   exactly the depot and every client
    /// - [`RoutingError::InvalidMatrix`] for a negative or non-finite
    ///   distance or time, or a non-zero diagonal
    pub fn new(
        depot: Depot,
        clients: Vec<Client>,
        vehicles: Vec<Vehicle>,
        costs: CostCoefficients,
        travel: TravelMatrix,
    ) -> Result<Self> {
        let limits = FleetLimits::from_vehicles(&vehicles)?;
        for v in &vehicles {
            let reason = if !(v.capacity() > 0.0) {
                Some("capacity must be positive")
            } else if !(v.max_range_km() > 0.0) {
                Some("max range must be positive")
            } else if !(v.fuel_cost_per_km() >= 0.0) {
                Some("fuel cost per km must be non-negative")
            } else {
                None
            };
            if let Some(reason) = reason {
                return Err(RoutingError::InvalidVehicle {
                    code: v.code().to_string(),
                    reason,
                });
            }
        }
        costs.validate()?;

        let mut index = HashMap::with_capacity(clients.len() + 1);
        index.insert(depot.code().to_string(), 0);
        for (i, c) in clients.iter().enumerate() {
            if !(c.demand() >= 0.0) {
                return Err(RoutingError::InvalidClient {
                    code: c.code().to_string(),
                    reason: "demand must be non-negative",
                });
            }
            if c.code() == LEGACY_DEPOT_PLACEHOLDER
                || index.insert(c.code().to_string(), i + 1).is_some()
            {
                return Err(RoutingError::DuplicateCode(c.code().to_string()));
            }
        }

        if travel.size() != clients.len() + 1 {
            return Err(RoutingError::MatrixSizeMismatch {
                expected: clients.len() + 1,
                actual: travel.size(),
            });
        }
        travel.validate()?;

        Ok(Self {
            depot,
            clients,
            vehicles,
            costs,
            travel,
            index,
            limits,
        })
    }

    /// Builds the travel matrix from node coordinates (great-circle
    /// kilometres, constant speed) and then validates like [`Instance::new`].
    pub fn with_haversine(
        depot: Depot,
        clients: Vec<Client>,
        vehicles: Vec<Vehicle>,
        costs: CostCoefficients,
        avg_speed_kmh: f64,
    ) -> Result<Self> {
        let coords: Vec<(f64, f64)> = std::iter::once((depot.lat(), depot.lon()))
            .chain(clients.iter().map(|c| (c.lat(), c.lon())))
            .collect();
        let travel = TravelMatrix::haversine(&coords, avg_speed_kmh);
        Self::new(depot, clients, vehicles, costs, travel)
    }

    /// Disables the per-route range limit in evaluation and route building.
    pub fn without_range_limit(mut self) -> Self {
        self.limits = self.limits.without_range();
        self
    }

    /// Whether route distance is bounded by the representative range.
    pub fn is_range_limited(&self) -> bool {
        self.limits.max_range_km.is_some()
    }

    /// Representative fleet capacity, range, and fuel cost.
    pub fn limits(&self) -> &FleetLimits {
        &self.limits
    }

    pub fn depot(&self) -> &Depot {
        &self.depot
    }

    /// Clients in instance order.
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// Vehicles in fleet order.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn costs(&self) -> &CostCoefficients {
        &self.costs
    }

    pub fn travel(&self) -> &TravelMatrix {
        &self.travel
    }

    pub fn num_clients(&self) -> usize {
        self.clients.len()
    }

    /// Returns `true` for the depot code and the legacy placeholder.
    pub fn is_depot(&self, code: &str) -> bool {
        code == self.depot.code() || code == LEGACY_DEPOT_PLACEHOLDER
    }

    /// Matrix index of a node code; the legacy placeholder resolves to the
    /// depot.
    pub fn node_index(&self, code: &str) -> Result<usize> {
        if code == LEGACY_DEPOT_PLACEHOLDER {
            return Ok(0);
        }
        self.index
            .get(code)
            .copied()
            .ok_or_else(|| RoutingError::UnknownNode(code.to_string()))
    }

    /// Looks up a client by code. Depot codes are not clients.
    pub fn client(&self, code: &str) -> Result<&Client> {
        match self.node_index(code)? {
            0 => Err(RoutingError::UnknownNode(code.to_string())),
            i => Ok(&self.clients[i - 1]),
        }
    }

    /// Client at matrix index `idx` (`idx >= 1`).
    pub(crate) fn client_at(&self, idx: usize) -> &Client {
        &self.clients[idx - 1]
    }

    /// Kilometres between two matrix indices.
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.travel.distance(from, to)
    }

    /// Hours between two matrix indices.
    pub fn time(&self, from: usize, to: usize) -> f64 {
        self.travel.time(from, to)
    }
}
