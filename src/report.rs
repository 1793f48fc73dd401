//! Per-route verification report.
//!
//! Rows carry the columns an external exporter writes (one row per route
//! that serves at least one client). Totals are computed with the same
//! pricing as [`evaluate`](crate::evaluation::evaluate), so
//! [`SolutionReport::total_cost`] matches the evaluated cost.

use serde::Serialize;

use crate::error::Result;
use crate::evaluation::evaluate_route;
use crate::models::{Instance, Solution};

/// One non-trivial route.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RouteReport {
    /// `V001`, `V002`, … by position among all routes of the solution.
    pub vehicle_id: String,
    pub depot_id: String,
    pub initial_load: f64,
    /// Node codes joined by `-`.
    pub route_sequence: String,
    pub clients_served: usize,
    /// Client demands in visit order, each with a decimal point
    /// (`3.0-4.5`), joined by `-`.
    pub demands_satisfied: String,
    pub total_distance: f64,
    pub total_time: f64,
    pub fuel_cost: f64,
    /// Fixed, distance, time, and fuel cost; penalties excluded.
    pub total_cost: f64,
    #[serde(skip)]
    pub load: f64,
    #[serde(skip)]
    pub penalty: f64,
}

/// Report rows for a whole solution.
///
/// # Examples
///
/// ```
/// use cvrp_ga::distance::{DistanceMatrix, TravelMatrix};
/// use cvrp_ga::evaluation::evaluate;
/// use cvrp_ga::models::{Client, CostCoefficients, Depot, Instance, Route, Solution, Vehicle};
/// use cvrp_ga::report::SolutionReport;
///
/// let dm = DistanceMatrix::from_data(2, vec![0.0, 2.0, 2.0, 0.0]).unwrap();
/// let inst = Instance::new(
///     Depot::new(0, "D", 0.0, 0.0),
///     vec![Client::new(1, "A", 0.0, 0.0, 3.0)],
///     vec![Vehicle::new(1, "V1", 10.0, 100.0)],
///     CostCoefficients::new(100.0, 1.0, 0.0),
///     TravelMatrix::from_distances(dm, 30.0),
/// )
/// .unwrap();
/// let sol = Solution::new(vec![Route::closed("D", Vec::<String>::new()), Route::closed("D", ["A"])]);
///
/// let report = SolutionReport::new(&sol, &inst).unwrap();
/// assert_eq!(report.routes.len(), 1);
/// assert_eq!(report.routes[0].vehicle_id, "V002");
/// assert_eq!(report.routes[0].route_sequence, "D-A-D");
/// assert_eq!(report.total_cost(), evaluate(&inst, &sol).unwrap().cost);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolutionReport {
    pub routes: Vec<RouteReport>,
    /// Sum of capacity and range penalties over all routes.
    pub penalty: f64,
}

impl SolutionReport {
    /// Builds one row per non-trivial route.
    ///
    /// # Errors
    ///
    /// [`RoutingError::UnknownNode`](crate::error::RoutingError::UnknownNode)
    /// if a route references an unknown code.
    pub fn new(solution: &Solution, instance: &Instance) -> Result<Self> {
        let depot = instance.depot().code();
        let mut routes = Vec::new();
        let mut penalty = 0.0;

        for (i, route) in solution.routes().iter().enumerate() {
            let Some((metrics, cost)) = evaluate_route(route, instance)? else {
                continue;
            };
            penalty += cost.penalty;
            routes.push(RouteReport {
                vehicle_id: format!("V{:03}", i + 1),
                depot_id: depot.to_string(),
                initial_load: 0.0,
                route_sequence: route.sequence_string(),
                clients_served: route.len() - 2,
                demands_satisfied: metrics
                    .demands
                    .iter()
                    .map(|d| format!("{d:?}"))
                    .collect::<Vec<_>>()
                    .join("-"),
                total_distance: metrics.distance_km,
                total_time: metrics.time_h,
                fuel_cost: cost.fuel,
                total_cost: cost.operating(),
                load: metrics.load,
                penalty: cost.penalty,
            });
        }

        Ok(Self { routes, penalty })
    }

    /// Operating costs of all rows plus penalties; equals the evaluated
    /// solution cost.
    pub fn total_cost(&self) -> f64 {
        self.routes
            .iter()
            .map(|r| r.total_cost + r.penalty)
            .sum()
    }

    pub fn total_distance(&self) -> f64 {
        self.routes.iter().map(|r| r.total_distance).sum()
    }
}
