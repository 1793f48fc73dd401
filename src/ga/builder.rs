//! Greedy route builder: permutation → depot-anchored routes.
//!
//! # Algorithm
//!
//! Walks the permutation once, keeping an open route with its load and its
//! closed-tour distance. A client joins the open route when
//!
//! - `load + demand ≤ Q`, and
//! - `distance + d(last, c) + d(c, depot) − d(last, depot) ≤ R`
//!
//! otherwise the open route is closed and a new one starts with that
//! client. A route holding only the depot admits any client, so every
//! client is placed; a client that alone breaks a limit ends up on its own
//! route and is penalized by the evaluator instead of being dropped.
//!
//! Unlike an optimal split, this is a single greedy pass (O(n)).

use crate::error::Result;
use crate::models::{Instance, Route, Solution};

/// Builds routes from a client permutation.
///
/// Every code in `sequence` must be a client; each is expected to appear
/// once (not re-checked).
///
/// # Errors
///
/// [`RoutingError::UnknownNode`](crate::error::RoutingError::UnknownNode)
/// for a code that is not a client of `instance`.
///
/// # Examples
///
/// ```
/// use cvrp_ga::ga::build_routes;
/// # use cvrp_ga::distance::{DistanceMatrix, TravelMatrix};
/// # use cvrp_ga::models::{Client, CostCoefficients, Depot, Instance, Vehicle};
/// # let inst = Instance::new(
/// #     Depot::new(0, "D", 0.0, 0.0),
/// #     vec![Client::new(1, "c1", 0.0, 0.0, 6.0), Client::new(2, "c2", 0.0, 0.0, 6.0)],
/// #     vec![Vehicle::new(1, "V1", 10.0, 100.0)],
/// #     CostCoefficients::new(0.0, 1.0, 0.0),
/// #     TravelMatrix::from_distances(DistanceMatrix::from_fn(3, |i, j| if i == j { 0.0 } else { 1.0 }), 30.0),
/// # ).unwrap();
/// // Q = 10, demands 6 + 6 = 12: two routes.
/// let sol = build_routes(&["c1", "c2"], &inst).unwrap();
/// assert_eq!(sol.num_routes(), 2);
/// assert_eq!(sol.routes()[0].nodes(), &["D", "c1", "D"]);
/// assert_eq!(sol.routes()[1].nodes(), &["D", "c2", "D"]);
/// ```
pub fn build_routes<S: AsRef<str>>(sequence: &[S], instance: &Instance) -> Result<Solution> {
    let depot = instance.depot().code();
    let limits = instance.limits();

    let mut routes = Vec::new();
    let mut current: Vec<String> = vec![depot.to_string()];
    let mut last = 0usize;
    let mut load = 0.0;
    let mut distance = 0.0;

    for code in sequence {
        let code = code.as_ref();
        let client = instance.client(code)?;
        let idx = instance.node_index(code)?;
        let demand = client.demand();

        let extra = instance.distance(last, idx) + instance.distance(idx, 0)
            - instance.distance(last, 0);

        let only_depot = current.len() == 1;
        let fits_capacity = load + demand <= limits.capacity;
        let fits_range = limits
            .max_range_km
            .map_or(true, |r| distance + extra <= r);

        if only_depot || (fits_capacity && fits_range) {
            current.push(code.to_string());
            load += demand;
            distance += extra;
        } else {
            current.push(depot.to_string());
            routes.push(Route::new(std::mem::replace(
                &mut current,
                vec![depot.to_string(), code.to_string()],
            )));
            load = demand;
            distance = instance.distance(0, idx) + instance.distance(idx, 0);
        }
        last = idx;
    }

    current.push(depot.to_string());
    routes.push(Route::new(current));

    Ok(Solution::new(routes))
}
