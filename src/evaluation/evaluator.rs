//! Penalized objective for CVRP solutions.
//!
//! Per non-trivial route:
//!
//! ```text
//! C_fixed + C_dist·d + C_time·t + fuel·d
//!   + big_m·max(0, load − Q) + big_m·max(0, d − R)
//! ```
//!
//! where `Q`, `R` and `fuel` come from [`FleetLimits`]. A route with two or
//! fewer nodes visits nobody and contributes nothing.

use tracing::trace;

use super::FleetLimits;
use crate::error::Result;
use crate::models::{Instance, Route, Solution};

/// Distance, time, and load of one route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMetrics {
    /// Kilometres over consecutive node pairs.
    pub distance_km: f64,
    /// Hours over consecutive node pairs.
    pub time_h: f64,
    /// Sum of client demands.
    pub load: f64,
    /// Demand of each visited client, in visit order.
    pub demands: Vec<f64>,
}

impl RouteMetrics {
    /// Walks a route, resolving every node code against the instance.
    ///
    /// The legacy depot placeholder resolves to the depot.
    ///
    /// # Errors
    ///
    /// [`RoutingError::UnknownNode`](crate::error::RoutingError::UnknownNode)
    /// if the route references a code the instance does not know.
    pub fn measure(route: &Route, instance: &Instance) -> Result<Self> {
        let nodes = route
            .nodes()
            .iter()
            .map(|code| instance.node_index(code))
            .collect::<Result<Vec<usize>>>()?;

        let mut distance_km = 0.0;
        let mut time_h = 0.0;
        for pair in nodes.windows(2) {
            distance_km += instance.distance(pair[0], pair[1]);
            time_h += instance.time(pair[0], pair[1]);
        }

        let demands: Vec<f64> = nodes
            .iter()
            .filter(|&&idx| idx != 0)
            .map(|&idx| instance.client_at(idx).demand())
            .collect();

        Ok(Self {
            distance_km,
            time_h,
            load: demands.iter().sum(),
            demands,
        })
    }
}

/// Cost components of one non-trivial route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteCost {
    pub fixed: f64,
    pub distance: f64,
    pub time: f64,
    pub fuel: f64,
    /// Capacity overflow in demand units.
    pub capacity_excess: f64,
    /// Range overflow in kilometres.
    pub range_excess: f64,
    /// `big_m` times both overflows.
    pub penalty: f64,
}

impl RouteCost {
    /// Prices measured metrics under the instance coefficients.
    pub fn price(metrics: &RouteMetrics, instance: &Instance) -> Self {
        let costs = instance.costs();
        let limits: &FleetLimits = instance.limits();

        let capacity_excess = limits.capacity_excess(metrics.load);
        let range_excess = limits.range_excess(metrics.distance_km);

        let mut penalty = 0.0;
        if capacity_excess > 0.0 {
            penalty += costs.big_m * capacity_excess;
        }
        if range_excess > 0.0 {
            penalty += costs.big_m * range_excess;
        }

        Self {
            fixed: costs.fixed,
            distance: costs.distance * metrics.distance_km,
            time: costs.time * metrics.time_h,
            fuel: limits.fuel_cost_per_km * metrics.distance_km,
            capacity_excess,
            range_excess,
            penalty,
        }
    }

    /// Cost without penalties.
    pub fn operating(&self) -> f64 {
        self.fixed + self.distance + self.time + self.fuel
    }

    /// Cost with penalties.
    pub fn total(&self) -> f64 {
        self.operating() + self.penalty
    }

    /// `true` when the route breaks no limit.
    pub fn is_feasible(&self) -> bool {
        self.capacity_excess <= 0.0 && self.range_excess <= 0.0
    }
}

/// Result of evaluating a whole solution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// Objective value, penalties included.
    pub cost: f64,
    /// Penalty share of `cost`; zero iff the solution is feasible.
    pub penalty: f64,
    /// `false` if any route exceeds capacity or range.
    pub is_feasible: bool,
    /// Number of non-trivial routes.
    pub routes_used: usize,
    /// Kilometres over all routes.
    pub distance_km: f64,
    /// Hours over all routes.
    pub time_h: f64,
}

/// Measures and prices a single route; `None` for trivial routes.
pub fn evaluate_route(route: &Route, instance: &Instance) -> Result<Option<(RouteMetrics, RouteCost)>> {
    if route.is_trivial() {
        return Ok(None);
    }
    let metrics = RouteMetrics::measure(route, instance)?;
    let cost = RouteCost::price(&metrics, instance);
    Ok(Some((metrics, cost)))
}

/// Evaluates a solution against an instance.
///
/// Pure: the solution is not modified.
///
/// # Errors
///
/// [`RoutingError::UnknownNode`](crate::error::RoutingError::UnknownNode)
/// if a non-trivial route references an unknown code.
///
/// # Examples
///
/// ```
/// use cvrp_ga::distance::{DistanceMatrix, TravelMatrix};
/// use cvrp_ga::evaluation::evaluate;
/// use cvrp_ga::models::{Client, CostCoefficients, Depot, Instance, Route, Solution, Vehicle};
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
///
/// let sol = Solution::new(vec![Route::closed("D", ["A"])]);
/// let eval = evaluate(&inst, &sol).unwrap();
/// assert_eq!(eval.cost, 104.0);
/// assert!(eval.is_feasible);
/// ```
pub fn evaluate(instance: &Instance, solution: &Solution) -> Result<Evaluation> {
    let mut eval = Evaluation {
        cost: 0.0,
        penalty: 0.0,
        is_feasible: true,
        routes_used: 0,
        distance_km: 0.0,
        time_h: 0.0,
    };

    for (idx, route) in solution.routes().iter().enumerate() {
        let Some((metrics, cost)) = evaluate_route(route, instance)? else {
            continue;
        };

        if !cost.is_feasible() {
            trace!(
                route = idx,
                load = metrics.load,
                distance_km = metrics.distance_km,
                capacity_excess = cost.capacity_excess,
                range_excess = cost.range_excess,
                "route violates fleet limits"
            );
            eval.is_feasible = false;
        }

        eval.cost += cost.total();
        eval.penalty += cost.penalty;
        eval.routes_used += 1;
        eval.distance_km += metrics.distance_km;
        eval.time_h += metrics.time_h;
    }

    Ok(eval)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RoutingError;
    use crate::ga::build_routes;
    use crate::testing::{abc_instance, instance_with, mixed_fleet_instance, ring_instance};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn sol(routes: &[&[&str]]) -> Solution {
        Solution::new(routes.iter().map(|r| Route::closed("D", r.iter().copied())).collect())
    }

    /// Recomputes the objective route by route from the formula and checks
    /// it against `evaluate`, including penalty == 0 iff feasible.
    fn assert_decomposes(inst: &Instance, solution: &Solution) -> Evaluation {
        let eval = evaluate(inst, solution).unwrap();
        let c = inst.costs();
        let limits = inst.limits();

        let mut expected = 0.0;
        let mut penalty = 0.0;
        for route in solution.routes().iter().filter(|r| !r.is_trivial()) {
            let m = RouteMetrics::measure(route, inst).unwrap();
            let over_load = (m.load - limits.capacity).max(0.0);
            let over_range = limits
                .max_range_km
                .map_or(0.0, |r| (m.distance_km - r).max(0.0));
            let p = c.big_m * (over_load + over_range);
            expected += c.fixed
                + c.distance * m.distance_km
                + c.time * m.time_h
                + limits.fuel_cost_per_km * m.distance_km
                + p;
            penalty += p;
        }

        assert!((eval.cost - expected).abs() <= 1e-9 * expected.max(1.0));
        assert!((eval.penalty - penalty).abs() <= 1e-9 * penalty.max(1.0));
        assert_eq!(eval.penalty == 0.0, eval.is_feasible);
        eval
    }

    /// Shuffled ring clients cut into consecutive chunks of the given sizes.
    fn chunked_ring_solution(inst: &Instance, seed: u64, sizes: &[usize]) -> Solution {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut codes: Vec<&str> = inst.clients().iter().map(|c| c.code()).collect();
        codes.shuffle(&mut rng);

        let depot = inst.depot().code();
        let mut routes = Vec::new();
        let mut rest = codes.as_slice();
        for &size in sizes.iter().cycle() {
            if rest.is_empty() {
                break;
            }
            let (head, tail) = rest.split_at(size.max(1).min(rest.len()));
            routes.push(Route::closed(depot, head.iter().copied()));
            rest = tail;
        }
        Solution::new(routes)
    }

    #[test]
    fn test_empty_solution() {
        let inst = abc_instance();
        let eval = evaluate(&inst, &Solution::default()).unwrap();
        assert_eq!(eval.cost, 0.0);
        assert!(eval.is_feasible);
        assert_eq!(eval.routes_used, 0);
    }

    #[test]
    fn test_trivial_routes_are_skipped() {
        let inst = abc_instance();
        let eval = evaluate(&inst, &sol(&[&[], &["A"], &[]])).unwrap();
        // D->A->D = 2 km, one vehicle
        assert_eq!(eval.routes_used, 1);
        assert!((eval.cost - 102.0).abs() < 1e-10);
    }

    #[test]
    fn test_feasible_split() {
        let inst = abc_instance();
        let eval = evaluate(&inst, &sol(&[&["A", "B"], &["C"]])).unwrap();
        // [D,A,B,D] = 1+1+2 = 4, [D,C,D] = 6
        assert!(eval.is_feasible);
        assert_eq!(eval.penalty, 0.0);
        assert!((eval.distance_km - 10.0).abs() < 1e-10);
        assert!((eval.cost - 210.0).abs() < 1e-10);
    }

    #[test]
    fn test_capacity_penalty() {
        let inst = abc_instance();
        // load 12 > Q = 10; distance 1+1+1+3 = 6
        let eval = evaluate(&inst, &sol(&[&["A", "B", "C"]])).unwrap();
        assert!(!eval.is_feasible);
        assert!((eval.penalty - 2.0 * 1e5).abs() < 1e-6);
        assert!((eval.cost - (100.0 + 6.0 + 2.0 * 1e5)).abs() < 1e-6);
    }

    #[test]
    fn test_range_penalty() {
        // range 5 km; [D,C,D] = 6 km
        let inst = instance_with(10.0, 5.0, 0.0);
        let eval = evaluate(&inst, &sol(&[&["C"]])).unwrap();
        assert!(!eval.is_feasible);
        assert!((eval.penalty - 1e5).abs() < 1e-6);

        let unlimited = instance_with(10.0, 5.0, 0.0).without_range_limit();
        let eval = evaluate(&unlimited, &sol(&[&["C"]])).unwrap();
        assert!(eval.is_feasible);
        assert_eq!(eval.penalty, 0.0);
    }

    #[test]
    fn test_cost_decomposition() {
        let inst = instance_with(10.0, 100.0, 0.5);
        let s = sol(&[&["B", "A"], &["C"]]);
        let eval = evaluate(&inst, &s).unwrap();

        let c = inst.costs();
        let mut expected = 0.0;
        for route in s.routes() {
            let m = RouteMetrics::measure(route, &inst).unwrap();
            expected += c.fixed + c.distance * m.distance_km + c.time * m.time_h + 0.5 * m.distance_km;
        }
        assert!((eval.cost - expected).abs() < 1e-9);
        assert!(eval.is_feasible);
        assert_eq!(eval.penalty, 0.0);
    }

    #[test]
    fn test_decomposition_feasible_and_infeasible() {
        let inst = ring_instance(20, 3);
        // one client per route: load <= 5, a few km each
        let singles = assert_decomposes(&inst, &chunked_ring_solution(&inst, 1, &[1]));
        assert!(singles.is_feasible);
        assert_eq!(singles.routes_used, 20);
        // everything on one route: load 60 > 12
        let single_route = assert_decomposes(&inst, &chunked_ring_solution(&inst, 1, &[20]));
        assert!(!single_route.is_feasible);
        assert!(single_route.penalty > 0.0);
    }

    #[test]
    fn test_mixed_fleet_limits_drive_cost() {
        let inst = mixed_fleet_instance();
        let limits = inst.limits();
        assert_eq!(limits.capacity, 8.0);
        assert_eq!(limits.max_range_km, Some(5.0));
        assert!((limits.fuel_cost_per_km - 0.4).abs() < 1e-12);

        // [D,B,C,D]: load 9 > 8, distance 2+1+3 = 6 > 5
        let eval = assert_decomposes(&inst, &sol(&[&["B", "C"]]));
        assert!(!eval.is_feasible);
        assert!((eval.penalty - 2.0 * 1e5).abs() < 1e-6);
        assert!((eval.cost - (100.0 + 6.0 + 0.4 * 6.0 + 2.0 * 1e5)).abs() < 1e-6);
    }

    #[test]
    fn test_mixed_fleet_builder_uses_min_capacity() {
        let inst = mixed_fleet_instance();
        // 4 + 5 = 9 would fit the largest van but not Q = 8
        let built = build_routes(&["B", "C"], &inst).unwrap();
        assert_eq!(built.num_routes(), 2);

        // [D,A,B,D] = 4 km, load 7; [D,C,D] = 6 km > R = 5
        let built = build_routes(&["A", "B", "C"], &inst).unwrap();
        assert_eq!(built.routes()[0].interior(), &["A", "B"]);
        assert_eq!(built.routes()[1].interior(), &["C"]);
        let eval = assert_decomposes(&inst, &built);
        assert!(!eval.is_feasible);
        assert!((eval.penalty - 1e5).abs() < 1e-6);
        assert!((eval.cost - (210.0 + 0.4 * 10.0 + 1e5)).abs() < 1e-6);
    }

    #[test]
    fn test_legacy_placeholder_is_depot() {
        let inst = abc_instance();
        let legacy = Solution::new(vec![Route::new(vec!["0".into(), "A".into(), "0".into()])]);
        let modern = sol(&[&["A"]]);
        assert_eq!(
            evaluate(&inst, &legacy).unwrap(),
            evaluate(&inst, &modern).unwrap()
        );
    }

    #[test]
    fn test_unknown_code_is_fatal() {
        let inst = abc_instance();
        let err = evaluate(&inst, &sol(&[&["A", "Z"]])).unwrap_err();
        assert_eq!(err, RoutingError::UnknownNode("Z".into()));
    }

    #[test]
    fn test_evaluate_is_pure() {
        let inst = abc_instance();
        let s = sol(&[&["C", "A"], &["B"]]);
        let first = evaluate(&inst, &s).unwrap();
        let second = evaluate(&inst, &s).unwrap();
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn prop_cost_decomposes_over_routes(
            seed in any::<u64>(),
            sizes in proptest::collection::vec(1usize..9, 1..6),
        ) {
            let inst = ring_instance(18, 3);
            assert_decomposes(&inst, &chunked_ring_solution(&inst, seed, &sizes));
        }

        #[test]
        fn prop_built_routes_decompose(seed in any::<u64>()) {
            let inst = mixed_fleet_instance();
            let mut rng = StdRng::seed_from_u64(seed);
            let mut codes = vec!["A", "B", "C"];
            codes.shuffle(&mut rng);
            assert_decomposes(&inst, &build_routes(&codes, &inst).unwrap());
        }
    }
}
