//! Permutation chromosome and the evaluated individual.
//!
//! The chromosome of a solution is the order in which its routes visit the
//! clients, read route by route with depot stops dropped. Route boundaries
//! are not part of it: the [route builder](super::build_routes) recreates
//! them from the permutation.

use crate::error::Result;
use crate::evaluation::{evaluate, Evaluation};
use crate::models::{Instance, Solution};

/// Client codes of `solution` in route order, then visit order.
///
/// # Errors
///
/// [`RoutingError::UnknownNode`](crate::error::RoutingError::UnknownNode)
/// if a route references a code that is
/// neither the depot nor a client.
///
/// # Examples
///
/// ```
/// use cvrp_ga::ga::flatten;
/// # use cvrp_ga::distance::{DistanceMatrix, TravelMatrix};
/// # use cvrp_ga::models::{Client, CostCoefficients, Depot, Instance, Route, Solution, Vehicle};
/// # let inst = Instance::new(
/// #     Depot::new(0, "D", 0.0, 0.0),
/// #     vec![Client::new(1, "A", 0.0, 0.0, 1.0), Client::new(2, "B", 0.0, 0.0, 1.0)],
/// #     vec![Vehicle::new(1, "V1", 10.0, 100.0)],
/// #     CostCoefficients::new(0.0, 1.0, 0.0),
/// #     TravelMatrix::from_distances(DistanceMatrix::new(3), 30.0),
/// # ).unwrap();
/// let sol = Solution::new(vec![Route::closed("D", ["B"]), Route::closed("D", ["A"])]);
/// assert_eq!(flatten(&sol, &inst).unwrap(), vec!["B", "A"]);
/// ```
pub fn flatten(solution: &Solution, instance: &Instance) -> Result<Vec<String>> {
    let mut genes = Vec::with_capacity(instance.num_clients());
    for route in solution.routes() {
        for code in route.nodes() {
            if instance.is_depot(code) {
                continue;
            }
            instance.node_index(code)?;
            genes.push(code.clone());
        }
    }
    Ok(genes)
}

/// A solution paired with its evaluation.
///
/// The evaluation is computed once when the individual is created and the
/// solution is never modified afterwards, so the two cannot drift apart.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    solution: Solution,
    evaluation: Evaluation,
}

impl Individual {
    /// Evaluates `solution` and wraps it.
    pub fn new(solution: Solution, instance: &Instance) -> Result<Self> {
        let evaluation = evaluate(instance, &solution)?;
        Ok(Self {
            solution,
            evaluation,
        })
    }

    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    pub fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }

    /// Objective value, penalties included.
    pub fn cost(&self) -> f64 {
        self.evaluation.cost
    }

    pub fn is_feasible(&self) -> bool {
        self.evaluation.is_feasible
    }

    pub fn into_solution(self) -> Solution {
        self.solution
    }
}

/// Refreshes cost and feasibility of a built solution.
///
/// Route structure is left untouched: feasibility is measured, never
/// forced. Calling it twice on the same solution yields the same result.
pub fn repair(solution: Solution, instance: &Instance) -> Result<Individual> {
    Individual::new(solution, instance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RoutingError;
    use crate::models::Route;
    use crate::testing::abc_instance;

    #[test]
    fn test_flatten_preserves_order() {
        let inst = abc_instance();
        let sol = Solution::new(vec![
            Route::closed("D", ["C", "A"]),
            Route::closed("D", Vec::<String>::new()),
            Route::closed("D", ["B"]),
        ]);
        assert_eq!(flatten(&sol, &inst).unwrap(), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_flatten_skips_legacy_placeholder() {
        let inst = abc_instance();
        let sol = Solution::new(vec![Route::new(vec!["0".into(), "B".into(), "0".into()])]);
        assert_eq!(flatten(&sol, &inst).unwrap(), vec!["B"]);
    }

    #[test]
    fn test_flatten_unknown_code() {
        let inst = abc_instance();
        let sol = Solution::new(vec![Route::closed("D", ["A", "X"])]);
        assert_eq!(
            flatten(&sol, &inst).unwrap_err(),
            RoutingError::UnknownNode("X".into())
        );
    }

    #[test]
    fn test_repair_is_idempotent() {
        let inst = abc_instance();
        let sol = Solution::new(vec![Route::closed("D", ["A", "B", "C"])]);
        let once = repair(sol.clone(), &inst).unwrap();
        let twice = repair(once.clone().into_solution(), &inst).unwrap();
        assert_eq!(once.cost(), twice.cost());
        assert_eq!(once.is_feasible(), twice.is_feasible());
        assert!(!once.is_feasible());
        assert_eq!(once.solution(), &sol);
    }
}
