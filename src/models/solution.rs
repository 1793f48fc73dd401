//! Candidate solution type.

use serde::{Deserialize, Serialize};

use super::Route;

/// A complete candidate answer: one route per vehicle used.
///
/// A `Solution` owns its routes outright; cloning copies every route so
/// operators working on a clone can never alter the original. Cost and
/// feasibility are not cached here: they come from
/// [`evaluate`](crate::evaluation::evaluate) and travel alongside the
/// solution in an [`Individual`](crate::ga::Individual).
///
/// # Examples
///
/// ```
/// use cvrp_ga::models::{Route, Solution};
///
/// let sol = Solution::new(vec![
///     Route::closed("D", ["A", "B"]),
///     Route::closed("D", Vec::<String>::new()),
/// ]);
/// assert_eq!(sol.num_routes(), 2);
/// assert_eq!(sol.num_routes_used(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    routes: Vec<Route>,
}

impl Solution {
    /// Creates a solution over the given routes.
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// All routes, trivial ones included.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Total number of routes.
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Number of routes that visit at least one client.
    pub fn num_routes_used(&self) -> usize {
        self.routes.iter().filter(|r| !r.is_trivial()).count()
    }

    /// Number of interior node visits across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(|r| r.interior().len()).sum()
    }

    /// Consumes the solution, returning its routes.
    pub fn into_routes(self) -> Vec<Route> {
        self.routes
    }
}
