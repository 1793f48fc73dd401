//! Depot-anchored route of node codes.

use serde::{Deserialize, Serialize};

/// An ordered sequence of node codes served by one vehicle.
///
/// Well-formed routes start and end with the depot code. A route with two
/// or fewer nodes serves nobody and is skipped by evaluation.
///
/// # Examples
///
/// ```
/// use cvrp_ga::models::Route;
///
/// let route = Route::closed("D", ["A", "B"]);
/// assert_eq!(route.nodes(), &["D", "A", "B", "D"]);
/// assert_eq!(route.interior(), &["A", "B"]);
/// assert!(!route.is_trivial());
/// assert!(Route::closed("D", Vec::<String>::new()).is_trivial());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    nodes: Vec<String>,
}

impl Route {
    /// Wraps a raw node sequence as-is.
    pub fn new(nodes: Vec<String>) -> Self {
        Self { nodes }
    }

    /// Builds `[depot, clients..., depot]`.
    pub fn closed<I, S>(depot: &str, clients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut nodes = vec![depot.to_string()];
        nodes.extend(clients.into_iter().map(Into::into));
        nodes.push(depot.to_string());
        Self { nodes }
    }

    /// All node codes, depot endpoints included.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Node codes between the two depot endpoints.
    pub fn interior(&self) -> &[String] {
        if self.nodes.len() <= 2 {
            return &[];
        }
        &self.nodes[1..self.nodes.len() - 1]
    }

    /// Number of nodes, depot endpoints included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// `true` when the route visits no client (two or fewer nodes).
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() <= 2
    }

    /// Node codes joined by `-`.
    pub fn sequence_string(&self) -> String {
        self.nodes.join("-")
    }
}
