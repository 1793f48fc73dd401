//! Depot and client node types.

use serde::{Deserialize, Serialize};

/// The single depot every route starts and ends at.
///
/// # Examples
///
/// ```
/// use cvrp_ga::models::Depot;
///
/// let depot = Depot::new(1, "cd01", 4.60, -74.08);
/// assert_eq!(depot.code(), "cd01");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Depot {
    id: usize,
    code: String,
    lat: f64,
    lon: f64,
}

impl Depot {
    /// Creates a depot.
    pub fn new(id: usize, code: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            id,
            code: code.into(),
            lat,
            lon,
        }
    }

    /// Numeric ID from the source data.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Node code used in routes.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }
}

/// A client to be served exactly once.
///
/// # Examples
///
/// ```
/// use cvrp_ga::models::Client;
///
/// let c = Client::new(5, "c005", 4.65, -74.05, 12.5);
/// assert_eq!(c.code(), "c005");
/// assert_eq!(c.demand(), 12.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    id: usize,
    code: String,
    lat: f64,
    lon: f64,
    demand: f64,
}

impl Client {
    /// Creates a client.
    pub fn new(id: usize, code: impl Into<String>, lat: f64, lon: f64, demand: f64) -> Self {
        Self {
            id,
            code: code.into(),
            lat,
            lon,
            demand,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Units to deliver.
    pub fn demand(&self) -> f64 {
        self.demand
    }
}
