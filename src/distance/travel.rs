//! Paired distance (km) and travel time (h) lookups.

use serde::{Deserialize, Serialize};

use super::DistanceMatrix;
use crate::error::{Result, RoutingError};

/// Mean Earth radius used for great-circle distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Urban average speed assumed when deriving travel times.
pub const DEFAULT_AVG_SPEED_KMH: f64 = 30.0;

/// Great-circle distance in kilometres between two `(lat, lon)` points given
/// in degrees.
///
/// # Examples
///
/// ```
/// use cvrp_ga::distance::haversine_km;
///
/// // One degree of latitude is roughly 111.2 km.
/// let d = haversine_km(0.0, 0.0, 1.0, 0.0);
/// assert!((d - 111.195).abs() < 1e-3);
/// ```
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();

    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Total `(node, node) -> (km, hours)` lookup over depot and clients.
///
/// # Examples
///
/// ```
/// use cvrp_ga::distance::TravelMatrix;
///
/// let coords = [(4.60, -74.08), (4.65, -74.05), (4.70, -74.10)];
/// let tm = TravelMatrix::haversine(&coords, 30.0);
/// assert_eq!(tm.size(), 3);
/// assert_eq!(tm.distance(1, 1), 0.0);
/// assert!((tm.time(0, 2) - tm.distance(0, 2) / 30.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelMatrix {
    distance_km: DistanceMatrix,
    time_h: DistanceMatrix,
}

impl TravelMatrix {
    /// Pairs explicit distance and time matrices of the same size.
    pub fn from_data(distance_km: DistanceMatrix, time_h: DistanceMatrix) -> Result<Self> {
        if distance_km.size() != time_h.size() {
            return Err(RoutingError::MatrixSizeMismatch {
                expected: distance_km.size(),
                actual: time_h.size(),
            });
        }
        Ok(Self {
            distance_km,
            time_h,
        })
    }

    /// Derives times from distances at a constant speed.
    ///
    /// A non-positive speed yields zero travel time everywhere.
    pub fn from_distances(distance_km: DistanceMatrix, avg_speed_kmh: f64) -> Self {
        let size = distance_km.size();
        let time_h = DistanceMatrix::from_fn(size, |i, j| {
            if avg_speed_kmh > 0.0 {
                distance_km.get(i, j) / avg_speed_kmh
            } else {
                0.0
            }
        });
        Self {
            distance_km,
            time_h,
        }
    }

    /// Builds great-circle distances between `(lat, lon)` points.
    ///
    /// The diagonal is exactly zero.
    pub fn haversine(coords: &[(f64, f64)], avg_speed_kmh: f64) -> Self {
        let distance_km = DistanceMatrix::from_fn(coords.len(), |i, j| {
            if i == j {
                return 0.0;
            }
            let (lat_i, lon_i) = coords[i];
            let (lat_j, lon_j) = coords[j];
            haversine_km(lat_i, lon_i, lat_j, lon_j)
        });
        Self::from_distances(distance_km, avg_speed_kmh)
    }

    /// Checks that every distance and time is finite and non-negative and
    /// that both diagonals are zero.
    ///
    /// # Errors
    ///
    /// [`RoutingError::InvalidMatrix`] naming the first offending entry.
    pub fn validate(&self) -> Result<()> {
        for (matrix, m) in [("distance", &self.distance_km), ("time", &self.time_h)] {
            let n = m.size();
            for from in 0..n {
                for to in 0..n {
                    let v = m.get(from, to);
                    let reason = if !v.is_finite() {
                        "entry is not finite"
                    } else if v < 0.0 {
                        "entry is negative"
                    } else if from == to && v != 0.0 {
                        "diagonal entry is not zero"
                    } else {
                        continue;
                    };
                    return Err(RoutingError::InvalidMatrix {
                        matrix,
                        from,
                        to,
                        reason,
                    });
                }
            }
        }
        Ok(())
    }

    /// Kilometres from `from` to `to`.
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.distance_km.get(from, to)
    }

    /// Hours from `from` to `to`.
    pub fn time(&self, from: usize, to: usize) -> f64 {
        self.time_h.get(from, to)
    }

    /// Number of nodes covered.
    pub fn size(&self) -> usize {
        self.distance_km.size()
    }

    /// The distance matrix in kilometres.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distance_km
    }
}
