//! Dense square matrix of pairwise node values.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoutingError};

/// A dense n×n matrix stored in row-major order.
///
/// Used for both kilometres and hours; the unit is fixed by the owning
/// [`TravelMatrix`](super::TravelMatrix).
///
/// # Examples
///
/// ```
/// use cvrp_ga::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_fn(3, |i, j| (i as f64 - j as f64).abs());
/// assert_eq!(dm.get(0, 2), 2.0);
/// assert_eq!(dm.size(), 3);
/// assert!(dm.is_symmetric(1e-12));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a zero matrix with `size` rows and columns.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Fills every cell `(i, j)` with `f(i, j)`.
    pub fn from_fn<F>(size: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut data = Vec::with_capacity(size * size);
        for i in 0..size {
            for j in 0..size {
                data.push(f(i, j));
            }
        }
        Self { data, size }
    }

    /// Wraps an explicit row-major grid.
    ///
    /// Fails if `data.len() != size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != size * size {
            return Err(RoutingError::MatrixSizeMismatch {
                expected: size * size,
                actual: data.len(),
            });
        }
        Ok(Self { data, size })
    }

    /// Value from node `from` to node `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds. Callers resolve node codes
    /// through [`Instance::node_index`](crate::models::Instance::node_index)
    /// first, which guarantees valid indices.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the value from node `from` to node `to`.
    pub fn set(&mut self, from: usize, to: usize, value: f64) {
        self.data[from * self.size + to] = value;
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `get(i, j)` and `get(j, i)` agree within `tol`.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        (0..self.size).all(|i| {
            ((i + 1)..self.size).all(|j| (self.get(i, j) - self.get(j, i)).abs() <= tol)
        })
    }
}
