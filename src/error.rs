//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

/// Errors raised for malformed instances, routes, or configurations.
///
/// Constraint violations (capacity or range exceeded) are not errors; they
/// are reported through [`Evaluation::is_feasible`](crate::evaluation::Evaluation).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoutingError {
    #[error("instance has no vehicles")]
    EmptyFleet,

    #[error("unknown node code `{0}`")]
    UnknownNode(String),

    #[error("duplicate node code `{0}`")]
    DuplicateCode(String),

    #[error("invalid vehicle `{code}`: {reason}")]
    InvalidVehicle { code: String, reason: &'static str },

    #[error("invalid client `{code}`: {reason}")]
    InvalidClient { code: String, reason: &'static str },

    #[error("invalid cost coefficients: {0}")]
    InvalidCosts(&'static str),

    #[error("travel matrix has {actual} nodes, expected {expected}")]
    MatrixSizeMismatch { expected: usize, actual: usize },

    #[error("invalid {matrix} matrix entry ({from}, {to}): {reason}")]
    InvalidMatrix {
        matrix: &'static str,
        from: usize,
        to: usize,
        reason: &'static str,
    },

    #[error("cut points ({a}, {b}) invalid for {len} genes")]
    InvalidCutPoints { a: usize, b: usize, len: usize },

    #[error("chromosomes differ in length ({left} vs {right})")]
    ChromosomeMismatch { left: usize, right: usize },

    #[error("parents are not permutations of the same clients")]
    GeneSetMismatch,

    #[error("invalid GA configuration: {0}")]
    InvalidConfig(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, RoutingError>;
