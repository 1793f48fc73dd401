//! Solution evaluation: representative fleet limits and the penalized
//! cost function.

mod evaluator;
mod fleet;

pub use evaluator::{evaluate, evaluate_route, Evaluation, RouteCost, RouteMetrics};
pub use fleet::FleetLimits;
