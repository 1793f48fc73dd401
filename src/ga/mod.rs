//! Genetic algorithm for single-depot CVRP.
//!
//! - [`flatten`] — Solution → client permutation (the chromosome)
//! - [`build_routes`] — Greedy capacity/range-aware permutation → routes
//! - [`order_crossover`], [`swap_mutation`] — Operators on the permutation
//! - [`GeneticAlgorithm`] — Generational loop with elitism and truncated
//!   parent selection

mod algorithm;
mod builder;
mod chromosome;
mod config;
mod operators;

pub use algorithm::{GaResult, GeneticAlgorithm};
pub use builder::build_routes;
pub use chromosome::{flatten, repair, Individual};
pub use config::GaConfig;
pub use operators::{order_crossover, order_crossover_with_cuts, swap_mutation};
