//! Repeated independent GA runs on one instance.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::error::Result;
use crate::ga::{GaConfig, GeneticAlgorithm};
use crate::models::Instance;

/// Summary of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentRun {
    /// Zero-based run number.
    pub run: usize,
    /// Seed the run's random source was created from.
    pub seed: u64,
    pub best_cost: f64,
    pub is_feasible: bool,
    pub history: Vec<f64>,
    pub elapsed: Duration,
}

/// Runs the GA `runs` times, run `i` seeded with `base_seed + i`.
///
/// Each run owns its random source and population; nothing carries over
/// between runs. `config.seed` is ignored.
///
/// # Examples
///
/// ```no_run
/// # fn demo(instance: &cvrp_ga::models::Instance) -> cvrp_ga::error::Result<()> {
/// use cvrp_ga::experiment::run_experiments;
/// use cvrp_ga::ga::GaConfig;
///
/// let runs = run_experiments(instance, &GaConfig::default(), 3, 100)?;
/// for r in &runs {
///     println!("run {} seed {}: {:.2}", r.run, r.seed, r.best_cost);
/// }
/// # Ok(())
/// # }
/// ```
pub fn run_experiments(
    instance: &Instance,
    config: &GaConfig,
    runs: usize,
    base_seed: u64,
) -> Result<Vec<ExperimentRun>> {
    let ga = GeneticAlgorithm::new(instance, config.clone())?;

    (0..runs)
        .map(|run| -> Result<ExperimentRun> {
            let seed = base_seed.wrapping_add(run as u64);
            let mut rng = StdRng::seed_from_u64(seed);

            let start = Instant::now();
            let result = ga.run_with_rng(&mut rng)?;
            let elapsed = start.elapsed();

            info!(run, seed, best_cost = result.best.cost(), ?elapsed, "experiment run done");
            Ok(ExperimentRun {
                run,
                seed,
                best_cost: result.best.cost(),
                is_feasible: result.best.is_feasible(),
                history: result.history,
                elapsed,
            })
        })
        .collect()
}
