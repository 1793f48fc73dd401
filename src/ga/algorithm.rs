//! Generational evolutionary loop.
//!
//! # Generation step
//!
//! 1. Rank the population by cost (ascending, stable).
//! 2. Record the best cost.
//! 3. Copy the `elite_count` best individuals unchanged (the whole
//!    population when `elite_count >= population_size`).
//! 4. Until the population is full: draw two distinct parents from the
//!    `parent_pool_size` best, cross them over with probability
//!    `crossover_rate` (otherwise clone the first), mutate, evaluate.
//!
//! The loop runs a fixed number of generations; there is no early stop and
//! no diversity injection.

use rand::rngs::StdRng;
use rand::seq::{index, SliceRandom};
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::{order_crossover, repair, swap_mutation, GaConfig, Individual};
use crate::error::Result;
use crate::models::{Instance, Route, Solution};

/// Outcome of one GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Lowest-cost individual of the final population.
    pub best: Individual,
    /// Best cost at the start of each generation.
    pub history: Vec<f64>,
}

/// Genetic algorithm over one instance.
///
/// The population lives only for the duration of a run; the instance is
/// borrowed read-only.
///
/// # Examples
///
/// ```
/// use cvrp_ga::distance::{DistanceMatrix, TravelMatrix};
/// use cvrp_ga::ga::{GaConfig, GeneticAlgorithm};
/// use cvrp_ga::models::{Client, CostCoefficients, Depot, Instance, Vehicle};
///
/// #[rustfmt::skip]
/// let km = vec![
///     0.0, 1.0, 2.0, 3.0,
///     1.0, 0.0, 1.0, 2.0,
///     2.0, 1.0, 0.0, 1.0,
///     3.0, 2.0, 1.0, 0.0,
/// ];
/// let inst = Instance::new(
///     Depot::new(0, "D", 0.0, 0.0),
///     vec![
///         Client::new(1, "A", 0.0, 0.0, 3.0),
///         Client::new(2, "B", 0.0, 0.0, 4.0),
///         Client::new(3, "C", 0.0, 0.0, 5.0),
///     ],
///     vec![Vehicle::new(1, "V1", 10.0, 100.0)],
///     CostCoefficients::new(100.0, 1.0, 0.0),
///     TravelMatrix::from_distances(DistanceMatrix::from_data(4, km).unwrap(), 30.0),
/// )
/// .unwrap();
///
/// let config = GaConfig::default()
///     .with_population_size(10)
///     .with_generations(20)
///     .with_seed(42);
/// let result = GeneticAlgorithm::new(&inst, config).unwrap().run().unwrap();
/// assert_eq!(result.history.len(), 20);
/// assert!(result.best.is_feasible());
/// ```
#[derive(Debug, Clone)]
pub struct GeneticAlgorithm<'a> {
    instance: &'a Instance,
    config: GaConfig,
}

impl<'a> GeneticAlgorithm<'a> {
    /// Creates a GA after validating `config`.
    pub fn new(instance: &'a Instance, config: GaConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { instance, config })
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Runs with a random source seeded from `config.seed`, or from the OS
    /// when no seed is set.
    pub fn run(&self) -> Result<GaResult> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.run_with_rng(&mut rng)
    }

    /// Runs with the given random source; `config.seed` is ignored.
    pub fn run_with_rng<R: Rng>(&self, rng: &mut R) -> Result<GaResult> {
        info!(
            clients = self.instance.num_clients(),
            vehicles = self.instance.vehicles().len(),
            population = self.config.population_size,
            generations = self.config.generations,
            "starting genetic algorithm"
        );

        let mut population = self.init_population(rng)?;
        let mut history = Vec::with_capacity(self.config.generations);

        for generation in 0..self.config.generations {
            rank(&mut population);
            let best = &population[0];
            history.push(best.cost());
            debug!(
                generation,
                best_cost = best.cost(),
                feasible = best.is_feasible(),
                "generation ranked"
            );

            population = self.next_generation(&population, rng)?;
        }

        rank(&mut population);
        let best = population.swap_remove(0);
        info!(
            best_cost = best.cost(),
            feasible = best.is_feasible(),
            routes = best.evaluation().routes_used,
            "genetic algorithm finished"
        );

        Ok(GaResult { best, history })
    }

    /// Random individual: shuffled clients dealt round-robin onto one route
    /// per vehicle.
    pub fn create_individual<R: Rng>(&self, rng: &mut R) -> Result<Individual> {
        let mut codes: Vec<&str> = self.instance.clients().iter().map(|c| c.code()).collect();
        codes.shuffle(rng);

        let k = self.instance.vehicles().len().max(1);
        let mut groups: Vec<Vec<&str>> = vec![Vec::new(); k];
        for (i, code) in codes.into_iter().enumerate() {
            groups[i % k].push(code);
        }

        let depot = self.instance.depot().code();
        let routes = groups
            .into_iter()
            .map(|group| Route::closed(depot, group))
            .collect();
        repair(Solution::new(routes), self.instance)
    }

    /// `population_size` fresh, evaluated individuals.
    pub fn init_population<R: Rng>(&self, rng: &mut R) -> Result<Vec<Individual>> {
        (0..self.config.population_size)
            .map(|_| self.create_individual(rng))
            .collect()
    }

    /// Builds the generation after a ranked `population`.
    fn next_generation<R: Rng>(&self, population: &[Individual], rng: &mut R) -> Result<Vec<Individual>> {
        let size = self.config.population_size;
        let elite = self.config.elite_count.min(size);
        let mut next: Vec<Individual> = Vec::with_capacity(size);
        next.extend(population[..elite].iter().cloned());

        let pool = &population[..self.config.parent_pool_size.min(population.len())];
        while next.len() < size {
            let picks = index::sample(rng, pool.len(), 2);
            let p1 = pool[picks.index(0)].solution();
            let p2 = pool[picks.index(1)].solution();

            let child = if rng.random::<f64>() < self.config.crossover_rate {
                order_crossover(p1, p2, self.instance, rng)?
            } else {
                p1.clone()
            };
            let child = swap_mutation(&child, self.instance, self.config.mutation_rate, rng)?;
            next.push(repair(child, self.instance)?);
        }

        Ok(next)
    }
}

/// Sorts ascending by cost; ties keep their current order.
fn rank(population: &mut [Individual]) {
    population.sort_by(|a, b| a.cost().total_cmp(&b.cost()));
}
