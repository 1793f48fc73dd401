//! Hyperparameters of the evolutionary loop.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoutingError};

/// Genetic algorithm configuration.
///
/// Missing fields take their default when deserialized, so a partial JSON
/// or TOML table is enough.
///
/// # Examples
///
/// ```
/// use cvrp_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(40)
///     .with_generations(100)
///     .with_seed(7);
/// assert_eq!(config.population_size, 40);
/// assert_eq!(config.elite_count, 5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Individuals per generation.
    pub population_size: usize,
    /// Number of generations; also the length of the cost history.
    pub generations: usize,
    /// Probability of producing a child by crossover instead of cloning.
    pub crossover_rate: f64,
    /// Probability of a swap mutation per child.
    pub mutation_rate: f64,
    /// Best individuals copied unchanged into the next generation.
    pub elite_count: usize,
    /// Parents are drawn from this many top-ranked individuals.
    pub parent_pool_size: usize,
    /// Seed for the random source; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 30,
            generations: 200,
            crossover_rate: 0.8,
            mutation_rate: 0.2,
            elite_count: 5,
            parent_pool_size: 15,
            seed: None,
        }
    }
}

impl GaConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.elite_count = n;
        self
    }

    pub fn with_parent_pool_size(mut self, n: usize) -> Self {
        self.parent_pool_size = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks the parameters are usable.
    ///
    /// An `elite_count` at or above `population_size` is allowed: the whole
    /// population is then carried over and no parents are drawn, so the
    /// parent pool is only checked when offspring are actually bred.
    ///
    /// # Errors
    ///
    /// [`RoutingError::InvalidConfig`] when the population is empty, when
    /// offspring are bred but fewer than two distinct parents can be drawn,
    /// or when a rate lies outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(RoutingError::InvalidConfig(
                "population_size must be at least 1".to_string(),
            ));
        }
        if self.population_size > self.elite_count {
            if self.population_size < 2 {
                return Err(RoutingError::InvalidConfig(format!(
                    "population_size {} cannot supply two parents for {} offspring",
                    self.population_size,
                    self.population_size - self.elite_count
                )));
            }
            if self.parent_pool_size < 2 {
                return Err(RoutingError::InvalidConfig(format!(
                    "parent_pool_size must be at least 2, got {}",
                    self.parent_pool_size
                )));
            }
        }
        for (name, rate) in [
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(RoutingError::InvalidConfig(format!(
                    "{name} must be in [0, 1], got {rate}"
                )));
            }
        }
        Ok(())
    }
}
