//! Builder pattern for creating simulations.
//!
//! Provides a fluent API for configuring and creating simulations with
//! sensible defaults and comprehensive validation.

use crate::errors::{Result, SimError};
use crate::simulation::{
    Configuration, ExecutionConfig, PopulationConfig, Season, SeasonalSchedule, Simulation,
};

/// Builder for constructing Simulation instances with a fluent API.
///
/// # Examples
///
/// ```
/// use aestivo_sim::simulation::SimulationBuilder;
///
/// // Two locus pairs, wet seasons with 10 dormant individuals and dry
/// // seasons with 150, alternating every 6 generations.
/// let mut sim = SimulationBuilder::new()
///     .total_size(200)
///     .generations(24)
///     .initial_frequencies(vec![0.5, 0.5, 0.2, 0.8])
///     .recombination_rates(vec![0.01, 0.5])
///     .seasonal(6, 10, 150)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// sim.run().unwrap();
/// assert_eq!(sim.compartments().total_individuals(), 200);
/// ```
#[derive(Debug, Clone)]
pub struct SimulationBuilder {
    // Required parameters
    total_size: Option<usize>,
    generations: Option<usize>,

    // Locus pairs (default: none)
    initial_frequencies: Vec<f64>,
    recombination_rates: Vec<f64>,

    schedule: SeasonalSchedule, // Default: nobody aestivates
    workers: Option<usize>,     // Default: available parallelism
    record_every: usize,        // Default: 1
    seed: Option<u64>,          // Default: None (wall clock)
}

impl Default for SimulationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationBuilder {
    /// Create a new simulation builder with default values.
    pub fn new() -> Self {
        Self {
            total_size: None,
            generations: None,
            initial_frequencies: Vec::new(),
            recombination_rates: Vec::new(),
            schedule: SeasonalSchedule::constant(0),
            workers: None,
            record_every: 1,
            seed: None,
        }
    }

    /// Set the total population size across both compartments (required).
    pub fn total_size(mut self, size: usize) -> Self {
        self.total_size = Some(size);
        self
    }

    /// Set the number of generations to run (required).
    pub fn generations(mut self, generations: usize) -> Self {
        self.generations = Some(generations);
        self
    }

    /// Set the generation-0 frequency of every locus, two per pair.
    pub fn initial_frequencies(mut self, frequencies: Vec<f64>) -> Self {
        self.initial_frequencies = frequencies;
        self
    }

    /// Set one recombination rate per locus pair.
    pub fn recombination_rates(mut self, rates: Vec<f64>) -> Self {
        self.recombination_rates = rates;
        self
    }

    /// Use `pairs` identical locus pairs.
    ///
    /// # Arguments
    /// * `pairs` - Number of locus pairs
    /// * `frequency` - Generation-0 frequency of both loci
    /// * `rate` - Recombination rate of each pair
    pub fn uniform_pairs(mut self, pairs: usize, frequency: f64, rate: f64) -> Self {
        self.initial_frequencies = vec![frequency; 2 * pairs];
        self.recombination_rates = vec![rate; pairs];
        self
    }

    /// Alternate wet and dry seasons every `half_period` generations.
    pub fn seasonal(
        mut self,
        half_period: usize,
        wet_aestivating: usize,
        dry_aestivating: usize,
    ) -> Self {
        self.schedule = SeasonalSchedule {
            start_in: self.schedule.start_in,
            ..SeasonalSchedule::new(half_period, wet_aestivating, dry_aestivating)
        };
        self
    }

    /// Keep the aestivating compartment at a fixed size.
    pub fn constant_aestivating(mut self, aestivating: usize) -> Self {
        self.schedule = SeasonalSchedule::constant(aestivating);
        self
    }

    /// Season of generation 0.
    pub fn start_in(mut self, season: Season) -> Self {
        self.schedule.start_in = season;
        self
    }

    /// Set the worker count.
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Record statistics every N generations.
    pub fn record_every(mut self, every: usize) -> Self {
        self.record_every = every;
        self
    }

    /// Set the random seed for reproducibility.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Assemble and validate the configuration without starting a run.
    pub fn build_config(self) -> Result<Configuration> {
        let total_size = self
            .total_size
            .ok_or(SimError::MissingRequired("total_size"))?;
        let total_generations = self
            .generations
            .ok_or(SimError::MissingRequired("generations"))?;
        let workers = self.workers.unwrap_or_else(|| {
            std::thread::available_parallelism().map_or(1, |n| n.get())
        });

        let config = Configuration {
            execution: ExecutionConfig {
                workers,
                total_generations,
                record_every: self.record_every,
                seed: self.seed,
            },
            population: PopulationConfig {
                total_size,
                initial_frequencies: self.initial_frequencies,
                recombination_rates: self.recombination_rates,
            },
            schedule: self.schedule,
        };
        config.validate()?;
        Ok(config)
    }

    /// Build the simulation.
    pub fn build(self) -> Result<Simulation> {
        Simulation::new(self.build_config()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_minimal() {
        let sim = SimulationBuilder::new()
            .total_size(10)
            .generations(5)
            .build()
            .unwrap();
        assert_eq!(sim.compartments().total_individuals(), 10);
        assert_eq!(sim.compartments().n_pairs(), 0);
        assert_eq!(sim.aestivating().n_individuals(), 0);
    }

    #[test]
    fn test_builder_missing_total_size() {
        let err = SimulationBuilder::new().generations(5).build().unwrap_err();
        match err {
            SimError::MissingRequired(param) => assert_eq!(param, "total_size"),
            _ => panic!("Expected MissingRequired error"),
        }
    }

    #[test]
    fn test_builder_missing_generations() {
        let err = SimulationBuilder::new().total_size(5).build().unwrap_err();
        match err {
            SimError::MissingRequired(param) => assert_eq!(param, "generations"),
            _ => panic!("Expected MissingRequired error"),
        }
    }

    #[test]
    fn test_builder_invalid_rate() {
        let result = SimulationBuilder::new()
            .total_size(10)
            .generations(5)
            .uniform_pairs(1, 0.5, 2.0)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_keeps_start_season() {
        let config = SimulationBuilder::new()
            .total_size(10)
            .generations(5)
            .start_in(Season::Dry)
            .seasonal(2, 1, 6)
            .build_config()
            .unwrap();
        assert_eq!(config.schedule.start_in, Season::Dry);
        assert_eq!(config.schedule.aestivating_at(0), 6);
    }

    #[test]
    fn test_builder_all_options() {
        let config = SimulationBuilder::new()
            .total_size(100)
            .generations(50)
            .initial_frequencies(vec![0.1, 0.9])
            .recombination_rates(vec![0.25])
            .seasonal(4, 5, 80)
            .workers(3)
            .record_every(10)
            .seed(7)
            .build_config()
            .unwrap();
        assert_eq!(config.execution.workers, 3);
        assert_eq!(config.execution.record_every, 10);
        assert_eq!(config.execution.seed, Some(7));
        assert_eq!(config.population.n_pairs(), 1);
        assert_eq!(config.schedule.half_period, 4);
    }
}
