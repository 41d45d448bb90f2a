//! Seasonal simulation driver.
//!
//! This module provides the generation loop that sequences the engine
//! operations: initialize once, then alternate reproduction of the
//! reproducing compartment with a compartment shift toward the seasonal
//! target.

use crate::base::{GenotypeMatrix, RandomStreams, SeedSource, WorkerPool};
use crate::errors::Result;
use crate::evolution::reproduce;
use crate::simulation::{
    initialize, shift_compartments, Compartments, Configuration, Season,
};
use tracing::{debug, info};

/// Main simulation engine.
#[derive(Debug)]
pub struct Simulation {
    /// Current reproducing and aestivating buffers
    compartments: Compartments,
    /// Validated configuration
    config: Configuration,
    /// Worker pool used for every parallel phase
    pool: WorkerPool,
    /// Parent stream and coin-stream seeder
    streams: RandomStreams,
    /// Generation counter
    generation: usize,
}

impl Simulation {
    /// Create a simulation and its generation-0 population.
    ///
    /// # Errors
    /// Returns the first configuration error, or an error from the worker
    /// pool or the initializer.
    pub fn new(config: Configuration) -> Result<Self> {
        config.validate()?;

        let pool = WorkerPool::new(config.execution.workers)?;
        let mut streams = RandomStreams::new(SeedSource::from(config.execution.seed));

        let population = pool.install(|| {
            initialize(
                &config.population.initial_frequencies,
                config.population.total_size,
                &mut streams,
            )
        })?;
        let compartments = Compartments::split(&population, config.schedule.aestivating_at(0))?;

        info!(
            total = config.population.total_size,
            pairs = config.population.n_pairs(),
            workers = pool.workers(),
            "simulation initialized"
        );

        Ok(Self {
            compartments,
            config,
            pool,
            streams,
            generation: 0,
        })
    }

    /// Get the current compartments.
    pub fn compartments(&self) -> &Compartments {
        &self.compartments
    }

    /// Reproducing compartment of the current generation.
    pub fn reproducing(&self) -> &GenotypeMatrix {
        self.compartments.reproducing()
    }

    /// Aestivating compartment of the current generation.
    pub fn aestivating(&self) -> &GenotypeMatrix {
        self.compartments.aestivating()
    }

    /// Get the current generation number.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Season of the current generation.
    pub fn season(&self) -> Season {
        self.config.schedule.season_at(self.generation)
    }

    /// Get reference to the configuration.
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// The worker pool, for running estimators with the same worker count.
    pub fn pool(&self) -> &WorkerPool {
        &self.pool
    }

    /// Advance simulation by one generation.
    pub fn step(&mut self) -> Result<()> {
        let next = self.generation + 1;
        let target = self.config.schedule.aestivating_at(next);
        let rates = &self.config.population.recombination_rates;
        let streams = &mut self.streams;
        let current = &self.compartments;

        // 1. Replace the reproducing compartment with its offspring
        let n_offspring = current.reproducing().n_individuals();
        let offspring = self
            .pool
            .install(|| reproduce(current.reproducing(), n_offspring, rates, streams))?;

        // 2. Move individuals toward this generation's aestivating size
        let shifted = self
            .pool
            .install(|| shift_compartments(&offspring, current.aestivating(), target))?;

        debug!(
            generation = next,
            reproducing = shifted.reproducing().n_individuals(),
            aestivating = shifted.aestivating().n_individuals(),
            "generation complete"
        );

        self.compartments = shifted;
        self.generation = next;
        Ok(())
    }

    /// Run simulation for the configured number of generations.
    pub fn run(&mut self) -> Result<()> {
        let remaining = self
            .config
            .execution
            .total_generations
            .saturating_sub(self.generation);
        self.run_for(remaining)
    }

    /// Run simulation for a specific number of generations.
    pub fn run_for(&mut self, generations: usize) -> Result<()> {
        for _ in 0..generations {
            self.step()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::SimulationBuilder;

    /// Helper function to create a test simulation with standard configuration.
    ///
    /// Creates a simulation with:
    /// - Total size: 40
    /// - Generations: 12
    /// - 3 locus pairs
    /// - Seasons of 3 generations, 5 aestivating in the wet, 30 in the dry
    /// - Seed: 42 (reproducible)
    fn create_test_simulation() -> Simulation {
        SimulationBuilder::new()
            .total_size(40)
            .generations(12)
            .uniform_pairs(3, 0.5, 0.1)
            .seasonal(3, 5, 30)
            .workers(2)
            .seed(42)
            .build()
            .unwrap()
    }

    #[test]
    fn test_simulation_new() {
        let sim = create_test_simulation();
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.season(), Season::Wet);
        assert_eq!(sim.reproducing().n_individuals(), 35);
        assert_eq!(sim.aestivating().n_individuals(), 5);
        assert_eq!(sim.compartments().n_pairs(), 3);
    }

    #[test]
    fn test_simulation_step_follows_schedule() {
        let mut sim = create_test_simulation();
        for g in 1..=12 {
            sim.step().unwrap();
            assert_eq!(sim.generation(), g);
            let expected = sim.config().schedule.aestivating_at(g);
            assert_eq!(sim.aestivating().n_individuals(), expected);
            assert_eq!(sim.compartments().total_individuals(), 40);
        }
    }

    #[test]
    fn test_simulation_run() {
        let mut sim = create_test_simulation();
        sim.run().unwrap();
        assert_eq!(sim.generation(), 12);
        sim.run().unwrap();
        assert_eq!(sim.generation(), 12);
    }

    #[test]
    fn test_simulation_run_for() {
        let mut sim = create_test_simulation();
        sim.run_for(4).unwrap();
        assert_eq!(sim.generation(), 4);
        assert_eq!(sim.season(), Season::Dry);
    }

    #[test]
    fn test_same_seed_same_trajectory() {
        let mut a = create_test_simulation();
        let mut b = create_test_simulation();
        a.run().unwrap();
        b.run().unwrap();
        assert_eq!(a.compartments(), b.compartments());
    }

    #[test]
    fn test_aestivating_individuals_survive_dormancy_unchanged() {
        // Constant schedule: aestivating individuals never move and are never
        // resampled.
        let mut sim = SimulationBuilder::new()
            .total_size(20)
            .generations(5)
            .uniform_pairs(2, 0.5, 0.5)
            .constant_aestivating(8)
            .seed(3)
            .build()
            .unwrap();
        let dormant = sim.aestivating().clone();
        sim.run().unwrap();
        assert_eq!(sim.aestivating(), &dormant);
    }
}
