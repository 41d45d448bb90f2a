//! Simulation parameters and configuration.
//!
//! This module provides the parameter structures for a seasonal aestivation
//! run: execution settings, the population and its locus pairs, and the
//! seasonal schedule of the aestivating compartment.

use crate::errors::{check_probability, Result, SimError};
use crate::simulation::SeasonalSchedule;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The master configuration struct.
/// Can be deserialized from a file to fully reproduce a simulation setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub execution: ExecutionConfig,
    pub population: PopulationConfig,
    pub schedule: SeasonalSchedule,
}

/// High-level run parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// Worker threads used by every parallel loop
    pub workers: usize,
    /// Total number of generations to simulate
    pub total_generations: usize,
    /// Record statistics every N generations
    #[serde(default = "default_record_every")]
    pub record_every: usize,
    /// Optional RNG seed for reproducibility
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_record_every() -> usize {
    1
}

/// The population and its locus pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationConfig {
    /// Diploid individuals across both compartments
    pub total_size: usize,
    /// Generation-0 allele frequency of every locus (locus A and B of each pair)
    pub initial_frequencies: Vec<f64>,
    /// Recombination rate of every locus pair
    pub recombination_rates: Vec<f64>,
}

impl PopulationConfig {
    /// Number of locus pairs.
    pub fn n_pairs(&self) -> usize {
        self.recombination_rates.len()
    }
}

impl Configuration {
    /// Check every parameter and cross-parameter constraint.
    ///
    /// # Errors
    /// Returns [`SimError::Config`] naming the first violated constraint, or
    /// [`SimError::InvalidProbability`] for an out-of-range rate or frequency.
    pub fn validate(&self) -> Result<()> {
        let exec = &self.execution;
        let pop = &self.population;
        let schedule = &self.schedule;

        if exec.workers == 0 {
            return Err(SimError::config("workers must be at least 1"));
        }
        if exec.record_every == 0 {
            return Err(SimError::config("record_every must be at least 1"));
        }
        if pop.total_size == 0 {
            return Err(SimError::config("total_size must be at least 1"));
        }
        if pop.initial_frequencies.len() != 2 * pop.recombination_rates.len() {
            return Err(SimError::config(format!(
                "expected {} initial frequencies (two per locus pair), found {}",
                2 * pop.recombination_rates.len(),
                pop.initial_frequencies.len()
            )));
        }
        for &p in &pop.initial_frequencies {
            check_probability("initial frequency", p)?;
        }
        for &c in &pop.recombination_rates {
            check_probability("recombination rate", c)?;
        }
        if schedule.half_period == 0 {
            return Err(SimError::config("half_period must be at least 1"));
        }
        // At least one individual must stay reproductive to have parents.
        if schedule.max_aestivating() >= pop.total_size {
            return Err(SimError::config(format!(
                "aestivating size {} leaves no reproducing individuals out of {}",
                schedule.max_aestivating(),
                pop.total_size
            )));
        }
        Ok(())
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Write the configuration as pretty-printed JSON.
    pub fn to_json_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }
}
