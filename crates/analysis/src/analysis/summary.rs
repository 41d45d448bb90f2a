//! Per-compartment summaries of a generation.

use super::utils::defined_mean;
use super::{allele_frequencies, linkage_r};
use aestivo_sim::simulation::{Compartments, Season};
use aestivo_sim::{GenotypeMatrix, Result};
use serde::Serialize;
use tracing::debug;

/// Estimates for one genotype buffer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BufferSummary {
    /// Diploid individuals in the buffer
    pub individuals: usize,
    /// Allele-1 frequency per locus column
    pub frequencies: Vec<f64>,
    /// `r` per locus pair (`NaN` where undefined)
    pub linkage: Vec<f64>,
    /// Mean over all locus frequencies
    pub mean_frequency: f64,
    /// Mean `r²` over the pairs where `r` is defined
    pub mean_r_squared: f64,
    /// Pairs whose `r` is undefined
    pub undefined_pairs: usize,
}

impl BufferSummary {
    /// Estimate frequencies and linkage of a locus-pair buffer.
    ///
    /// # Errors
    /// Returns a shape error if the buffer has an odd number of columns.
    pub fn from_matrix(buffer: &GenotypeMatrix) -> Result<Self> {
        let frequencies = allele_frequencies(buffer);
        let linkage = linkage_r(buffer)?;
        let squared: Vec<f64> = linkage.iter().map(|r| r * r).collect();

        let (mean_frequency, _) = defined_mean(&frequencies);
        let (mean_r_squared, undefined_pairs) = defined_mean(&squared);

        Ok(Self {
            individuals: buffer.n_individuals(),
            frequencies,
            linkage,
            mean_frequency,
            mean_r_squared,
            undefined_pairs,
        })
    }
}

/// Summaries of both compartments at one generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationSummary {
    pub generation: usize,
    pub season: Season,
    pub reproducing: BufferSummary,
    pub aestivating: BufferSummary,
}

impl GenerationSummary {
    pub fn from_compartments(
        generation: usize,
        season: Season,
        compartments: &Compartments,
    ) -> Result<Self> {
        debug!(generation, %season, "summarizing compartments");
        Ok(Self {
            generation,
            season,
            reproducing: BufferSummary::from_matrix(compartments.reproducing())?,
            aestivating: BufferSummary::from_matrix(compartments.aestivating())?,
        })
    }

    /// Both compartment summaries, labelled.
    pub fn compartments(&self) -> [(&'static str, &BufferSummary); 2] {
        [
            ("reproducing", &self.reproducing),
            ("aestivating", &self.aestivating),
        ]
    }
}
