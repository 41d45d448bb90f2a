//! Reproducing and aestivating compartments.
//!
//! The population is split into individuals that reproduce this generation
//! and individuals that are dormant (aestivating). Between generations the
//! aestivating compartment is resized by moving whole individuals across,
//! never by resampling, so total population size is conserved.

use crate::base::GenotypeMatrix;
use crate::errors::{Result, SimError};
use tracing::debug;

/// The two compartment buffers of one generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compartments {
    reproducing: GenotypeMatrix,
    aestivating: GenotypeMatrix,
}

impl Compartments {
    /// Pair two compartment buffers.
    ///
    /// # Errors
    /// Returns a shape error if the buffers have different column counts or
    /// are not in locus-pair layout.
    pub fn new(reproducing: GenotypeMatrix, aestivating: GenotypeMatrix) -> Result<Self> {
        reproducing.n_pairs()?;
        if reproducing.cols() != aestivating.cols() {
            return Err(SimError::shape(
                "aestivating compartment columns",
                reproducing.cols(),
                aestivating.cols(),
            ));
        }
        Ok(Self {
            reproducing,
            aestivating,
        })
    }

    /// Split a whole population: the first `total - aestivating` individuals
    /// reproduce, the rest aestivate.
    ///
    /// # Errors
    /// Returns an invalid-argument error if `aestivating` exceeds the number of
    /// individuals, or a shape error if the columns are not in pairs.
    pub fn split(population: &GenotypeMatrix, aestivating: usize) -> Result<Self> {
        let total = population.n_individuals();
        if aestivating > total {
            return Err(SimError::invalid_argument(format!(
                "cannot place {aestivating} of {total} individuals in aestivation"
            )));
        }
        let boundary = total - aestivating;
        Self::new(
            population.slice_individuals(0..boundary)?,
            population.slice_individuals(boundary..total)?,
        )
    }

    pub fn reproducing(&self) -> &GenotypeMatrix {
        &self.reproducing
    }

    pub fn aestivating(&self) -> &GenotypeMatrix {
        &self.aestivating
    }

    /// Consume into `(reproducing, aestivating)`.
    pub fn into_parts(self) -> (GenotypeMatrix, GenotypeMatrix) {
        (self.reproducing, self.aestivating)
    }

    /// Number of individuals in both compartments.
    pub fn total_individuals(&self) -> usize {
        self.reproducing.n_individuals() + self.aestivating.n_individuals()
    }

    /// Number of locus pairs shared by both compartments.
    pub fn n_pairs(&self) -> usize {
        self.reproducing.cols() / 2
    }
}

/// Resize the aestivating compartment to `new_aestivating` individuals.
///
/// The new reproducing size is `R + A - new_aestivating`, so the total is
/// conserved. Individuals keep their genotype rows and move as whole
/// haplotype pairs:
///
/// - growing: the front `R'` reproducing individuals stay; all current
///   aestivating individuals stay, followed by the tail of the old
///   reproducing buffer;
/// - shrinking: all reproducing individuals stay, followed by the tail of the
///   old aestivating buffer; the front `new_aestivating` aestivating
///   individuals stay;
/// - unchanged: both buffers are copied through.
///
/// Draws no random numbers. Runs on the current rayon pool, one task per
/// column of each output buffer.
///
/// # Errors
/// Returns a shape error if the two buffers disagree on columns or are not in
/// locus-pair layout, and an invalid-argument error if `new_aestivating`
/// exceeds the total population.
pub fn shift_compartments(
    reproducing: &GenotypeMatrix,
    aestivating: &GenotypeMatrix,
    new_aestivating: usize,
) -> Result<Compartments> {
    reproducing.n_pairs()?;
    if reproducing.cols() != aestivating.cols() {
        return Err(SimError::shape(
            "aestivating compartment columns",
            reproducing.cols(),
            aestivating.cols(),
        ));
    }

    let current_rep = reproducing.n_individuals();
    let current_aes = aestivating.n_individuals();
    let total = current_rep + current_aes;
    if new_aestivating > total {
        return Err(SimError::invalid_argument(format!(
            "target aestivating size {new_aestivating} exceeds total population {total}"
        )));
    }
    let new_rep = total - new_aestivating;
    let cols = reproducing.cols();

    debug!(
        current_rep,
        current_aes, new_rep, new_aestivating, "shifting compartments"
    );

    if new_aestivating == current_aes {
        debug!("aestivating size unchanged, passing compartments through");
        return Ok(Compartments {
            reproducing: reproducing.clone(),
            aestivating: aestivating.clone(),
        });
    }

    let mut rep_out = GenotypeMatrix::zeros(new_rep, cols);
    let mut aes_out = GenotypeMatrix::zeros(new_aestivating, cols);

    if new_aestivating > current_aes {
        let kept = 2 * new_rep;
        rep_out.par_columns_mut(|c, col| {
            col.copy_from_slice(&reproducing.column(c)[..kept]);
        });
        aes_out.par_columns_mut(|c, col| {
            let (front, back) = col.split_at_mut(2 * current_aes);
            front.copy_from_slice(aestivating.column(c));
            back.copy_from_slice(&reproducing.column(c)[kept..]);
        });
    } else {
        let kept = 2 * new_aestivating;
        rep_out.par_columns_mut(|c, col| {
            let (front, back) = col.split_at_mut(2 * current_rep);
            front.copy_from_slice(reproducing.column(c));
            back.copy_from_slice(&aestivating.column(c)[kept..]);
        });
        aes_out.par_columns_mut(|c, col| {
            col.copy_from_slice(&aestivating.column(c)[..kept]);
        });
    }

    Ok(Compartments {
        reproducing: rep_out,
        aestivating: aes_out,
    })
}
