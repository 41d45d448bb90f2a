//! One generation of random mating.
//!
//! Reproduction runs in two phases:
//!
//! 1. **Parent assignment.** For every offspring, two parents are drawn
//!    uniformly with replacement from the parental buffer using the shared
//!    parent stream. Selfing is allowed. This phase is sequential and
//!    finishes before any gamete is built, so every locus pair of an
//!    offspring shares the same parents.
//! 2. **Gamete transmission.** Each locus pair is filled independently and in
//!    parallel, with its own coin stream, writing only its two output
//!    columns.

use crate::base::{coin_stream, sample_parent, Coin, GenotypeMatrix, RandomStreams};
use crate::errors::{Result, SimError};
use crate::evolution::recombination::{recombination_coins, GameteSource};
use rand::Rng;
use tracing::{debug, info_span};

/// Whole-genome parentage for one generation of offspring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentAssignment {
    parent1: Vec<usize>,
    parent2: Vec<usize>,
}

impl ParentAssignment {
    /// Draw parents for `n_offspring` offspring from `n_parents` candidates.
    ///
    /// Draws alternate parent1/parent2 per offspring.
    ///
    /// # Errors
    /// Returns an invalid-argument error if `n_parents == 0`.
    pub fn sample<R: Rng + ?Sized>(
        rng: &mut R,
        n_offspring: usize,
        n_parents: usize,
    ) -> Result<Self> {
        if n_parents == 0 {
            return Err(SimError::invalid_argument(
                "parental buffer has no individuals to sample from",
            ));
        }
        let mut parent1 = Vec::with_capacity(n_offspring);
        let mut parent2 = Vec::with_capacity(n_offspring);
        for _ in 0..n_offspring {
            parent1.push(sample_parent(rng, n_parents));
            parent2.push(sample_parent(rng, n_parents));
        }
        Ok(Self { parent1, parent2 })
    }

    /// Number of offspring.
    pub fn len(&self) -> usize {
        self.parent1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent1.is_empty()
    }

    /// Parent contributing haplotype row `2j` of offspring `j`.
    pub fn parent1(&self) -> &[usize] {
        &self.parent1
    }

    /// Parent contributing haplotype row `2j + 1` of offspring `j`.
    pub fn parent2(&self) -> &[usize] {
        &self.parent2
    }
}

/// Produce the next generation from `parental`.
///
/// `parental` is in locus-pair layout and `recombination_rates` holds one rate
/// per pair. The result has `2 * n_offspring` rows and the same columns as
/// `parental`. The input is never modified.
///
/// Runs on the current rayon pool; wrap the call in
/// [`crate::base::WorkerPool::install`] to choose the worker count.
///
/// # Errors
/// - shape mismatch if the column count is odd or the rate vector length
///   differs from the pair count;
/// - invalid probability if a rate lies outside [0, 1];
/// - invalid argument if `parental` has no individuals.
pub fn reproduce(
    parental: &GenotypeMatrix,
    n_offspring: usize,
    recombination_rates: &[f64],
    streams: &mut RandomStreams,
) -> Result<GenotypeMatrix> {
    let pairs = parental.n_pairs()?;
    if recombination_rates.len() != pairs {
        return Err(SimError::shape(
            "recombination rates",
            pairs,
            recombination_rates.len(),
        ));
    }
    let recombination = recombination_coins(recombination_rates)?;
    let n_parents = parental.n_individuals();

    debug!(n_parents, n_offspring, pairs, "reproducing");

    let parents = ParentAssignment::sample(streams.parent_stream(), n_offspring, n_parents)?;
    let seeds = streams.task_seeds(pairs);
    let fair = Coin::fair();

    let mut offspring = GenotypeMatrix::zeros(n_offspring, parental.cols());
    info_span!("gamete_transmission", pairs, n_offspring).in_scope(|| {
        offspring.par_pairs_mut(|i, out_a, out_b| {
            let mut rng = coin_stream(seeds[i]);
            let (parent_a, parent_b) = parental.pair(i);
            transmit_pair(
                parent_a,
                parent_b,
                &parents,
                &fair,
                &recombination[i],
                &mut rng,
                out_a,
                out_b,
            );
        });
    });

    Ok(offspring)
}

/// Fill the two offspring columns of one locus pair.
///
/// Offspring `j` gets a gamete from `parent1[j]` in row `2j` and one from
/// `parent2[j]` in row `2j + 1`.
#[allow(clippy::too_many_arguments)]
fn transmit_pair<R: Rng + ?Sized>(
    parent_a: &[u8],
    parent_b: &[u8],
    parents: &ParentAssignment,
    fair: &Coin,
    recombination: &Coin,
    rng: &mut R,
    out_a: &mut [u8],
    out_b: &mut [u8],
) {
    for (j, (&p1, &p2)) in parents.parent1.iter().zip(&parents.parent2).enumerate() {
        let g1 = GameteSource::sample(rng, fair, recombination);
        let g2 = GameteSource::sample(rng, fair, recombination);

        out_a[2 * j] = parent_a[2 * p1 + g1.locus_a as usize];
        out_b[2 * j] = parent_b[2 * p1 + g1.locus_b as usize];

        out_a[2 * j + 1] = parent_a[2 * p2 + g2.locus_a as usize];
        out_b[2 * j + 1] = parent_b[2 * p2 + g2.locus_b as usize];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::WorkerPool;

    /// Parents whose copy 0 carries allele 0 at both loci and copy 1 carries
    /// allele 1 at both loci, so the transmitted combination reveals which
    /// copies were used.
    fn coupled_parents(n: usize, pairs: usize) -> GenotypeMatrix {
        let rows: Vec<Vec<u8>> = (0..2 * n).map(|r| vec![(r % 2) as u8; 2 * pairs]).collect();
        GenotypeMatrix::from_rows(&rows).unwrap()
    }

    #[test]
    fn test_parent_assignment_in_range() {
        let mut streams = RandomStreams::seeded(1);
        let parents = ParentAssignment::sample(streams.parent_stream(), 50, 7).unwrap();
        assert_eq!(parents.len(), 50);
        assert!(parents.parent1().iter().all(|&p| p < 7));
        assert!(parents.parent2().iter().all(|&p| p < 7));
    }

    #[test]
    fn test_parent_assignment_requires_parents() {
        let mut streams = RandomStreams::seeded(1);
        let err = ParentAssignment::sample(streams.parent_stream(), 3, 0).unwrap_err();
        assert!(matches!(err, SimError::InvalidArgument(_)));
    }

    #[test]
    fn test_output_shape() {
        let mut streams = RandomStreams::seeded(2);
        let parental = coupled_parents(10, 3);
        let out = reproduce(&parental, 25, &[0.1, 0.2, 0.3], &mut streams).unwrap();
        assert_eq!(out.rows(), 50);
        assert_eq!(out.cols(), 6);
    }

    #[test]
    fn test_zero_offspring() {
        let mut streams = RandomStreams::seeded(2);
        let parental = coupled_parents(4, 2);
        let out = reproduce(&parental, 0, &[0.5, 0.5], &mut streams).unwrap();
        assert_eq!(out.rows(), 0);
        assert_eq!(out.cols(), 4);
    }

    #[test]
    fn test_zero_pairs() {
        let mut streams = RandomStreams::seeded(2);
        let parental = GenotypeMatrix::zeros(4, 0);
        let out = reproduce(&parental, 6, &[], &mut streams).unwrap();
        assert_eq!(out.rows(), 12);
        assert_eq!(out.cols(), 0);
    }

    #[test]
    fn test_rate_length_mismatch() {
        let mut streams = RandomStreams::seeded(2);
        let parental = coupled_parents(4, 2);
        let err = reproduce(&parental, 4, &[0.5], &mut streams).unwrap_err();
        assert!(matches!(
            err,
            SimError::ShapeMismatch {
                expected: 2,
                found: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_odd_columns_rejected() {
        let mut streams = RandomStreams::seeded(2);
        let parental = GenotypeMatrix::zeros(4, 3);
        assert!(reproduce(&parental, 4, &[0.5], &mut streams).is_err());
    }

    #[test]
    fn test_invalid_rate_rejected() {
        let mut streams = RandomStreams::seeded(2);
        let parental = coupled_parents(4, 1);
        let err = reproduce(&parental, 4, &[1.5], &mut streams).unwrap_err();
        assert!(matches!(err, SimError::InvalidProbability { .. }));
    }

    #[test]
    fn test_empty_parental_rejected() {
        let mut streams = RandomStreams::seeded(2);
        let parental = GenotypeMatrix::zeros(0, 2);
        let err = reproduce(&parental, 4, &[0.5], &mut streams).unwrap_err();
        assert!(matches!(err, SimError::InvalidArgument(_)));
    }

    #[test]
    fn test_no_recombination_keeps_haplotypes_intact() {
        let mut streams = RandomStreams::seeded(3);
        let parental = coupled_parents(20, 4);
        let out = reproduce(&parental, 500, &[0.0; 4], &mut streams).unwrap();
        for i in 0..4 {
            let (a, b) = out.pair(i);
            assert_eq!(a, b, "pair {i} shows a recombinant gamete");
        }
    }

    #[test]
    fn test_full_recombination_always_switches_copy() {
        let mut streams = RandomStreams::seeded(3);
        let parental = coupled_parents(20, 2);
        let out = reproduce(&parental, 500, &[1.0, 1.0], &mut streams).unwrap();
        for i in 0..2 {
            let (a, b) = out.pair(i);
            assert!(a.iter().zip(b).all(|(x, y)| x != y));
        }
    }

    #[test]
    fn test_pairs_share_parents() {
        // Every individual is homozygous for its own tag in each column, so
        // the offspring allele identifies the parent regardless of copy.
        let n_parents = 2;
        let rows: Vec<Vec<u8>> = vec![vec![0; 6], vec![0; 6], vec![1; 6], vec![1; 6]];
        let parental = GenotypeMatrix::from_rows(&rows).unwrap();
        let mut streams = RandomStreams::seeded(9);
        let out = reproduce(&parental, 200, &[0.5; 3], &mut streams).unwrap();
        assert_eq!(parental.n_individuals(), n_parents);
        for r in 0..out.rows() {
            let row = out.row(r);
            assert!(row.iter().all(|&x| x == row[0]), "row {r} mixes parents: {row:?}");
        }
    }

    #[test]
    fn test_fixed_seed_independent_of_worker_count() {
        let parental = coupled_parents(30, 5);
        let rates = [0.0, 0.1, 0.25, 0.5, 1.0];

        let run = |workers: usize| {
            let pool = WorkerPool::new(workers).unwrap();
            let mut streams = RandomStreams::seeded(1234);
            pool.install(|| reproduce(&parental, 40, &rates, &mut streams))
                .unwrap()
        };

        assert_eq!(run(1), run(4));
    }

    #[test]
    fn test_input_not_modified() {
        let parental = coupled_parents(5, 2);
        let before = parental.clone();
        let mut streams = RandomStreams::seeded(4);
        let _ = reproduce(&parental, 8, &[0.3, 0.3], &mut streams).unwrap();
        assert_eq!(parental, before);
    }
}
