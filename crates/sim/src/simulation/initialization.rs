//! Generation-0 population.

use crate::base::{coin_stream, Coin, GenotypeMatrix, RandomStreams};
use crate::errors::Result;
use tracing::debug;

/// Build the generation-0 buffer for `n_individuals` individuals.
///
/// Column `i` is filled with independent Bernoulli draws of probability
/// `frequencies[i]`. No linkage is imposed: any disequilibrium between loci
/// at generation 0 is sampling noise. The result is in single-locus layout;
/// with an even number of frequencies it can be read directly as a
/// locus-pair buffer.
///
/// Runs on the current rayon pool, one task per locus column.
///
/// # Errors
/// Returns [`crate::errors::SimError::InvalidProbability`] if a frequency lies
/// outside [0, 1].
pub fn initialize(
    frequencies: &[f64],
    n_individuals: usize,
    streams: &mut RandomStreams,
) -> Result<GenotypeMatrix> {
    let coins: Vec<Coin> = frequencies
        .iter()
        .map(|&p| Coin::new("initial frequency", p))
        .collect::<Result<_>>()?;

    debug!(loci = frequencies.len(), n_individuals, "initializing population");

    let seeds = streams.task_seeds(coins.len());
    let mut population = GenotypeMatrix::zeros(n_individuals, coins.len());
    population.par_columns_mut(|i, column| {
        let mut rng = coin_stream(seeds[i]);
        for allele in column.iter_mut() {
            *allele = coins[i].flip(&mut rng);
        }
    });
    Ok(population)
}
