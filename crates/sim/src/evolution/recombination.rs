//! Recombination between the two loci of a locus pair.
//!
//! Each locus pair carries one scalar rate `c`: the probability that the two
//! loci a parent transmits come from different chromosome copies. Pairs are
//! independent of each other, so there is no interference and no map.

use crate::base::Coin;
use crate::errors::Result;
use rand::Rng;

/// Which chromosome copy (0 or 1) of a parent transmits each locus of one
/// gamete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameteSource {
    /// Copy transmitting locus A.
    pub locus_a: u8,
    /// Copy transmitting locus B.
    pub locus_b: u8,
}

impl GameteSource {
    /// Sample the copies for one gamete.
    ///
    /// Locus A's copy is a fair coin flip; locus B comes from the same copy
    /// unless a single recombination draw fires, which switches it to the
    /// other copy.
    #[inline]
    pub fn sample<R: Rng + ?Sized>(rng: &mut R, fair: &Coin, recombination: &Coin) -> Self {
        let locus_a = fair.flip(rng);
        let locus_b = locus_a ^ recombination.flip(rng);
        Self { locus_a, locus_b }
    }

    /// True if the two loci came from different copies.
    #[inline]
    pub fn is_recombinant(&self) -> bool {
        self.locus_a != self.locus_b
    }
}

/// Validate per-pair recombination rates and build one coin per pair.
///
/// # Errors
/// Returns [`crate::errors::SimError::InvalidProbability`] for the first rate
/// outside [0, 1].
pub fn recombination_coins(rates: &[f64]) -> Result<Vec<Coin>> {
    rates
        .iter()
        .map(|&c| Coin::new("recombination rate", c))
        .collect()
}
