//! Random sources and the low-level samplers built on them.
//!
//! Two roles are kept apart:
//!
//! - the **parent stream**, a single high-quality [`StdRng`] consumed
//!   sequentially (parent sampling shapes the variance of drift, so it gets
//!   the strong generator);
//! - the **coin streams**, one fast [`Xoshiro256PlusPlus`] per parallel task,
//!   used for every Bernoulli draw (initial alleles, chromosome-copy choice,
//!   recombination).
//!
//! Coin-stream seeds are drawn from a dedicated seeder before a parallel phase
//! starts, so with a [`SeedSource::Fixed`] seed the output does not depend on
//! the worker count or on scheduling order.

use crate::errors::{check_probability, Result, SimError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Bernoulli, Distribution};
use rand_xoshiro::Xoshiro256PlusPlus;
use std::time::{SystemTime, UNIX_EPOCH};

/// Mixed into fixed seeds so the coin seeder never shares state with the
/// parent stream.
const COIN_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Where the random streams take their seed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedSource {
    /// Seed from the wall clock (and OS entropy for the parent stream).
    /// Runs are not reproducible.
    #[default]
    WallClock,
    /// Fixed seed; identical inputs give identical outputs.
    Fixed(u64),
}

impl From<Option<u64>> for SeedSource {
    fn from(seed: Option<u64>) -> Self {
        seed.map_or(SeedSource::WallClock, SeedSource::Fixed)
    }
}

/// The parent stream and the coin-stream seeder for one simulation.
#[derive(Debug, Clone)]
pub struct RandomStreams {
    source: SeedSource,
    parent: StdRng,
    coin_seeder: Xoshiro256PlusPlus,
}

impl RandomStreams {
    /// Create streams from a seed source.
    pub fn new(source: SeedSource) -> Self {
        let (parent, coin_seeder) = match source {
            SeedSource::Fixed(seed) => (
                StdRng::seed_from_u64(seed),
                Xoshiro256PlusPlus::seed_from_u64(seed ^ COIN_SEED_SALT),
            ),
            SeedSource::WallClock => (
                StdRng::from_rng(&mut rand::rng()),
                Xoshiro256PlusPlus::seed_from_u64(wall_clock_nanos()),
            ),
        };
        Self {
            source,
            parent,
            coin_seeder,
        }
    }

    /// Shorthand for `RandomStreams::new(SeedSource::Fixed(seed))`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SeedSource::Fixed(seed))
    }

    /// The seed source these streams were created from.
    pub fn source(&self) -> SeedSource {
        self.source
    }

    /// The shared parent-sampling stream.
    pub fn parent_stream(&mut self) -> &mut StdRng {
        &mut self.parent
    }

    /// Draw one coin-stream seed per parallel task.
    ///
    /// Task `i` should build its generator with [`coin_stream`] from
    /// `seeds[i]`.
    pub fn task_seeds(&mut self, n_tasks: usize) -> Vec<u64> {
        (0..n_tasks).map(|_| self.coin_seeder.random()).collect()
    }
}

impl Default for RandomStreams {
    fn default() -> Self {
        Self::new(SeedSource::WallClock)
    }
}

/// Build the fast per-task generator for a seed from [`RandomStreams::task_seeds`].
#[inline]
pub fn coin_stream(seed: u64) -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::seed_from_u64(seed)
}

fn wall_clock_nanos() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos() as u64)
}

/// Sample a parent index uniformly from `0..n_parents`.
///
/// Callers must ensure `n_parents > 0`.
#[inline]
pub fn sample_parent<R: Rng + ?Sized>(rng: &mut R, n_parents: usize) -> usize {
    rng.random_range(0..n_parents)
}

/// A Bernoulli sampler returning 0 or 1.
///
/// `p = 0` never fires and `p = 1` always fires.
#[derive(Debug, Clone, Copy)]
pub struct Coin {
    p: f64,
    dist: Bernoulli,
}

impl Coin {
    /// Create a coin with success probability `p`.
    ///
    /// # Errors
    /// Returns [`SimError::InvalidProbability`] if `p` is
    /// outside [0, 1].
    pub fn new(name: &'static str, p: f64) -> Result<Self> {
        check_probability(name, p)?;
        let dist =
            Bernoulli::new(p).map_err(|_| SimError::InvalidProbability { name, value: p })?;
        Ok(Self { p, dist })
    }

    /// A fair coin, used to pick which chromosome copy a parent transmits.
    pub fn fair() -> Self {
        Self {
            p: 0.5,
            dist: Bernoulli::new(0.5).expect("0.5 is a valid probability"),
        }
    }

    /// Success probability.
    #[inline]
    pub fn p(&self) -> f64 {
        self.p
    }

    /// Flip once.
    #[inline]
    pub fn flip<R: Rng + ?Sized>(&self, rng: &mut R) -> u8 {
        self.dist.sample(rng) as u8
    }
}
