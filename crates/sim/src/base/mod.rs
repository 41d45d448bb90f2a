//! Base types shared by every operation.
//!
//! This module provides the genotype buffer, the random sources and samplers,
//! and the worker pool used by the simulation engine.

mod genotype;
mod parallel;
mod random;

pub use genotype::GenotypeMatrix;
pub use parallel::WorkerPool;
pub use random::{coin_stream, sample_parent, Coin, RandomStreams, SeedSource};
