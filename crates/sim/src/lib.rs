//! # Simulation Crate
//!
//! The `aestivo-sim` crate provides the core engine for two-locus simulations
//! of a population with a dormant (aestivating) compartment. It includes the
//! genotype buffer, the random streams and worker pool, the reproduction
//! operator, and the seasonal simulation driver.

pub mod base;
pub mod errors;
pub mod evolution;
pub mod prelude;
pub mod simulation;

pub use base::GenotypeMatrix;
pub use errors::{Result, SimError};
