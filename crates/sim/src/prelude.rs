//! Commonly used imports for convenience.
//!
//! This prelude module provides a convenient way to import the most commonly
//! used types in the aestivo library.
//!
//! # Example
//!
//! ```
//! use aestivo_sim::prelude::*;
//!
//! let g = GenotypeMatrix::from_rows(&[[1u8, 0], [0, 1]]).unwrap();
//! assert_eq!(g.n_individuals(), 1);
//! ```

pub use crate::base::{GenotypeMatrix, RandomStreams, SeedSource, WorkerPool};
pub use crate::errors::{self, Result, SimError};
pub use crate::evolution::reproduce;
pub use crate::simulation::{
    initialize, shift_compartments, Compartments, Configuration, Season, SeasonalSchedule,
    Simulation, SimulationBuilder,
};
