//! Evolution module providing reproduction and recombination.
//!
//! This module implements the generational step of the simulator:
//! - **Reproduction**: whole-genome parent assignment followed by parallel
//!   gamete transmission per locus pair
//! - **Recombination**: a single rate per locus pair deciding whether the two
//!   loci of a gamete come from different chromosome copies

pub mod recombination;
pub mod reproduction;

pub use recombination::{recombination_coins, GameteSource};
pub use reproduction::{reproduce, ParentAssignment};
