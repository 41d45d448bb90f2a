//! Simulation engine and compartment management.
//!
//! This module provides the seasonal generation loop and the operations it
//! sequences for a population split into reproducing and aestivating
//! compartments.

//! Re-exports
//!
//! The most commonly used simulation types are re-exported here for
//! convenience so consumers can import them from `aestivo_sim::simulation`.
//!
//! - `Simulation`: the engine that runs generations, alternating reproduction
//!   with compartment shifts.
//! - `Compartments`: the reproducing and aestivating buffers of a generation.
//! - `SimulationBuilder`: fluent builder for constructing `Simulation` instances
//!   with sensible defaults and validation.

pub mod builder;
pub mod compartments;
pub mod configs;
pub mod engine;
pub mod initialization;
pub mod schedule;

pub use builder::SimulationBuilder;
pub use compartments::{shift_compartments, Compartments};
pub use configs::{Configuration, ExecutionConfig, PopulationConfig};
pub use engine::Simulation;
pub use initialization::initialize;
pub use schedule::{Season, SeasonalSchedule};
