//! Shared default values for simulation configuration.
//! These values are used by the `init` command (via clap).
//!
//! The seasonal defaults keep the 100:1 ratio between wet and dry breeding
//! populations of the reference scenario at a tenth of its scale.

pub const OUTPUT_CONFIG: &str = "config.json";
pub const OUTPUT_STATS: &str = "stats.csv";

pub const TOTAL_SIZE: usize = 3030;
pub const GENERATIONS: usize = 72;
pub const RECORD_EVERY: usize = 3;
pub const WORKERS: usize = 1;

// Locus pairs
pub const PAIRS: usize = 10;
pub const INITIAL_FREQUENCY: f64 = 0.5;
pub const RECOMB_RATE: f64 = 0.01;

// Seasons
pub const HALF_PERIOD: usize = 6;
pub const WET_AESTIVATING: usize = 30;
pub const DRY_AESTIVATING: usize = 3000;
