use aestivo_sim::simulation::Season;
use clap::Args;
use std::path::PathBuf;

use crate::defaults;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Output configuration path
    #[arg(short, long, default_value = defaults::OUTPUT_CONFIG)]
    pub output: PathBuf,

    /// Total population size (reproducing + aestivating)
    #[arg(short = 'n', long, default_value_t = defaults::TOTAL_SIZE)]
    pub total_size: usize,

    /// Number of generations
    #[arg(short = 'g', long, default_value_t = defaults::GENERATIONS)]
    pub generations: usize,

    /// Number of locus pairs
    #[arg(short = 'p', long, default_value_t = defaults::PAIRS)]
    pub pairs: usize,

    /// Initial allele frequency of every locus
    ///
    /// Ignored when --frequencies is given.
    #[arg(long, default_value_t = defaults::INITIAL_FREQUENCY)]
    pub frequency: f64,

    /// Per-locus initial frequencies, two per pair (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub frequencies: Option<Vec<f64>>,

    /// Recombination rate of every locus pair
    ///
    /// Ignored when --rates is given.
    #[arg(long, default_value_t = defaults::RECOMB_RATE)]
    pub recomb_rate: f64,

    /// Per-pair recombination rates (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub rates: Option<Vec<f64>>,

    /// Generations per season
    #[arg(long, default_value_t = defaults::HALF_PERIOD)]
    pub half_period: usize,

    /// Aestivating individuals during the wet season
    #[arg(long, default_value_t = defaults::WET_AESTIVATING)]
    pub wet_aestivating: usize,

    /// Aestivating individuals during the dry season
    #[arg(long, default_value_t = defaults::DRY_AESTIVATING)]
    pub dry_aestivating: usize,

    /// Season of generation 0 (wet, dry)
    #[arg(long, default_value = "wet")]
    pub start_in: Season,

    /// Worker threads for the simulation
    #[arg(short, long, default_value_t = defaults::WORKERS)]
    pub workers: usize,

    /// Record statistics every N generations
    #[arg(long, default_value_t = defaults::RECORD_EVERY)]
    pub record_every: usize,

    /// Random seed (default: wall clock)
    #[arg(long)]
    pub seed: Option<u64>,
}
