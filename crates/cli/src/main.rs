mod args;
mod commands;
pub mod defaults;
mod printing;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use args::InitArgs;
use commands::{init, run, stats};

/// Aestivo: A Seasonal Aestivation Simulator
///
/// This tool simulates how linkage between pairs of loci drifts in a
/// population where part of the individuals lie dormant (aestivate) through
/// each season instead of reproducing.
#[derive(Parser, Debug)]
#[command(name = "aestivo")]
#[command(author, version, about = "Simulates two-locus drift under seasonal aestivation", long_about = None)]
struct Cli {
    /// Number of worker threads (overrides the configured worker count)
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    ///
    /// RUST_LOG takes precedence when set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Initialize a new simulation configuration.
    ///
    /// Writes the parameters for a new experiment (population size, locus
    /// pairs, seasons) to a JSON file but does not run it yet.
    Init(Box<InitArgs>),

    /// Run a simulation from a configuration file.
    ///
    /// Executes the simulation generation by generation and writes
    /// per-compartment statistics as CSV.
    Run {
        /// Configuration path
        #[arg(short, long, default_value = defaults::OUTPUT_CONFIG)]
        config: PathBuf,

        /// Output CSV path
        #[arg(short, long, default_value = defaults::OUTPUT_STATS)]
        output: PathBuf,

        /// Override random seed (default: use configured seed)
        #[arg(long)]
        seed: Option<u64>,

        /// Override recording interval (default: use configured interval)
        #[arg(long)]
        record_every: Option<usize>,

        /// Show progress bar
        #[arg(long)]
        progress: bool,
    },

    /// Stats: Initialize generation 0 and show its statistics.
    Stats {
        /// Configuration path
        #[arg(short, long, default_value = defaults::OUTPUT_CONFIG)]
        config: PathBuf,

        /// Override random seed (default: use configured seed)
        #[arg(long)]
        seed: Option<u64>,

        /// Output format (pretty, json)
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
}

/// Initialize the tracing subscriber; logs go to stderr.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Init(args) => {
            init::init_simulation(&args, cli.threads)?;
        }
        Commands::Run {
            config,
            output,
            seed,
            record_every,
            progress,
        } => {
            run::run_simulation(&config, &output, seed, record_every, progress, cli.threads)?;
        }
        Commands::Stats {
            config,
            seed,
            format,
        } => {
            stats::show_stats(&config, seed, &format, cli.threads)?;
        }
    }

    Ok(())
}
