use aestivo_sim::simulation::{Configuration, SimulationBuilder};
use anyhow::{Context, Result};

use crate::args::InitArgs;
use crate::printing::print_parameters;

pub fn init_simulation(args: &InitArgs, threads: Option<usize>) -> Result<()> {
    println!("🧬 Aestivo - Seasonal Aestivation Simulator");
    println!("============================================\n");
    println!("Writing configuration: {}", args.output.display());

    let config = build_config(args, threads)?;
    print_parameters(&config);

    config
        .to_json_file(&args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!("\n✓ Configuration saved");
    println!("  Next: aestivo run -c {}", args.output.display());
    Ok(())
}

pub(crate) fn build_config(args: &InitArgs, threads: Option<usize>) -> Result<Configuration> {
    let frequencies = args
        .frequencies
        .clone()
        .unwrap_or_else(|| vec![args.frequency; 2 * args.pairs]);
    let rates = args
        .rates
        .clone()
        .unwrap_or_else(|| vec![args.recomb_rate; args.pairs]);

    let mut builder = SimulationBuilder::new()
        .total_size(args.total_size)
        .generations(args.generations)
        .initial_frequencies(frequencies)
        .recombination_rates(rates)
        .start_in(args.start_in)
        .seasonal(args.half_period, args.wet_aestivating, args.dry_aestivating)
        .workers(threads.unwrap_or(args.workers))
        .record_every(args.record_every);
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }

    builder.build_config().context("Invalid simulation parameters")
}
