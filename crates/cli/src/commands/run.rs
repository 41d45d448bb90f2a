use aestivo_analysis::{BufferSummary, GenerationSummary};
use aestivo_sim::simulation::Simulation;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use tracing::info;

use super::load_config;
use crate::printing::{print_parameters, print_summary};

pub fn run_simulation(
    config_path: &Path,
    output: &Path,
    seed_override: Option<u64>,
    record_every_override: Option<usize>,
    show_progress: bool,
    threads: Option<usize>,
) -> Result<()> {
    println!("🧬 Aestivo - Running Simulation");
    println!("============================================\n");

    let mut config = load_config(config_path, threads)?;
    if let Some(seed) = seed_override {
        config.execution.seed = Some(seed);
    }
    if let Some(every) = record_every_override {
        config.execution.record_every = every;
    }

    println!("Configuration:");
    print_parameters(&config);

    let total_generations = config.execution.total_generations;
    let record_every = config.execution.record_every;

    let mut sim = Simulation::new(config)
        .map_err(|e| anyhow::anyhow!("Failed to initialize simulation: {e}"))?;
    let pairs = sim.compartments().n_pairs();

    let mut csv = csv_header(pairs);
    let initial = summarize(&sim)?;
    push_rows(&mut csv, &initial);

    println!("\nRunning {total_generations} generations...");
    let pb = if show_progress {
        let pb = ProgressBar::new(total_generations as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {per_sec}",
                )?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut last = initial;
    for generation in 1..=total_generations {
        sim.step()
            .map_err(|e| anyhow::anyhow!("Generation {generation}: {e}"))?;

        if generation % record_every == 0 || generation == total_generations {
            let summary = summarize(&sim)?;
            push_rows(&mut csv, &summary);
            info!(generation, "recorded statistics");
            last = summary;
        }

        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = pb {
        pb.finish_with_message("Done");
    }

    std::fs::write(output, csv)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    print_summary(&last);
    println!("\n✓ Simulation complete!");
    println!("  Final generation: {}", sim.generation());
    println!("  Statistics: {}", output.display());
    Ok(())
}

/// Summarize both compartments on the simulation's own worker pool.
pub(crate) fn summarize(sim: &Simulation) -> Result<GenerationSummary> {
    sim.pool()
        .install(|| {
            GenerationSummary::from_compartments(sim.generation(), sim.season(), sim.compartments())
        })
        .context("Failed to compute statistics")
}

fn csv_header(pairs: usize) -> String {
    let mut header = String::from(
        "generation,season,compartment,individuals,mean_frequency,mean_r_squared,undefined_pairs",
    );
    for i in 0..pairs {
        header.push_str(&format!(",freq_a{i},freq_b{i}"));
    }
    for i in 0..pairs {
        header.push_str(&format!(",r{i}"));
    }
    header.push('\n');
    header
}

fn push_rows(csv: &mut String, summary: &GenerationSummary) {
    for (name, buffer) in summary.compartments() {
        push_row(csv, summary, name, buffer);
    }
}

fn push_row(csv: &mut String, summary: &GenerationSummary, name: &str, buffer: &BufferSummary) {
    csv.push_str(&format!(
        "{},{},{},{},{},{},{}",
        summary.generation,
        summary.season,
        name,
        buffer.individuals,
        buffer.mean_frequency,
        buffer.mean_r_squared,
        buffer.undefined_pairs
    ));
    for value in buffer.frequencies.iter().chain(&buffer.linkage) {
        csv.push_str(&format!(",{value}"));
    }
    csv.push('\n');
}
