use aestivo_sim::simulation::Simulation;
use anyhow::{Context, Result};
use std::path::Path;

use super::load_config;
use super::run::summarize;
use crate::printing::{print_parameters, print_summary};

/// Initialize generation 0 from a configuration and report its statistics.
pub fn show_stats(
    config_path: &Path,
    seed_override: Option<u64>,
    format: &str,
    threads: Option<usize>,
) -> Result<()> {
    let mut config = load_config(config_path, threads)?;
    if let Some(seed) = seed_override {
        config.execution.seed = Some(seed);
    }

    let sim = Simulation::new(config.clone())
        .map_err(|e| anyhow::anyhow!("Failed to initialize simulation: {e}"))?;
    let summary = summarize(&sim)?;

    match format {
        "pretty" => {
            println!("🧬 Aestivo - Generation 0");
            println!("============================================");
            print_parameters(&config);
            print_summary(&summary);
        }
        "json" => {
            let json =
                serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
            println!("{json}");
        }
        other => anyhow::bail!("Unknown format: {other}. Available: pretty, json"),
    }
    Ok(())
}
