pub mod init;
pub mod run;
pub mod stats;

use aestivo_sim::simulation::Configuration;
use anyhow::{Context, Result};
use std::path::Path;

/// Load a configuration file, applying a worker-count override.
pub(crate) fn load_config(path: &Path, workers: Option<usize>) -> Result<Configuration> {
    let mut config = Configuration::from_json_file(path).with_context(|| {
        format!(
            "Failed to load configuration from {}. Did you run 'aestivo init' first?",
            path.display()
        )
    })?;
    if let Some(workers) = workers {
        config.execution.workers = workers;
    }
    config.validate().context("Invalid configuration")?;
    Ok(config)
}
