//! Handlers behind the `drill` subcommands. Each returns the text to print.

use std::path::{Path, PathBuf};

use drill_core::{bubble_sort_by, DrillError, Sieve, Value};
use tracing::info;

use crate::config::DrillConfig;
use crate::error::CliError;
use crate::output::{render_count, render_list, OutputFormat};

/// Sort `tokens` (or the configured input when empty) and render the result.
pub fn run_sort(
    tokens: &[String],
    config: &DrillConfig,
    format: OutputFormat,
) -> Result<String, CliError> {
    let mut values: Vec<Value> = if tokens.is_empty() {
        config.sort.input.clone()
    } else {
        tokens.iter().map(|t| Value::parse(t)).collect()
    };

    let stats = bubble_sort_by(&mut values, Value::try_cmp)?;
    info!(
        len = values.len(),
        passes = stats.passes,
        swaps = stats.swaps,
        "sorted input"
    );
    Ok(render_list(&values, format)?)
}

/// Sieve up to `bound` (or the configured bound) and render the primes or
/// their count.
pub fn run_primes(
    bound: Option<u64>,
    count_only: bool,
    config: &DrillConfig,
    format: OutputFormat,
) -> Result<String, CliError> {
    let bound = bound.unwrap_or(config.primes.bound);
    if bound > config.primes.max_bound {
        return Err(DrillError::invalid_argument(format!(
            "bound {} exceeds primes.max_bound ({})",
            bound, config.primes.max_bound
        ))
        .into());
    }

    let sieve = Sieve::new(bound)?;
    info!(bound, primes = sieve.count(), "sieved");
    if count_only {
        return Ok(render_count(sieve.count(), format)?);
    }
    let primes: Vec<u64> = sieve.primes().collect();
    Ok(render_list(&primes, format)?)
}

/// Write a default `drill.toml` into `dir`.
pub fn run_init(dir: &Path, force: bool) -> Result<PathBuf, CliError> {
    let path = DrillConfig::write_default(dir, force)?;
    info!(path = %path.display(), "wrote default config");
    Ok(path)
}
