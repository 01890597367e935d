use drill_core::DrillError;
use thiserror::Error;

use crate::config::ConfigError;

/// Everything the front end can fail with, reported once from `main`.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Drill(#[from] DrillError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}
