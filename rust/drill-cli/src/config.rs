//! Configuration file parsing for `drill.toml`.
//!
//! Searches the starting directory then its ancestors, falling back to
//! `~/.config/drill/drill.toml` if no project-level file is found. Every
//! field has a default, so a partial file only overrides what it names.

use std::path::{Path, PathBuf};

use drill_core::Value;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::output::OutputFormat;

pub const CONFIG_FILE: &str = "drill.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read '{}': {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid toml in '{}': {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("'{}' already exists (pass --force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),
}

#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
#[serde(default)]
pub struct DrillConfig {
    pub sort: SortSection,
    pub primes: PrimesSection,
    pub output: OutputSection,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct SortSection {
    /// Sequence sorted by `drill sort` when no values are given.
    pub input: Vec<Value>,
}

impl Default for SortSection {
    fn default() -> Self {
        Self {
            input: [1, 3, 5, 7, 9, 2, 4, 6, 8, 0]
                .into_iter()
                .map(Value::Int)
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PrimesSection {
    /// Bound used by `drill primes` when none is given.
    pub bound: u64,
    /// Largest bound `drill primes` accepts; the sieve holds one flag per candidate.
    pub max_bound: u64,
}

impl Default for PrimesSection {
    fn default() -> Self {
        Self {
            bound: 1000,
            max_bound: 100_000_000,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct OutputSection {
    pub format: OutputFormat,
}

impl DrillConfig {
    /// Load config for the current directory. Returns `Default` when no file
    /// is found.
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self::discover(&current_dir()?)?
            .map(|(_path, cfg)| cfg)
            .unwrap_or_default())
    }

    /// Find the nearest `drill.toml` at or above `start`, then the global one.
    pub fn discover(start: &Path) -> Result<Option<(PathBuf, Self)>, ConfigError> {
        let mut dir = start.to_path_buf();
        loop {
            let candidate = dir.join(CONFIG_FILE);
            if candidate.is_file() {
                let cfg = Self::load_from(&candidate)?;
                return Ok(Some((candidate, cfg)));
            }
            if !dir.pop() {
                break;
            }
        }
        if let Some(home) = home_dir() {
            let global = home.join(".config").join("drill").join(CONFIG_FILE);
            if global.is_file() {
                let cfg = Self::load_from(&global)?;
                return Ok(Some((global, cfg)));
            }
        }
        debug!(start = %start.display(), "no drill.toml found, using defaults");
        Ok(None)
    }

    /// Load config from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "loaded config");
        Ok(cfg)
    }

    /// Parse a TOML string directly.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Write the default template to `dir/drill.toml`.
    pub fn write_default(dir: &Path, force: bool) -> Result<PathBuf, ConfigError> {
        let path = dir.join(CONFIG_FILE);
        if path.exists() && !force {
            return Err(ConfigError::AlreadyExists(path));
        }
        std::fs::write(&path, Self::default_template()).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    /// Generate a default `drill.toml` template.
    pub fn default_template() -> &'static str {
        r#"# Drill Configuration

[sort]
# Sorted by `drill sort` when no values are passed.
input = [1, 3, 5, 7, 9, 2, 4, 6, 8, 0]

[primes]
# Bound used by `drill primes` when none is passed.
bound = 1000
# Refuse larger bounds.
max_bound = 100_000_000

[output]
# "text" or "json"
format = "text"
"#
    }
}

/// The process working directory, as a config error on failure.
pub fn current_dir() -> Result<PathBuf, ConfigError> {
    std::env::current_dir().map_err(|source| ConfigError::Io {
        path: PathBuf::from("."),
        source,
    })
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
