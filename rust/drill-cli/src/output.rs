//! Text and JSON rendering of command results.

use std::fmt::Display;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `[a, b, c]`
    #[default]
    Text,
    /// A JSON array
    Json,
}

/// Render a sequence as `[a, b, c]` or as a JSON array.
pub fn render_list<T>(items: &[T], format: OutputFormat) -> Result<String, serde_json::Error>
where
    T: Display + Serialize,
{
    match format {
        OutputFormat::Text => {
            let parts: Vec<String> = items.iter().map(|item| item.to_string()).collect();
            Ok(format!("[{}]", parts.join(", ")))
        }
        OutputFormat::Json => serde_json::to_string(items),
    }
}

/// Render a single count.
pub fn render_count(count: usize, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(count.to_string()),
        OutputFormat::Json => serde_json::to_string(&count),
    }
}
