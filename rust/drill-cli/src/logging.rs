//! `tracing` subscriber setup. Logs go to stderr so stdout stays clean for
//! results.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `drill_core=debug`.
pub const LOG_ENV: &str = "DRILL_LOG";

/// Filter used when `DRILL_LOG` is unset: `warn` everywhere, raised for the
/// drill crates by each `-v`.
pub fn default_directive(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("warn,drill_core={0},drill_cli={0}", level)
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
