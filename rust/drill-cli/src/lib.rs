//! Drill CLI — the pieces shared by the `drill` front end and the two
//! fixed-input scripts.

pub mod colors;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;

pub use error::CliError;

/// Print `error: <err>` to stderr and exit with status 1.
pub fn fail(err: impl std::fmt::Display) -> ! {
    eprintln!("{} {}", colors::red("error:"), err);
    std::process::exit(1)
}
