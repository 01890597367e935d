//! Drill — sort values and sieve primes from the command line.

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser as ClapParser, Subcommand};
use drill_cli::colors::status_label;
use drill_cli::commands::{run_init, run_primes, run_sort};
use drill_cli::config::{current_dir, ConfigError, DrillConfig};
use drill_cli::output::OutputFormat;
use drill_cli::{fail, logging, CliError};

#[derive(ClapParser)]
#[command(name = "drill", version, about = "Bubble sort and prime sieve drills")]
struct Cli {
    /// Path to a drill.toml (default: search the current directory and its ancestors)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bubble-sort the given values (ints, floats, booleans, or strings)
    Sort {
        /// Values to sort (default: sort.input from config)
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,

        /// Output format (default: output.format from config)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// List the primes up to a bound with the Sieve of Eratosthenes
    Primes {
        /// Upper bound, inclusive (default: primes.bound from config)
        bound: Option<u64>,

        /// Print how many primes there are instead of listing them
        #[arg(long)]
        count: bool,

        /// Output format (default: output.format from config)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Create a drill.toml config file in the current directory
    Init {
        /// Overwrite an existing drill.toml
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(out) => println!("{}", out),
        Err(e) => fail(e),
    }
}

fn run(cli: Cli) -> Result<String, CliError> {
    match cli.command {
        Commands::Sort { values, format } => {
            let config = load_config(cli.config.as_deref())?;
            run_sort(&values, &config, format.unwrap_or(config.output.format))
        }
        Commands::Primes {
            bound,
            count,
            format,
        } => {
            let config = load_config(cli.config.as_deref())?;
            run_primes(bound, count, &config, format.unwrap_or(config.output.format))
        }
        Commands::Init { force } => {
            let path = run_init(&current_dir()?, force)?;
            Ok(format!("{} {}", status_label("Created"), path.display()))
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<DrillConfig, ConfigError> {
    match path {
        Some(path) => DrillConfig::load_from(path),
        None => DrillConfig::load(),
    }
}
