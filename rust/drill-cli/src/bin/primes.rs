//! Prints every prime up to 1000.

use drill_cli::output::{render_list, OutputFormat};
use drill_cli::{fail, logging, CliError};
use drill_core::primes_up_to;

fn main() {
    logging::init(0);

    match run(1000) {
        Ok(line) => println!("{}", line),
        Err(e) => fail(e),
    }
}

fn run(bound: u64) -> Result<String, CliError> {
    let primes = primes_up_to(bound)?;
    Ok(render_list(&primes, OutputFormat::Text)?)
}
