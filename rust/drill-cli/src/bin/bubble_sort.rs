//! Bubble-sorts a fixed ten-element sequence and prints the result.

use drill_cli::output::{render_list, OutputFormat};
use drill_cli::{fail, logging, CliError};
use drill_core::sorted;

fn main() {
    logging::init(0);

    match run(vec![1, 3, 5, 7, 9, 2, 4, 6, 8, 0]) {
        Ok(line) => println!("{}", line),
        Err(e) => fail(e),
    }
}

fn run(nums: Vec<i64>) -> Result<String, CliError> {
    let nums = sorted(nums)?;
    Ok(render_list(&nums, OutputFormat::Text)?)
}
