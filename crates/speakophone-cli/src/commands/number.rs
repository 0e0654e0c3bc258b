//! Number command implementation

use anyhow::Result;
use std::process::ExitCode;

use speakophone_engine::number_to_words;

/// Run the number command
///
/// Prints the English rendering of `value`, the same key the dice narrator
/// uses to find number recordings.
pub fn run(value: i128) -> Result<ExitCode> {
    println!("{}", number_to_words(value));
    Ok(ExitCode::SUCCESS)
}
