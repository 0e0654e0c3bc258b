//! Bake command implementation
//!
//! Synthesizes the basic dice-roll phrase set with an allophone voice, giving
//! the narrator a complete set of recordings to start from.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use speakophone_engine::{Synthesizer, BASIC_DICE_PHRASES};

use super::output::{load_voice, phrase_file, write_audio};

/// Run the bake command
///
/// Writes one `<phrase>.wav` per basic dice phrase into `out_dir`.
///
/// # Returns
/// Exit code: 0 if every phrase was written, 1 otherwise
pub fn run(voice: &str, out_dir: &str) -> Result<ExitCode> {
    let synth = load_voice(voice)?;
    let failed = bake(&synth, Path::new(out_dir))?;

    if failed.is_empty() {
        println!(
            "{} {} phrases to {}",
            "Baked".green().bold(),
            BASIC_DICE_PHRASES.len(),
            out_dir
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "{} {} of {} phrases could not be spoken: {}",
            "Warning:".yellow().bold(),
            failed.len(),
            BASIC_DICE_PHRASES.len(),
            failed.join(", ")
        );
        Ok(ExitCode::from(1))
    }
}

/// Writes every phrase the voice can speak; returns the ones it cannot.
pub(crate) fn bake(synth: &Synthesizer, out_dir: &Path) -> Result<Vec<&'static str>> {
    let mut failed = Vec::new();
    for phrase in BASIC_DICE_PHRASES {
        match synth.synthesize(phrase) {
            Ok(audio) => {
                let path = phrase_file(out_dir, phrase, "");
                write_audio(&audio, &path)?;
                println!("  {} {}", "+".green(), path.display());
            }
            Err(e) if e.is_request_error() => {
                println!("  {} {}: {}", "!".red(), phrase, e);
                failed.push(phrase);
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(failed)
}
