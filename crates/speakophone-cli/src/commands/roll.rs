//! Roll command implementation
//!
//! Rolls dice and narrates the outcome from a directory of recorded phrases.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;

use speakophone_engine::rng::{create_roll_rng, entropy_rng};
use speakophone_engine::{roll_transcript, DiceRoller};
use speakophone_spec::RollerConfig;

use super::output::{summary, write_audio};

/// Run the roll command
///
/// # Arguments
/// * `config_path` - Path to the phrase config
/// * `dice` - Number of dice
/// * `size` - Sides per die
/// * `count` - Number of independent rolls
/// * `seed` - Optional base seed; the operating system seeds each roll otherwise
/// * `out` - Output WAV path, numbered per roll when `count` exceeds one
///
/// # Returns
/// Exit code: 0 on success
pub fn run(
    config_path: &str,
    dice: u32,
    size: u32,
    count: u32,
    seed: Option<u32>,
    out: &str,
) -> Result<ExitCode> {
    if count == 0 {
        bail!("--count must be at least 1");
    }

    let config = RollerConfig::load(config_path)
        .with_context(|| format!("Failed to read roller config: {}", config_path))?;
    let roller = DiceRoller::from_config(&config)
        .with_context(|| format!("Failed to load phrases for {}", config_path))?;

    info!(?seed, dice, size, count, "rolling");
    for index in 0..count {
        // Each roll gets its own stream so roll N is the same whatever the count.
        let mut rng = match seed {
            Some(seed) => create_roll_rng(seed, index),
            None => entropy_rng(),
        };
        let narration = roller.assemble_roll_with_result(&mut rng, dice, size)?;

        let rolls: Vec<String> = narration.rolls.iter().map(u32::to_string).collect();
        println!("{} {}", "Rolled:".cyan().bold(), rolls.join(", "));
        println!(
            "  {}",
            roll_transcript(dice, size, &narration.rolls).dimmed()
        );

        let path = numbered_output(Path::new(out), index, count);
        let wav = write_audio(&narration.audio, &path)?;
        println!("{} {} ({})", "Wrote".green(), path.display(), summary(&wav));
    }
    Ok(ExitCode::SUCCESS)
}

/// Output path for roll `index` of `count`: `out` itself for a single roll,
/// otherwise `out` with a 1-based `_<n>` inserted before the extension.
fn numbered_output(out: &Path, index: u32, count: u32) -> PathBuf {
    if count == 1 {
        return out.to_path_buf();
    }
    let stem = out
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match out.extension() {
        Some(ext) => format!("{}_{}.{}", stem, index + 1, ext.to_string_lossy()),
        None => format!("{}_{}", stem, index + 1),
    };
    out.with_file_name(name)
}
