//! Say command implementation
//!
//! Speaks a single phrase to a WAV file, or runs an interactive session that
//! reads phrases from stdin.

use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use speakophone_engine::{SpeechError, Synthesizer};

use super::output::{load_voice, phrase_file, summary, write_audio};

/// Run the say command
///
/// # Arguments
/// * `voice` - Path to the voice config
/// * `text` - Phrase to speak; `None` starts an interactive session
/// * `out` - Output WAV path for `text`
/// * `out_dir` - Directory for phrases saved during a session
///
/// # Returns
/// Exit code: 0 on success, 1 if `text` contains an unknown word
pub fn run(voice: &str, text: Option<&str>, out: Option<&str>, out_dir: &str) -> Result<ExitCode> {
    let synth = load_voice(voice)?;

    let Some(text) = text else {
        let stdin = io::stdin();
        let stdout = io::stdout();
        session(&synth, stdin.lock(), stdout.lock(), Path::new(out_dir))?;
        return Ok(ExitCode::SUCCESS);
    };

    let audio = match synth.synthesize(text) {
        Ok(audio) => audio,
        Err(e @ SpeechError::UnknownWord { .. }) => {
            eprintln!("{} {}", "Cannot say that:".red().bold(), e);
            return Ok(ExitCode::from(1));
        }
        Err(e) => return Err(e).context("Synthesis failed"),
    };

    match out {
        Some(out) => {
            let wav = write_audio(&audio, Path::new(out))?;
            println!("{} {} ({})", "Wrote".green(), out, summary(&wav));
        }
        None => {
            let wav = speakophone_engine::WavResult::from_buffer(&audio);
            println!("{} {}", "Synthesized".green(), summary(&wav));
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Reads phrases from `input` until a blank line or end of input.
///
/// A line starting with `>` is saved as `<phrase>.wav` in `out_dir`; any
/// other line is synthesized and summarized. Words the voice cannot say are
/// reported and the session continues.
///
/// Returns the number of phrases spoken.
pub fn session<R, W>(synth: &Synthesizer, input: R, mut output: W, out_dir: &Path) -> Result<usize>
where
    R: BufRead,
    W: Write,
{
    let mut spoken = 0;
    let mut lines = input.lines();
    loop {
        write!(output, "Say: ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read input")?;
        let line = line.trim();
        if line.is_empty() {
            break;
        }

        let (phrase, save) = match line.strip_prefix('>') {
            Some(rest) => (rest.trim(), true),
            None => (line, false),
        };

        let audio = match synth.synthesize(phrase) {
            Ok(audio) => audio,
            Err(e) if e.is_request_error() => {
                writeln!(output, "{}", e.to_string().red())?;
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        if save {
            if phrase.is_empty() {
                writeln!(output, "{}", "nothing to save".yellow())?;
                continue;
            }
            let path = phrase_file(out_dir, phrase, "");
            let wav = write_audio(&audio, &path)?;
            writeln!(output, "saved {} ({})", path.display(), summary(&wav))?;
        } else {
            let wav = speakophone_engine::WavResult::from_buffer(&audio);
            writeln!(output, "{}", summary(&wav))?;
        }
        spoken += 1;
    }
    writeln!(output)?;
    Ok(spoken)
}
