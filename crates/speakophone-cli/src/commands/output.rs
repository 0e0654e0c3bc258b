//! Shared loading and output helpers for commands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use speakophone_engine::{AudioBuffer, Synthesizer, WavResult};
use speakophone_spec::VoiceConfig;

/// Loads a voice config and builds its synthesizer.
pub(super) fn load_voice(path: &str) -> Result<Synthesizer> {
    let config = load_voice_config(path)?;
    Synthesizer::from_config(&config)
        .with_context(|| format!("Failed to load voice from {}", path))
}

/// Reads and validates a voice config.
pub(super) fn load_voice_config(path: &str) -> Result<VoiceConfig> {
    VoiceConfig::load(path).with_context(|| format!("Failed to read voice config: {}", path))
}

/// Encodes `audio` and writes it to `path`.
pub(super) fn write_audio(audio: &AudioBuffer, path: &Path) -> Result<WavResult> {
    let wav = WavResult::from_buffer(audio);
    wav.write_to(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(wav)
}

/// File for a phrase inside `dir`; path separators in the phrase are
/// replaced so the file always lands in `dir`.
pub(super) fn phrase_file(dir: &Path, phrase: &str, suffix: &str) -> PathBuf {
    let stem: String = phrase
        .trim()
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    dir.join(format!("{}{}.wav", stem, suffix))
}

/// One-line summary of an encoded clip.
pub(super) fn summary(wav: &WavResult) -> String {
    format!(
        "{} samples, {:.2}s, {} {}",
        wav.num_samples,
        wav.duration_seconds(),
        "hash".dimmed(),
        &wav.pcm_hash[..16]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phrase_file_stays_in_dir() {
        let dir = Path::new("out");
        assert_eq!(
            phrase_file(dir, " you rolled ", ""),
            PathBuf::from("out/you rolled.wav")
        );
        assert_eq!(
            phrase_file(dir, "../up", "_TESTOUT"),
            PathBuf::from("out/.._up_TESTOUT.wav")
        );
    }
}
