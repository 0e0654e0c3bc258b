//! Dump command implementation
//!
//! Writes every allophone clip of a voice, after conditioning and hooks, so
//! the prepared clips can be auditioned.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use tracing::debug;

use speakophone_engine::{ClipTable, SampleLibrary};

use super::output::{load_voice_config, phrase_file, write_audio};

/// Suffix appended to dumped clip names.
pub const DUMP_SUFFIX: &str = "_TESTOUT";

/// Run the dump command
///
/// # Returns
/// Exit code: 0 on success
pub fn run(voice: &str, out_dir: &str) -> Result<ExitCode> {
    let config = load_voice_config(voice)?;
    let clips = SampleLibrary::for_voice(&config)
        .and_then(|library| library.load(&config.sample_directory))
        .with_context(|| format!("Failed to load clips for {}", voice))?;

    let written = dump(&clips, Path::new(out_dir))?;
    println!(
        "{} {} clips to {}",
        "Dumped".green().bold(),
        written,
        out_dir
    );
    Ok(ExitCode::SUCCESS)
}

/// Writes `<name>_TESTOUT.wav` for every clip, in name order.
pub(crate) fn dump(clips: &ClipTable, out_dir: &Path) -> Result<usize> {
    let names = clips.names();
    for name in &names {
        if let Some(clip) = clips.get(name) {
            let path = phrase_file(out_dir, name, DUMP_SUFFIX);
            debug!(clip = %name, samples = clip.len(), path = %path.display(), "dumping clip");
            write_audio(clip, &path)?;
        }
    }
    Ok(names.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use speakophone_engine::AudioBuffer;
    use std::collections::HashMap;

    #[test]
    fn test_dump_writes_every_clip() {
        let dir = tempfile::tempdir().unwrap();
        let clips: HashMap<String, AudioBuffer> = [("AX", vec![1, 2, 3]), ("OY", vec![4])]
            .into_iter()
            .map(|(name, samples)| (name.to_string(), AudioBuffer::new(samples, 11_025)))
            .collect();
        let table = ClipTable::new(clips, 11_025);

        assert_eq!(dump(&table, dir.path()).unwrap(), 2);

        let reader = hound::WavReader::open(dir.path().join("AX_TESTOUT.wav")).unwrap();
        assert_eq!(reader.spec().sample_rate, 11_025);
        let samples: Vec<i16> = reader.into_samples().map(|s| s.unwrap()).collect();
        assert_eq!(samples, vec![1, 2, 3]);
        assert!(dir.path().join("OY_TESTOUT.wav").is_file());
    }
}
