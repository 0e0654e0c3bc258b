//! WAV file generation result type.

use std::fs;
use std::path::Path;

use crate::buffer::AudioBuffer;
use crate::error::SpeechResult;

use super::format::WavFormat;
use super::writer::{samples_to_pcm16, write_wav_to_vec};

/// An encoded WAV file together with a hash of its audio payload.
#[derive(Debug)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of PCM data only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples.
    pub num_samples: usize,
}

impl WavResult {
    /// Encodes a buffer as a mono 16-bit WAV file.
    pub fn from_buffer(buffer: &AudioBuffer) -> Self {
        let pcm = samples_to_pcm16(buffer.samples());
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();
        let format = WavFormat::mono(buffer.sample_rate());
        let wav_data = write_wav_to_vec(&format, &pcm);

        Self {
            wav_data,
            pcm_hash,
            sample_rate: buffer.sample_rate(),
            num_samples: buffer.len(),
        }
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }

    /// Writes the WAV bytes to `path`, creating parent directories.
    pub fn write_to(&self, path: impl AsRef<Path>) -> SpeechResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, &self.wav_data)?;
        Ok(())
    }
}
