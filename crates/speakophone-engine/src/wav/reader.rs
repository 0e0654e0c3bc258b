//! WAV decoding into mono samples on the 16-bit scale.

use std::path::Path;

use crate::error::{SpeechError, SpeechResult};

/// A decoded recording.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedWav {
    /// Sample rate declared by the file.
    pub sample_rate: u32,
    /// Mono samples scaled to the signed 16-bit range.
    pub samples: Vec<f64>,
}

/// Reads a WAV file and returns its samples as mono `f64` values.
///
/// Integer PCM of 8, 16, 24 or 32 bits and 32-bit float are accepted.
/// Every format is rescaled onto the 16-bit integer range so amplitude
/// thresholds mean the same thing regardless of source depth. Multi-channel
/// files are down-mixed by averaging each frame.
///
/// # Errors
/// Returns [`SpeechError::Wav`] if the file cannot be opened or decoded.
pub fn read_wav(path: &Path) -> SpeechResult<DecodedWav> {
    let wav_err = |source| SpeechError::Wav {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = hound::WavReader::open(path).map_err(wav_err)?;
    let spec = reader.spec();

    let interleaved: Vec<f64> = match spec.sample_format {
        hound::SampleFormat::Int => {
            if !(1..=32).contains(&spec.bits_per_sample) {
                return Err(wav_err(hound::Error::Unsupported));
            }
            let scale = 32768.0 / 2f64.powi(spec.bits_per_sample as i32 - 1);
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f64 * scale))
                .collect::<Result<_, _>>()
                .map_err(wav_err)?
        }
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(|v| v as f64 * 32767.0))
            .collect::<Result<_, _>>()
            .map_err(wav_err)?,
    };

    Ok(DecodedWav {
        sample_rate: spec.sample_rate,
        samples: downmix(&interleaved, spec.channels),
    })
}

/// Averages interleaved frames down to one channel.
fn downmix(interleaved: &[f64], channels: u16) -> Vec<f64> {
    if channels <= 1 {
        return interleaved.to_vec();
    }
    let channels = channels as usize;
    interleaved
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f64>() / channels as f64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_fixture(path: &Path, spec: hound::WavSpec, samples: &[i32]) {
        let mut writer = hound::WavWriter::create(path, spec).unwrap();
        for &s in samples {
            match spec.bits_per_sample {
                8 => writer.write_sample(s as i8).unwrap(),
                16 => writer.write_sample(s as i16).unwrap(),
                _ => writer.write_sample(s).unwrap(),
            }
        }
        writer.finalize().unwrap();
    }

    fn int_spec(channels: u16, bits: u16) -> hound::WavSpec {
        hound::WavSpec {
            channels,
            sample_rate: 44_100,
            bits_per_sample: bits,
            sample_format: hound::SampleFormat::Int,
        }
    }

    #[test]
    fn test_reads_16_bit_mono_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("AX.wav");
        write_fixture(&path, int_spec(1, 16), &[0, 300, -32768, 32767]);

        let decoded = read_wav(&path).unwrap();
        assert_eq!(decoded.sample_rate, 44_100);
        assert_eq!(decoded.samples, vec![0.0, 300.0, -32768.0, 32767.0]);
    }

    #[test]
    fn test_rescales_24_bit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deep.wav");
        write_fixture(&path, int_spec(1, 24), &[256, -8_388_608]);

        let decoded = read_wav(&path).unwrap();
        assert_eq!(decoded.samples, vec![1.0, -32768.0]);
    }

    #[test]
    fn test_downmixes_stereo() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stereo.wav");
        write_fixture(&path, int_spec(2, 16), &[100, 300, -50, -150]);

        let decoded = read_wav(&path).unwrap();
        assert_eq!(decoded.samples, vec![200.0, -100.0]);
    }

    #[test]
    fn test_missing_file_is_wav_error() {
        let err = read_wav(Path::new("/no/such/clip.wav")).unwrap_err();
        assert!(matches!(err, SpeechError::Wav { .. }));
    }
}
