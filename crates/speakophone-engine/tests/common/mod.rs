//! Shared fixtures for the engine integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

/// Writes a mono 16-bit WAV fixture.
pub fn write_clip(path: &Path, samples: &[i16], sample_rate: u32) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).unwrap();
    for &s in samples {
        writer.write_sample(s).unwrap();
    }
    writer.finalize().unwrap();
}

/// A loud burst surrounded by silence: `lead` zeros, `body` samples at
/// `level`, `tail` zeros.
pub fn burst(lead: usize, body: usize, tail: usize, level: i16) -> Vec<i16> {
    let mut samples = vec![0; lead];
    samples.extend(std::iter::repeat(level).take(body));
    samples.extend(std::iter::repeat(0).take(tail));
    samples
}
