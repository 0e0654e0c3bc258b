//! Tests for the WAV writer module.

use crate::buffer::AudioBuffer;

use super::format::WavFormat;
use super::reader::read_wav;
use super::result::WavResult;
use super::writer::{samples_to_pcm16, write_wav_to_vec};

#[test]
fn test_wav_format_mono() {
    let format = WavFormat::mono(44100);
    assert_eq!(format.channels, 1);
    assert_eq!(format.bits_per_sample, 16);
    assert_eq!(format.block_align(), 2);
    assert_eq!(format.byte_rate(), 88200);
}

#[test]
fn test_header_layout() {
    let pcm = samples_to_pcm16(&[1, -1, 256]);
    assert_eq!(pcm, vec![1, 0, 0xff, 0xff, 0, 1]);

    let wav = write_wav_to_vec(&WavFormat::mono(22050), &pcm);
    assert_eq!(wav.len(), 44 + 6);
    assert_eq!(&wav[0..4], b"RIFF");
    assert_eq!(u32::from_le_bytes(wav[4..8].try_into().unwrap()), 36 + 6);
    assert_eq!(&wav[8..12], b"WAVE");
    assert_eq!(&wav[12..16], b"fmt ");
    assert_eq!(u32::from_le_bytes(wav[24..28].try_into().unwrap()), 22050);
    assert_eq!(&wav[36..40], b"data");
    assert_eq!(u32::from_le_bytes(wav[40..44].try_into().unwrap()), 6);
    assert_eq!(&wav[44..], &pcm[..]);
}

#[test]
fn test_result_is_deterministic() {
    let buffer = AudioBuffer::new(vec![0, 1000, -1000, 32767], 44100);
    let a = WavResult::from_buffer(&buffer);
    let b = WavResult::from_buffer(&buffer);
    assert_eq!(a.wav_data, b.wav_data);
    assert_eq!(a.pcm_hash, b.pcm_hash);
    assert_eq!(a.pcm_hash.len(), 64);
    assert_eq!(a.num_samples, 4);

    let other = WavResult::from_buffer(&AudioBuffer::new(vec![0, 1000, -1000, 32766], 44100));
    assert_ne!(a.pcm_hash, other.pcm_hash);
}

#[test]
fn test_written_file_reads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("out.wav");
    let buffer = AudioBuffer::new(vec![5, -5, 12_000], 16000);

    let result = WavResult::from_buffer(&buffer);
    result.write_to(&path).unwrap();
    assert!((result.duration_seconds() - 3.0 / 16000.0).abs() < 1e-12);

    let decoded = read_wav(&path).unwrap();
    assert_eq!(decoded.sample_rate, 16000);
    assert_eq!(decoded.samples, vec![5.0, -5.0, 12_000.0]);
}
