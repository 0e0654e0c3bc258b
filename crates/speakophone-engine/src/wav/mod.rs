//! WAV input and deterministic WAV output.
//!
//! Recordings are decoded with `hound`; output is written by a small RIFF
//! writer with no timestamps or variable metadata, so the same samples always
//! encode to the same bytes. The hash of the PCM data identifies an output.

mod format;
mod reader;
mod result;
mod writer;

#[cfg(test)]
mod tests;

pub use format::WavFormat;
pub use reader::{read_wav, DecodedWav};
pub use result::WavResult;
pub use writer::{samples_to_pcm16, write_wav, write_wav_to_vec};
