//! Speakophone Engine
//!
//! This crate turns text into speech by concatenating short recordings of
//! allophones, and narrates dice rolls from categorized phrase recordings.
//!
//! # Overview
//!
//! Everything is built from immutable tables loaded once at startup:
//!
//! - **Clip tables** ([`ClipTable`]) - recordings keyed by file stem, optionally
//!   trimmed and low-pass filtered by the [`conditioner`]
//! - **Phonetic dictionary** ([`PhoneticDictionary`]) - word to phone sequence
//! - **Symbol map** ([`SymbolMap`]) - phone to clip name
//! - **Phrase pools** ([`ClipPool`]) - interchangeable phrase recordings
//!
//! The [`Synthesizer`] spells words out through the dictionary and symbol map;
//! the [`DiceRoller`] fills a fixed roll grammar from phrase pools and number
//! clips named by [`number_to_words`].
//!
//! # Determinism
//!
//! Synthesis is a pure lookup. Dice rolls and phrase picks draw from a
//! caller-supplied generator; with a PCG32 from [`rng::create_rng`] a seed
//! fully determines the narrated audio.
//!
//! # Example
//!
//! ```ignore
//! use speakophone_engine::{Synthesizer, WavResult};
//! use speakophone_spec::VoiceConfig;
//!
//! let config = VoiceConfig::load("voices/sp0256.json")?;
//! let synth = Synthesizer::from_config(&config)?;
//! let audio = synth.synthesize("hello world")?;
//!
//! let wav = WavResult::from_buffer(&audio);
//! wav.write_to("hello.wav")?;
//! println!("PCM hash: {}", wav.pcm_hash);
//! ```
//!
//! # Crate Structure
//!
//! - [`buffer`] - Mono 16-bit audio buffers
//! - [`conditioner`] - Silence trimming and Butterworth low-pass filtering
//! - [`lexicon`] - Phonetic dictionary and symbol map parsing
//! - [`library`] - Clip tables and pools loaded from directories
//! - [`numbers`] - English number names
//! - [`rng`] - Deterministic RNG with seed derivation
//! - [`roller`] - Dice-roll narrator
//! - [`synth`] - Allophone synthesizer
//! - [`wav`] - WAV decoding and deterministic WAV writing

pub mod buffer;
pub mod conditioner;
pub mod error;
pub mod lexicon;
pub mod library;
pub mod numbers;
pub mod rng;
pub mod roller;
pub mod synth;
pub mod wav;

// Re-export main types at crate root
pub use buffer::AudioBuffer;
pub use conditioner::Conditioner;
pub use error::{SpeechError, SpeechResult};
pub use lexicon::{PhoneticDictionary, SymbolMap};
pub use library::{ClipPool, ClipTable, SampleLibrary};
pub use numbers::number_to_words;
pub use roller::{
    roll_dice, roll_transcript, DiceRoller, PhrasePools, RollNarration, RollResult,
    BASIC_DICE_PHRASES,
};
pub use synth::{normalize_text, Synthesizer};
pub use wav::{read_wav, WavResult};
