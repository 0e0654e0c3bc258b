//! Speakophone Configuration Library
//!
//! This crate provides the configuration records, validation, and error-code
//! contract shared by the Speakophone engine and command-line tool.
//!
//! # Overview
//!
//! Two JSON documents drive the engine:
//!
//! - **Voice config** ([`VoiceConfig`]): where the allophone clips, the phonetic
//!   dictionary and the symbol map live, plus how clips are conditioned.
//! - **Roller config** ([`RollerConfig`]): the phrase pools used by the dice-roll
//!   narrator, one subdirectory per grammar slot.
//!
//! # Example
//!
//! ```
//! use speakophone_spec::{RollerConfig, PhraseCategory};
//!
//! let json = r#"{
//!     "sample_directory": "samples/roboid",
//!     "intro_phrases": "1_Intros",
//!     "number_phrases": "2_Numbers",
//!     "d_phrases": "3_Dees",
//!     "segue_phrases": "4_Segues",
//!     "joining_phrases": "5_Joiners",
//!     "outro_phrases": "6_Outros"
//! }"#;
//!
//! let config = RollerConfig::from_json(json).unwrap();
//! assert!(config.phrase_dir(PhraseCategory::Number).ends_with("2_Numbers"));
//! ```
//!
//! # Modules
//!
//! - [`conditioning`]: Trim/low-pass parameters and per-clip post-processing hooks
//! - [`error`]: Config errors and the [`EngineError`] reporting trait
//! - [`roller`]: Dice-roll narrator phrase configuration
//! - [`voice`]: Allophone voice configuration

pub mod conditioning;
pub mod error;
pub mod roller;
pub mod voice;

pub use conditioning::{ClipHook, ClipMatch, ClipTransform, ConditioningParams};
pub use error::{EngineError, SpecError, SpecResult};
pub use roller::{PhraseCategory, RollerConfig};
pub use voice::VoiceConfig;

/// Sample rate assumed for recordings when a config does not declare one.
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// Length of the silence inserted after every synthesized word, in samples.
pub const DEFAULT_PADDING_SAMPLES: usize = 4000;
