//! Dice-roll narrator phrase configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::conditioning::ConditioningParams;
use crate::error::{SpecError, SpecResult};
use crate::DEFAULT_SAMPLE_RATE;

fn default_sample_rate() -> u32 {
    DEFAULT_SAMPLE_RATE
}

/// Grammar slot categories of the narrator, in utterance order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhraseCategory {
    /// Opening phrase ("you rolled").
    Intro,
    /// Number words, keyed by their English rendering.
    Number,
    /// The unit word between dice count and dice size ("d").
    D,
    /// Phrase between the roll description and its results ("and got").
    Segue,
    /// Phrase between consecutive results ("and").
    Joining,
    /// Closing phrase ("have a nice day").
    Outro,
}

impl PhraseCategory {
    /// All categories in utterance order.
    pub const ALL: [PhraseCategory; 6] = [
        PhraseCategory::Intro,
        PhraseCategory::Number,
        PhraseCategory::D,
        PhraseCategory::Segue,
        PhraseCategory::Joining,
        PhraseCategory::Outro,
    ];

    /// Name of the config field holding this category's subdirectory.
    pub fn field_name(&self) -> &'static str {
        match self {
            PhraseCategory::Intro => "intro_phrases",
            PhraseCategory::Number => "number_phrases",
            PhraseCategory::D => "d_phrases",
            PhraseCategory::Segue => "segue_phrases",
            PhraseCategory::Joining => "joining_phrases",
            PhraseCategory::Outro => "outro_phrases",
        }
    }
}

impl std::fmt::Display for PhraseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PhraseCategory::Intro => "intro",
            PhraseCategory::Number => "number",
            PhraseCategory::D => "d",
            PhraseCategory::Segue => "segue",
            PhraseCategory::Joining => "joining",
            PhraseCategory::Outro => "outro",
        };
        write!(f, "{}", name)
    }
}

/// Phrase pool locations for the dice-roll narrator.
///
/// Each `*_phrases` field names a subdirectory of `sample_directory`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RollerConfig {
    /// Base directory of all phrase pools.
    pub sample_directory: PathBuf,
    /// Intro pool subdirectory.
    pub intro_phrases: String,
    /// Number clip subdirectory; file stems are number words ("forty two").
    pub number_phrases: String,
    /// "d" pool subdirectory.
    pub d_phrases: String,
    /// Segue pool subdirectory.
    pub segue_phrases: String,
    /// Joining pool subdirectory.
    pub joining_phrases: String,
    /// Outro pool subdirectory.
    pub outro_phrases: String,
    /// Sample rate every phrase must be recorded at.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    /// Conditioning for phrase clips. Phrases are used as recorded when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditioning: Option<ConditioningParams>,
}

impl RollerConfig {
    /// Parses a config from JSON without resolving paths.
    pub fn from_json(json: &str) -> SpecResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads, parses and validates a config file.
    ///
    /// A relative `sample_directory` is resolved against the directory
    /// containing the config file.
    pub fn load(path: impl AsRef<Path>) -> SpecResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| SpecError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_json(&json)?;
        if let Some(base) = path.parent() {
            if config.sample_directory.is_relative() {
                config.sample_directory = base.join(&config.sample_directory);
            }
        }
        config.validate()?;
        Ok(config)
    }

    /// Subdirectory name configured for `category`.
    pub fn subdirectory(&self, category: PhraseCategory) -> &str {
        match category {
            PhraseCategory::Intro => &self.intro_phrases,
            PhraseCategory::Number => &self.number_phrases,
            PhraseCategory::D => &self.d_phrases,
            PhraseCategory::Segue => &self.segue_phrases,
            PhraseCategory::Joining => &self.joining_phrases,
            PhraseCategory::Outro => &self.outro_phrases,
        }
    }

    /// Full path of the pool directory for `category`.
    pub fn phrase_dir(&self, category: PhraseCategory) -> PathBuf {
        self.sample_directory.join(self.subdirectory(category))
    }

    /// Checks rate, conditioning and that no subdirectory is blank.
    pub fn validate(&self) -> SpecResult<()> {
        if self.sample_rate == 0 {
            return Err(SpecError::invalid("sample_rate", "must be positive"));
        }
        for category in PhraseCategory::ALL {
            if self.subdirectory(category).trim().is_empty() {
                return Err(SpecError::invalid(
                    category.field_name(),
                    "must name a subdirectory",
                ));
            }
        }
        if let Some(conditioning) = &self.conditioning {
            conditioning.validate(self.sample_rate)?;
        }
        Ok(())
    }
}
