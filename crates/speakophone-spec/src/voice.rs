//! Allophone voice configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::conditioning::{ClipHook, ConditioningParams};
use crate::error::{SpecError, SpecResult};
use crate::{DEFAULT_PADDING_SAMPLES, DEFAULT_SAMPLE_RATE};

fn default_sample_rate() -> u32 {
    DEFAULT_SAMPLE_RATE
}

fn default_padding() -> usize {
    DEFAULT_PADDING_SAMPLES
}

/// Everything needed to build a text synthesizer.
///
/// ```json
/// {
///     "sample_directory": "allophones",
///     "dictionary": "cmudict_SPHINX_40.txt",
///     "symbol_map": "allophones/sphinx_mapping.txt",
///     "hooks": [{ "name": "OY", "transforms": [{ "kind": "repeat", "times": 2 }] }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VoiceConfig {
    /// Directory holding one WAV file per allophone clip.
    pub sample_directory: PathBuf,
    /// Tab-delimited phonetic dictionary file.
    pub dictionary: PathBuf,
    /// Comma-delimited symbol to clip-name map.
    pub symbol_map: PathBuf,
    /// Sample rate every clip must be recorded at.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    /// Trim and low-pass parameters.
    #[serde(default)]
    pub conditioning: ConditioningParams,
    /// Clip-specific corrections applied after conditioning.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hooks: Vec<ClipHook>,
    /// Silence appended after every word, in samples.
    #[serde(default = "default_padding")]
    pub padding_samples: usize,
}

impl VoiceConfig {
    /// Creates a config with default conditioning, rate and padding.
    pub fn new(
        sample_directory: impl Into<PathBuf>,
        dictionary: impl Into<PathBuf>,
        symbol_map: impl Into<PathBuf>,
    ) -> Self {
        Self {
            sample_directory: sample_directory.into(),
            dictionary: dictionary.into(),
            symbol_map: symbol_map.into(),
            sample_rate: DEFAULT_SAMPLE_RATE,
            conditioning: ConditioningParams::default(),
            hooks: Vec::new(),
            padding_samples: DEFAULT_PADDING_SAMPLES,
        }
    }

    /// Parses a config from JSON without resolving paths.
    pub fn from_json(json: &str) -> SpecResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads, parses and validates a config file.
    ///
    /// Relative paths inside the document are resolved against the
    /// directory containing the config file.
    pub fn load(path: impl AsRef<Path>) -> SpecResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| SpecError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_json(&json)?;
        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        config.validate()?;
        Ok(config)
    }

    /// Rewrites relative paths so they are rooted at `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        for p in [
            &mut self.sample_directory,
            &mut self.dictionary,
            &mut self.symbol_map,
        ] {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        }
    }

    /// Checks rate, conditioning and hooks.
    pub fn validate(&self) -> SpecResult<()> {
        if self.sample_rate == 0 {
            return Err(SpecError::invalid("sample_rate", "must be positive"));
        }
        self.conditioning.validate(self.sample_rate)?;
        for hook in &self.hooks {
            hook.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditioning::ClipTransform;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_minimal_voice_config() {
        let json = r#"{
            "sample_directory": "allophones",
            "dictionary": "dict.txt",
            "symbol_map": "map.txt"
        }"#;
        let config = VoiceConfig::from_json(json).unwrap();
        assert_eq!(config, VoiceConfig::new("allophones", "dict.txt", "map.txt"));
        assert_eq!(config.padding_samples, 4000);
        assert_eq!(config.sample_rate, 44_100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let json = r#"{
            "sample_directory": "a",
            "dictionary": "b",
            "symbol_map": "c",
            "volume": 11
        }"#;
        assert!(VoiceConfig::from_json(json).is_err());
    }

    #[test]
    fn test_load_resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("voice.json");
        fs::write(
            &path,
            r#"{
                "sample_directory": "clips",
                "dictionary": "/abs/dict.txt",
                "symbol_map": "map.txt",
                "hooks": [{ "name": "OY", "transforms": [{ "kind": "repeat", "times": 2 }] }]
            }"#,
        )
        .unwrap();

        let config = VoiceConfig::load(&path).unwrap();
        assert_eq!(config.sample_directory, dir.path().join("clips"));
        assert_eq!(config.dictionary, PathBuf::from("/abs/dict.txt"));
        assert_eq!(config.symbol_map, dir.path().join("map.txt"));
        assert_eq!(
            config.hooks[0].transforms,
            vec![ClipTransform::Repeat { times: 2 }]
        );
    }

    #[test]
    fn test_load_missing_file() {
        let err = VoiceConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, SpecError::Io { .. }));
    }

    #[test]
    fn test_zero_sample_rate_invalid() {
        let mut config = VoiceConfig::new("a", "b", "c");
        config.sample_rate = 0;
        assert!(config.validate().is_err());
    }
}
