//! Sample conditioning parameters and per-clip post-processing hooks.

use serde::{Deserialize, Serialize};

use crate::error::{SpecError, SpecResult};

/// Default amplitude threshold (16-bit sample units) for silence trimming.
pub const DEFAULT_TRIM_THRESHOLD: f64 = 300.0;

/// Default low-pass cutoff in Hz.
pub const DEFAULT_CUTOFF_HZ: f64 = 5000.0;

/// Default Butterworth filter order.
pub const DEFAULT_FILTER_ORDER: usize = 6;

fn default_threshold() -> f64 {
    DEFAULT_TRIM_THRESHOLD
}

fn default_cutoff() -> f64 {
    DEFAULT_CUTOFF_HZ
}

fn default_order() -> usize {
    DEFAULT_FILTER_ORDER
}

/// Parameters for the trim + low-pass pipeline applied to every loaded clip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConditioningParams {
    /// Samples whose magnitude does not exceed this are treated as silence.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Low-pass cutoff frequency in Hz.
    #[serde(default = "default_cutoff")]
    pub cutoff_hz: f64,
    /// Butterworth filter order.
    #[serde(default = "default_order")]
    pub order: usize,
}

impl Default for ConditioningParams {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_TRIM_THRESHOLD,
            cutoff_hz: DEFAULT_CUTOFF_HZ,
            order: DEFAULT_FILTER_ORDER,
        }
    }
}

impl ConditioningParams {
    /// Checks the parameters against the sample rate they will be used with.
    pub fn validate(&self, sample_rate: u32) -> SpecResult<()> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(SpecError::invalid(
                "conditioning.threshold",
                format!("must be a non-negative number, got {}", self.threshold),
            ));
        }
        if self.order < 1 {
            return Err(SpecError::invalid(
                "conditioning.order",
                "must be at least 1",
            ));
        }
        let nyquist = sample_rate as f64 / 2.0;
        if !(self.cutoff_hz > 0.0 && self.cutoff_hz < nyquist) {
            return Err(SpecError::invalid(
                "conditioning.cutoff_hz",
                format!(
                    "must lie in (0, {}) for a {} Hz sample rate, got {}",
                    nyquist, sample_rate, self.cutoff_hz
                ),
            ));
        }
        Ok(())
    }
}

/// How a hook's `name` is compared against clip names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClipMatch {
    /// The clip name must equal the hook name.
    #[default]
    Exact,
    /// The clip name must start with the hook name.
    Prefix,
}

/// A buffer transform applied to a clip after conditioning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum ClipTransform {
    /// Concatenate the clip with itself until it appears `times` times.
    Repeat {
        /// Total number of copies, at least 1.
        times: usize,
    },
    /// Append a copy of the first `samples` samples to the end of the clip.
    AppendHead {
        /// Number of leading samples to copy; clamped to the clip length.
        samples: usize,
    },
}

/// Post-processing hook: the transforms to run on clips matching `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClipHook {
    /// Clip name, or name prefix when `match` is `prefix`.
    pub name: String,
    /// Matching mode.
    #[serde(default, rename = "match")]
    pub matching: ClipMatch,
    /// Transforms, applied in order.
    pub transforms: Vec<ClipTransform>,
}

impl ClipHook {
    /// Creates a hook matching exactly `name`.
    pub fn exact(name: impl Into<String>, transforms: Vec<ClipTransform>) -> Self {
        Self {
            name: name.into(),
            matching: ClipMatch::Exact,
            transforms,
        }
    }

    /// Creates a hook matching every clip whose name starts with `prefix`.
    pub fn prefix(prefix: impl Into<String>, transforms: Vec<ClipTransform>) -> Self {
        Self {
            name: prefix.into(),
            matching: ClipMatch::Prefix,
            transforms,
        }
    }

    /// Returns true if this hook applies to `clip_name`.
    pub fn matches(&self, clip_name: &str) -> bool {
        match self.matching {
            ClipMatch::Exact => clip_name == self.name,
            ClipMatch::Prefix => clip_name.starts_with(&self.name),
        }
    }

    /// Checks the hook for empty names and zero repeat counts.
    pub fn validate(&self) -> SpecResult<()> {
        if self.name.trim().is_empty() {
            return Err(SpecError::invalid("hooks.name", "must not be empty"));
        }
        for transform in &self.transforms {
            if let ClipTransform::Repeat { times: 0 } = transform {
                return Err(SpecError::invalid(
                    "hooks.transforms.times",
                    format!("repeat count for '{}' must be at least 1", self.name),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_from_empty_object() {
        let params: ConditioningParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params, ConditioningParams::default());
        assert_eq!(params.order, 6);
        assert_eq!(params.cutoff_hz, 5000.0);
        assert_eq!(params.threshold, 300.0);
    }

    #[test]
    fn test_validate_rejects_cutoff_at_nyquist() {
        let params = ConditioningParams {
            cutoff_hz: 22_050.0,
            ..Default::default()
        };
        assert!(params.validate(44_100).is_err());
        assert!(params.validate(48_000).is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_order() {
        let params = ConditioningParams {
            order: 0,
            ..Default::default()
        };
        let err = params.validate(44_100).unwrap_err();
        assert!(err.to_string().contains("conditioning.order"));
    }

    #[test]
    fn test_hook_matching() {
        let exact = ClipHook::exact("OY", vec![]);
        assert!(exact.matches("OY"));
        assert!(!exact.matches("OY2"));

        let prefix = ClipHook::prefix("ER", vec![]);
        assert!(prefix.matches("ER1"));
        assert!(prefix.matches("ER"));
        assert!(!prefix.matches("XER"));
    }

    #[test]
    fn test_hook_json_shape() {
        let json = r#"{
            "name": "YY",
            "match": "prefix",
            "transforms": [
                { "kind": "repeat", "times": 2 },
                { "kind": "append_head", "samples": 800 }
            ]
        }"#;
        let hook: ClipHook = serde_json::from_str(json).unwrap();
        assert_eq!(hook.matching, ClipMatch::Prefix);
        assert_eq!(
            hook.transforms,
            vec![
                ClipTransform::Repeat { times: 2 },
                ClipTransform::AppendHead { samples: 800 },
            ]
        );
        assert!(hook.validate().is_ok());
    }

    #[test]
    fn test_hook_rejects_zero_repeat() {
        let hook = ClipHook::exact("AA", vec![ClipTransform::Repeat { times: 0 }]);
        assert!(hook.validate().is_err());
    }
}
