//! Error types for configuration loading and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for configuration operations.
pub type SpecResult<T> = Result<T, SpecError>;

/// Errors raised while reading or validating a configuration document.
#[derive(Debug, Error)]
pub enum SpecError {
    /// The config file could not be read.
    #[error("failed to read config '{}': {source}", path.display())]
    Io {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config document is not valid JSON for the expected record.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value outside its allowed range.
    #[error("invalid config field '{field}': {message}")]
    Invalid {
        /// Field name, dotted for nested fields.
        field: String,
        /// Description of the problem.
        message: String,
    },
}

impl SpecError {
    /// Creates an invalid field error.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Common trait for engine errors.
///
/// Gives every error a stable code and a category so that the command-line
/// tool can report failures uniformly without matching on concrete types.
///
/// # Example
///
/// ```
/// use speakophone_spec::error::EngineError;
///
/// fn report<E: EngineError>(err: E) -> String {
///     format!("[{}] {}", err.code(), err.message())
/// }
/// ```
pub trait EngineError: std::error::Error {
    /// Stable error code such as `"SPEECH_004"`.
    fn code(&self) -> &'static str;

    /// Human-readable message. Defaults to the `Display` rendering.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Error category used for grouping (`"config"`, `"load"`, `"request"`, ...).
    fn category(&self) -> &'static str;
}

impl EngineError for SpecError {
    fn code(&self) -> &'static str {
        match self {
            SpecError::Io { .. } => "CONFIG_001",
            SpecError::Parse(_) => "CONFIG_002",
            SpecError::Invalid { .. } => "CONFIG_003",
        }
    }

    fn category(&self) -> &'static str {
        "config"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_helper() {
        let err = SpecError::invalid("conditioning.order", "must be at least 1");
        assert!(err.to_string().contains("conditioning.order"));
        assert!(err.to_string().contains("at least 1"));
        assert_eq!(err.code(), "CONFIG_003");
        assert_eq!(err.category(), "config");
    }

    #[test]
    fn test_parse_error_code() {
        let err: SpecError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(err.code(), "CONFIG_002");
    }
}
