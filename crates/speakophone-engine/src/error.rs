//! Error types for the speech engine.

use std::path::PathBuf;

use speakophone_spec::{EngineError, SpecError};
use thiserror::Error;

/// Result type for engine operations.
pub type SpeechResult<T> = Result<T, SpeechError>;

/// Errors that can occur while loading tables or producing audio.
///
/// Load-time variants (`Load`, `Wav`, `SampleRateMismatch`, `EmptyPool`,
/// `Format`) abort table construction. Request variants (`UnknownWord`,
/// `MissingClip`, `MissingPhrase`, `InvalidArgument`) abort a single call
/// and leave every table untouched.
#[derive(Debug, Error)]
pub enum SpeechError {
    /// Invalid filter or conditioning parameters.
    #[error("invalid configuration: {message}")]
    Config {
        /// Error message.
        message: String,
    },

    /// Configuration document could not be loaded.
    #[error(transparent)]
    Spec(#[from] SpecError),

    /// A directory or file could not be read.
    #[error("failed to load '{}': {source}", path.display())]
    Load {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A WAV file could not be decoded.
    #[error("failed to decode WAV '{}': {source}", path.display())]
    Wav {
        /// Path of the WAV file.
        path: PathBuf,
        /// Decoder error.
        #[source]
        source: hound::Error,
    },

    /// A clip was recorded at a different rate than its library declares.
    #[error("'{}' is sampled at {found} Hz, expected {expected} Hz", path.display())]
    SampleRateMismatch {
        /// Path of the offending file.
        path: PathBuf,
        /// Library sample rate.
        expected: u32,
        /// File sample rate.
        found: u32,
    },

    /// A phrase pool directory held no audio files.
    #[error("no audio clips found in '{}'", path.display())]
    EmptyPool {
        /// Pool directory.
        path: PathBuf,
    },

    /// A dictionary or symbol map line is malformed.
    #[error("{}:{line}: {message}", path.display())]
    Format {
        /// File containing the line.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// Error message.
        message: String,
    },

    /// A word, or one of its symbols, could not be resolved to audio.
    #[error("the word \"{word}\" is not in the dictionary")]
    UnknownWord {
        /// The offending word, after normalization.
        word: String,
    },

    /// A number word has no recorded clip.
    #[error("no recorded clip for \"{word}\"")]
    MissingClip {
        /// The number word that was looked up.
        word: String,
    },

    /// A grammar slot the request needs has no recorded phrases.
    #[error("no {category} phrase recorded")]
    MissingPhrase {
        /// The empty phrase category.
        category: String,
    },

    /// A request argument is out of range.
    #[error("invalid argument '{name}': {message}")]
    InvalidArgument {
        /// Argument name.
        name: String,
        /// Error message.
        message: String,
    },

    /// I/O error while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SpeechError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a format error for `path` at 1-based `line`.
    pub fn format(path: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        Self::Format {
            path: path.into(),
            line,
            message: message.into(),
        }
    }

    /// Creates an invalid argument error.
    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates an unknown word error.
    pub fn unknown_word(word: impl Into<String>) -> Self {
        Self::UnknownWord { word: word.into() }
    }

    /// Returns true for errors that only affect a single request.
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            SpeechError::UnknownWord { .. }
                | SpeechError::MissingClip { .. }
                | SpeechError::MissingPhrase { .. }
                | SpeechError::InvalidArgument { .. }
        )
    }
}

impl EngineError for SpeechError {
    fn code(&self) -> &'static str {
        match self {
            SpeechError::Config { .. } => "SPEECH_001",
            SpeechError::Spec(inner) => inner.code(),
            SpeechError::Load { .. } => "SPEECH_002",
            SpeechError::Wav { .. } => "SPEECH_003",
            SpeechError::SampleRateMismatch { .. } => "SPEECH_004",
            SpeechError::EmptyPool { .. } => "SPEECH_005",
            SpeechError::Format { .. } => "SPEECH_006",
            SpeechError::UnknownWord { .. } => "SPEECH_007",
            SpeechError::MissingClip { .. } => "SPEECH_008",
            SpeechError::InvalidArgument { .. } => "SPEECH_009",
            SpeechError::Io(_) => "SPEECH_010",
            SpeechError::MissingPhrase { .. } => "SPEECH_011",
        }
    }

    fn category(&self) -> &'static str {
        match self {
            SpeechError::Config { .. } | SpeechError::Spec(_) => "config",
            SpeechError::Load { .. }
            | SpeechError::Wav { .. }
            | SpeechError::SampleRateMismatch { .. }
            | SpeechError::EmptyPool { .. } => "load",
            SpeechError::Format { .. } => "format",
            SpeechError::UnknownWord { .. }
            | SpeechError::MissingClip { .. }
            | SpeechError::MissingPhrase { .. }
            | SpeechError::InvalidArgument { .. } => "request",
            SpeechError::Io(_) => "io",
        }
    }
}
