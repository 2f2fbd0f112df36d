//! Error handling module for AutoCut

use thiserror::Error;

/// Main error type for AutoCut operations
#[derive(Error, Debug)]
pub enum AutoCutError {
    /// Every span of the source would be removed; there is nothing to export
    #[error("No keep intervals: the selected clips cover the entire source")]
    NoKeepIntervals,

    /// The primary encoder invocation failed (nonzero exit or missing binary)
    #[error("Encoder process failed: {message}")]
    EncoderProcess { message: String },

    /// The extract-and-concatenate fallback itself failed
    #[error("Fallback export failed: {message}")]
    FallbackExecution { message: String },

    /// The upstream transcription collaborator failed
    #[error("Transcription failed: {message}")]
    UpstreamToken { message: String },

    /// Media probing (duration, audio extraction) failed
    #[error("Failed to probe media file: {message}")]
    MediaProbe { message: String },

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for AutoCut operations
pub type AutoCutResult<T> = std::result::Result<T, AutoCutError>;
