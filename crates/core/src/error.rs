//! Error types shared across the workspace

use thiserror::Error;

/// Errors produced by the pluggable speech and generation backends.
#[derive(Debug, Error)]
pub enum Error {
    /// Capture device acquisition or finalization failed
    #[error("capture error: {0}")]
    Capture(String),

    /// Speech playback failed
    #[error("playback error: {0}")]
    Playback(String),

    /// Transcription failed
    #[error("transcription error: {0}")]
    Transcription(String),

    /// Response generation failed
    #[error("generation error: {0}")]
    Generation(String),
}

pub type Result<T> = std::result::Result<T, Error>;
