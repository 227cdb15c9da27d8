use thiserror::Error;

/// Message shown to users for any failed sync
pub const SYNC_FAILED_MESSAGE: &str = "karaoke sync failed, please retry";

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("line segmenter failed: {0:#}")]
    Segmenter(anyhow::Error),

    #[error("acoustic aligner failed: {0:#}")]
    Aligner(anyhow::Error),

    #[error("line segmenter returned no usable segments")]
    NoSegments,

    #[error("line segmenter returned {actual} segments for {expected} lyric lines")]
    LineCountMismatch { expected: usize, actual: usize },
}

impl SyncError {
    /// Whether the caller sent something unusable (as opposed to an upstream failure)
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Text safe to surface to end users
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput(message) => message.clone(),
            _ => SYNC_FAILED_MESSAGE.to_string(),
        }
    }
}
