use serde::{Deserialize, Serialize};

/// Policies for one sync request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Fail when the segmenter returns a different number of lines than provided
    /// Default: false (mismatch is logged, positional correspondence is trusted)
    pub strict_line_count: bool,

    /// Fail when the acoustic aligner is missing or errors
    /// Default: false (fall back to character-proportional timing)
    pub require_aligner: bool,

    /// Language hint passed to the aligner
    /// Default: "vi"
    pub language: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            strict_line_count: false,
            require_aligner: false,
            language: "vi".to_string(),
        }
    }
}
