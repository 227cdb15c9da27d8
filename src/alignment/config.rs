use serde::{Deserialize, Serialize};

/// Tunables for the alignment engine
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignmentConfig {
    /// Cushion added on both sides of a line when picking acoustic words (seconds)
    /// Default: 0.3
    pub tolerance_secs: f64,

    /// How far ahead of the first line a renderer starts showing it (seconds)
    /// Default: 5.0
    pub pre_roll_secs: f64,
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self {
            tolerance_secs: 0.3,
            pre_roll_secs: 5.0,
        }
    }
}
