use serde::{Deserialize, Serialize};
use tracing::warn;

/// One sung occurrence of a lyric line, as returned by the line segmenter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSegment {
    /// Lyric line as provided by the caller (not the aligner's transcription)
    pub text: String,
    /// Line start in seconds
    pub start_time: f64,
    /// Line end in seconds (expected > start_time, not guaranteed)
    pub end_time: f64,
}

/// One word onset detected by the acoustic aligner
///
/// Only `start`/`end` drive alignment; `word` is kept for debugging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcousticWord {
    #[serde(default)]
    pub word: String,
    pub start: f64,
    pub end: f64,
}

/// Response shape of the acoustic aligner
///
/// `words` may be missing entirely when the aligner produced nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlignerResponse {
    #[serde(default)]
    pub words: Option<Vec<AcousticWord>>,
}

impl AlignerResponse {
    /// Acoustic words ordered by onset, with inverted intervals dropped
    pub fn into_words(self) -> Vec<AcousticWord> {
        let words = self.words.unwrap_or_default();
        let total = words.len();

        let mut kept: Vec<AcousticWord> = words.into_iter().filter(|w| w.end >= w.start).collect();
        if kept.len() != total {
            warn!(
                "Dropped {} acoustic words with end < start",
                total - kept.len()
            );
        }

        // Aligner output is ordered by onset; re-sort only if it is not
        if !kept.windows(2).all(|pair| pair[0].start <= pair[1].start) {
            warn!("Acoustic words out of onset order, sorting");
            kept.sort_by(|a, b| a.start.total_cmp(&b.start));
        }

        kept
    }
}

/// Timing for one whitespace-delimited lyric word
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordTiming {
    pub text: String,
    pub start_time: f64,
    pub end_time: f64,
}

/// Assembled karaoke line handed to the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KaraokeSegment {
    /// Sequence label: `seg_1`, `seg_2`, ...
    pub id: String,
    pub text: String,
    pub start_time: f64,
    pub end_time: f64,
    #[serde(default)]
    pub words: Vec<WordTiming>,
}
