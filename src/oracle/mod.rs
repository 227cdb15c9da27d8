//! Trust boundary to the two external models
//!
//! - Line segmenter: lyric lines + audio → JSON-bearing text of line segments
//! - Acoustic word aligner: audio → word onsets, independent of the lyrics

pub mod messages;
mod nats;

pub use messages::{AlignRequest, SegmentReply, SegmentRequest};
pub use nats::NatsOracle;

use crate::alignment::AlignerResponse;
use anyhow::Result;

/// Model that times each provided lyric line against the audio
#[async_trait::async_trait]
pub trait LineSegmenter: Send + Sync {
    /// Returns the raw response text; parsing happens in the alignment layer
    async fn segment(&self, request: &SegmentRequest) -> Result<String>;
}

/// Forced-alignment model producing word onsets for the whole track
#[async_trait::async_trait]
pub trait WordAligner: Send + Sync {
    async fn align(&self, request: &AlignRequest) -> Result<AlignerResponse>;
}
