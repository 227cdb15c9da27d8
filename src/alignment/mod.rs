//! Karaoke word-level time alignment
//!
//! Fuses two independent timing sources into per-word karaoke timings:
//! - Line segments (text + start/end) from the line segmenter
//! - Word onsets from the acoustic aligner, whose text may not match the lyrics
//!
//! Everything here is pure and synchronous: no I/O, no shared state.

mod assembler;
mod config;
mod distributor;
mod lyrics;
mod payload;
mod types;

pub use assembler::{assemble, assemble_payload, window_words};
pub use config::AlignmentConfig;
pub use distributor::{distribute_words, MIN_SEGMENT_DURATION_SECS};
pub use lyrics::{lyric_lines, split_words, word_count};
pub use payload::{parse_line_segments, strip_code_fence, PayloadError};
pub use types::{AcousticWord, AlignerResponse, KaraokeSegment, LineSegment, WordTiming};
