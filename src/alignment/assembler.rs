use super::config::AlignmentConfig;
use super::distributor::distribute_words;
use super::lyrics::split_words;
use super::payload::parse_line_segments;
use super::types::{AcousticWord, KaraokeSegment, LineSegment};
use tracing::{debug, warn};

/// Acoustic words whose onset falls in `[start - tolerance, end + tolerance)`
///
/// Windows are computed per line, so a word right at a boundary may be
/// seen by both neighbours.
pub fn window_words(
    words: &[AcousticWord],
    start: f64,
    end: f64,
    tolerance: f64,
) -> Vec<AcousticWord> {
    let lower = start - tolerance;
    let upper = end + tolerance;

    words
        .iter()
        .filter(|w| w.start >= lower && w.start < upper)
        .cloned()
        .collect()
}

/// Build one karaoke segment per line segment, in input order
///
/// Each line is timed independently; overlaps between lines are left as
/// the segmenter reported them.
pub fn assemble(
    segments: &[LineSegment],
    words: &[AcousticWord],
    config: &AlignmentConfig,
) -> Vec<KaraokeSegment> {
    segments
        .iter()
        .enumerate()
        .map(|(i, seg)| {
            if seg.end_time <= seg.start_time {
                warn!(
                    "Segment {} has non-positive span ({:.3}s..{:.3}s)",
                    i + 1,
                    seg.start_time,
                    seg.end_time
                );
            }

            let window = window_words(words, seg.start_time, seg.end_time, config.tolerance_secs);
            let lyric_words = split_words(&seg.text);

            debug!(
                "Segment {}: {} lyric words, {} acoustic words",
                i + 1,
                lyric_words.len(),
                window.len()
            );

            KaraokeSegment {
                id: format!("seg_{}", i + 1),
                text: seg.text.clone(),
                start_time: seg.start_time,
                end_time: seg.end_time,
                words: distribute_words(&lyric_words, &window, seg.start_time, seg.end_time),
            }
        })
        .collect()
}

/// Parse a raw segmenter response and assemble it
///
/// A payload that is not a well-formed segment array yields an empty list.
pub fn assemble_payload(
    raw: &str,
    words: &[AcousticWord],
    config: &AlignmentConfig,
) -> Vec<KaraokeSegment> {
    match parse_line_segments(raw) {
        Ok(segments) => assemble(&segments, words, config),
        Err(e) => {
            warn!("Discarding segmenter payload: {}", e);
            Vec::new()
        }
    }
}
