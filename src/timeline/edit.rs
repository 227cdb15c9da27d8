use crate::alignment::{KaraokeSegment, MIN_SEGMENT_DURATION_SECS};

/// Shift a segment and its words by `delta` seconds
///
/// Times are clamped at zero and the segment keeps at least the minimum span.
pub fn nudge(segment: &KaraokeSegment, delta: f64) -> KaraokeSegment {
    let start_time = (segment.start_time + delta).max(0.0);
    let end_time = (segment.end_time + delta).max(start_time + MIN_SEGMENT_DURATION_SECS);

    let words = segment
        .words
        .iter()
        .map(|w| {
            let mut w = w.clone();
            w.start_time = (w.start_time + delta).max(0.0);
            w.end_time = (w.end_time + delta).max(0.0);
            w
        })
        .collect();

    KaraokeSegment {
        start_time,
        end_time,
        words,
        ..segment.clone()
    }
}

/// Stretch or compress a segment around its start time
///
/// `multiplier` scales the duration; each word keeps its relative position.
/// Non-positive multipliers leave the segment unchanged.
pub fn rescale(segment: &KaraokeSegment, multiplier: f64) -> KaraokeSegment {
    if multiplier.is_nan() || multiplier <= 0.0 {
        return segment.clone();
    }

    let duration = (segment.end_time - segment.start_time).max(MIN_SEGMENT_DURATION_SECS);
    let new_duration = duration * multiplier;
    let origin = segment.start_time;

    let words = segment
        .words
        .iter()
        .map(|w| {
            let mut w = w.clone();
            w.start_time = origin + (w.start_time - origin) / duration * new_duration;
            w.end_time = origin + (w.end_time - origin) / duration * new_duration;
            w
        })
        .collect();

    KaraokeSegment {
        end_time: origin + new_duration,
        words,
        ..segment.clone()
    }
}
