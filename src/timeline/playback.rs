use crate::alignment::{AlignmentConfig, KaraokeSegment, WordTiming};

/// Index of the segment a renderer should show at playback time `t`
///
/// Resolution order:
/// 1. A segment whose `[start, end]` contains `t`
/// 2. In a gap, the last segment that started (held until the next one starts)
/// 3. Before the song, the first segment if it starts within `pre_roll` seconds
pub fn active_segment(segments: &[KaraokeSegment], t: f64, pre_roll: f64) -> Option<usize> {
    let first = segments.first()?;

    if let Some(idx) = segments
        .iter()
        .position(|s| t >= s.start_time && t <= s.end_time)
    {
        return Some(idx);
    }

    if let Some(idx) = segments.iter().rposition(|s| s.start_time <= t) {
        let next_start = segments
            .get(idx + 1)
            .map_or(f64::INFINITY, |s| s.start_time);
        if t < next_start {
            return Some(idx);
        }
        return None;
    }

    if first.start_time > t && first.start_time - t <= pre_roll {
        return Some(0);
    }

    None
}

/// [`active_segment`] with the configured pre-roll
pub fn live_segment(
    segments: &[KaraokeSegment],
    t: f64,
    config: &AlignmentConfig,
) -> Option<usize> {
    active_segment(segments, t, config.pre_roll_secs)
}

/// Index of the word being sung at `t`, if any
///
/// Words are half-open `[start, end)`, so at the last word's end time this
/// returns `None` while [`active_segment`] still holds the line. `None` means
/// "between words", not "no line".
pub fn active_word(segment: &KaraokeSegment, t: f64) -> Option<usize> {
    segment
        .words
        .iter()
        .position(|w| t >= w.start_time && t < w.end_time)
}

/// Fraction of a word already sung at `t`, in `[0, 1]`
pub fn word_progress(word: &WordTiming, t: f64) -> f64 {
    let duration = word.end_time - word.start_time;
    if duration > 0.0 {
        ((t - word.start_time) / duration).clamp(0.0, 1.0)
    } else if t >= word.end_time {
        1.0
    } else {
        0.0
    }
}
