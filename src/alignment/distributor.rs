use super::types::{AcousticWord, WordTiming};

/// Smallest segment span used in fallback time math (seconds)
pub const MIN_SEGMENT_DURATION_SECS: f64 = 0.1;

/// Map the words of one lyric line onto absolute timestamps
///
/// With acoustic onsets available, lyric word `i` of `n` is placed at the
/// `i/n` fraction of the way through the acoustic word sequence (rhythm
/// anchors). Only onset/offset times are read, never the acoustic text.
/// Without onsets, the line span is split by character count.
pub fn distribute_words<S: AsRef<str>>(
    lyric_words: &[S],
    acoustic_words: &[AcousticWord],
    seg_start: f64,
    seg_end: f64,
) -> Vec<WordTiming> {
    if lyric_words.is_empty() {
        return Vec::new();
    }

    if acoustic_words.is_empty() {
        distribute_by_characters(lyric_words, seg_start, seg_end)
    } else {
        distribute_by_rhythm(lyric_words, acoustic_words)
    }
}

/// Positional interpolation over an `m + 1` anchor timeline
fn distribute_by_rhythm<S: AsRef<str>>(
    lyric_words: &[S],
    acoustic_words: &[AcousticWord],
) -> Vec<WordTiming> {
    let m = acoustic_words.len();
    let n = lyric_words.len() as f64;
    let anchors = RhythmAnchors::new(acoustic_words);

    lyric_words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let pos_start = (i as f64 / n) * m as f64;
            let pos_end = ((i + 1) as f64 / n) * m as f64;

            WordTiming {
                text: word.as_ref().to_string(),
                start_time: anchors.resolve(pos_start),
                end_time: anchors.resolve(pos_end),
            }
        })
        .collect()
}

/// Character-proportional split of `[seg_start, seg_start + duration]`
fn distribute_by_characters<S: AsRef<str>>(
    lyric_words: &[S],
    seg_start: f64,
    seg_end: f64,
) -> Vec<WordTiming> {
    let lengths: Vec<usize> = lyric_words
        .iter()
        .map(|w| w.as_ref().chars().count())
        .collect();
    let total = lengths.iter().sum::<usize>().max(1);
    let total_chars = total as f64;
    let span = seg_end - seg_start;
    let duration = span.max(MIN_SEGMENT_DURATION_SECS);

    let mut cumulative = 0usize;
    lyric_words
        .iter()
        .zip(&lengths)
        .map(|(word, &len)| {
            let start_time = seg_start + (cumulative as f64 / total_chars) * duration;
            cumulative += len;
            // The line's last character lands on seg_end exactly unless the floor widened it
            let end_time = if cumulative == total && span >= MIN_SEGMENT_DURATION_SECS {
                seg_end
            } else {
                seg_start + (cumulative as f64 / total_chars) * duration
            };

            WordTiming {
                text: word.as_ref().to_string(),
                start_time,
                end_time,
            }
        })
        .collect()
}

/// Onset timeline: `m` acoustic slots closed by the last word's offset
struct RhythmAnchors {
    points: Vec<f64>,
}

impl RhythmAnchors {
    /// `acoustic_words` must be non-empty
    fn new(acoustic_words: &[AcousticWord]) -> Self {
        let mut points: Vec<f64> = acoustic_words.iter().map(|w| w.start).collect();
        if let Some(last) = acoustic_words.last() {
            points.push(last.end);
        }
        Self { points }
    }

    /// Resolve a fractional slot position to an absolute time
    fn resolve(&self, pos: f64) -> f64 {
        let slots = self.points.len() - 1;
        let lo = (pos.floor() as usize).min(slots - 1);
        let from = self.points[lo];
        let to = self.points[lo + 1];
        from + (pos - lo as f64) * (to - from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acoustic(spans: &[(f64, f64)]) -> Vec<AcousticWord> {
        spans
            .iter()
            .enumerate()
            .map(|(i, &(start, end))| AcousticWord {
                word: format!("w{}", i),
                start,
                end,
            })
            .collect()
    }

    #[test]
    fn test_empty_line_yields_no_words() {
        let words: [&str; 0] = [];
        assert!(distribute_words(&words, &acoustic(&[(1.0, 2.0)]), 0.0, 3.0).is_empty());
        assert!(distribute_words(&words, &[], 0.0, 3.0).is_empty());
    }

    #[test]
    fn test_single_acoustic_word_splits_its_span() {
        let timings = distribute_words(&["a", "b"], &acoustic(&[(10.0, 12.0)]), 9.0, 13.0);

        assert_eq!(timings.len(), 2);
        assert_eq!(timings[0].start_time, 10.0);
        assert_eq!(timings[0].end_time, 11.0);
        assert_eq!(timings[1].start_time, 11.0);
        assert_eq!(timings[1].end_time, 12.0);
    }

    #[test]
    fn test_equal_counts_land_on_onsets() {
        let onsets = acoustic(&[(5.1, 5.6), (5.8, 6.4), (6.5, 7.9)]);
        let timings = distribute_words(&["Dòng", "thứ", "nhất"], &onsets, 5.0, 8.0);

        let starts: Vec<f64> = timings.iter().map(|t| t.start_time).collect();
        assert_eq!(starts, vec![5.1, 5.8, 6.5]);
        assert!((timings[2].end_time - 7.9).abs() < 1e-9);
    }

    #[test]
    fn test_more_lyric_words_than_onsets() {
        // 4 lyric words over 2 slots: each word takes half a slot
        let onsets = acoustic(&[(0.0, 1.0), (2.0, 3.0)]);
        let timings = distribute_words(&["a", "b", "c", "d"], &onsets, 0.0, 3.0);

        let spans: Vec<(f64, f64)> = timings.iter().map(|t| (t.start_time, t.end_time)).collect();
        assert_eq!(spans, vec![(0.0, 1.0), (1.0, 2.0), (2.0, 2.5), (2.5, 3.0)]);
    }

    #[test]
    fn test_fewer_lyric_words_than_onsets() {
        let onsets = acoustic(&[(0.0, 0.5), (1.0, 1.5), (2.0, 2.5), (3.0, 3.5)]);
        let timings = distribute_words(&["one", "two"], &onsets, 0.0, 4.0);

        assert_eq!(timings[0].start_time, 0.0);
        assert_eq!(timings[0].end_time, 2.0);
        assert_eq!(timings[1].start_time, 2.0);
        assert_eq!(timings[1].end_time, 3.5);
    }

    #[test]
    fn test_character_fallback_covers_segment() {
        let timings = distribute_words(&["ab", "cd", "efgh"], &[], 4.0, 8.0);

        assert_eq!(timings[0].start_time, 4.0);
        assert_eq!(timings[0].end_time, 5.0);
        assert_eq!(timings[1].start_time, 5.0);
        assert_eq!(timings[1].end_time, 6.0);
        assert_eq!(timings[2].start_time, 6.0);
        assert_eq!(timings[2].end_time, 8.0);
    }

    #[test]
    fn test_character_fallback_ends_on_fractional_bound() {
        // 0.3 + (0.9 - 0.3) rounds to 0.9000000000000001
        let timings = distribute_words(&["ab", "cde"], &[], 0.3, 0.9);

        assert_eq!(timings[0].start_time, 0.3);
        assert_eq!(timings[1].end_time, 0.9);
    }

    #[test]
    fn test_character_fallback_counts_scalars_not_bytes() {
        // "ấ" is multi-byte in UTF-8 but one character
        let timings = distribute_words(&["ấ", "b"], &[], 0.0, 2.0);
        assert_eq!(timings[0].end_time, 1.0);
    }

    #[test]
    fn test_degenerate_segment_uses_duration_floor() {
        let timings = distribute_words(&["x", "y"], &[], 3.0, 3.0);

        assert_eq!(timings[0].start_time, 3.0);
        assert!((timings[1].end_time - 3.1).abs() < 1e-12);
        for t in &timings {
            assert!(t.start_time.is_finite() && t.end_time.is_finite());
            assert!(t.end_time >= t.start_time);
        }
    }
}
