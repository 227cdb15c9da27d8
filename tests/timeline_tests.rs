// Integration tests for playback lookup and segment editing

use karaoke_sync::alignment::{AlignmentConfig, KaraokeSegment, WordTiming};
use karaoke_sync::timeline::{
    active_segment, active_word, live_segment, nudge, rescale, word_progress,
};

fn segment(id: &str, start_time: f64, end_time: f64, words: &[(f64, f64)]) -> KaraokeSegment {
    KaraokeSegment {
        id: id.to_string(),
        text: "la la".to_string(),
        start_time,
        end_time,
        words: words
            .iter()
            .map(|&(start_time, end_time)| WordTiming {
                text: "la".to_string(),
                start_time,
                end_time,
            })
            .collect(),
    }
}

fn song() -> Vec<KaraokeSegment> {
    vec![
        segment("seg_1", 10.0, 12.0, &[(10.0, 11.0), (11.0, 12.0)]),
        segment("seg_2", 14.0, 16.0, &[(14.0, 15.0), (15.0, 16.0)]),
    ]
}

#[test]
fn test_active_segment_exact_match() {
    let segments = song();
    assert_eq!(active_segment(&segments, 10.0, 5.0), Some(0));
    assert_eq!(active_segment(&segments, 12.0, 5.0), Some(0));
    assert_eq!(active_segment(&segments, 15.5, 5.0), Some(1));
}

#[test]
fn test_active_segment_holds_through_gap() {
    let segments = song();
    assert_eq!(active_segment(&segments, 13.0, 5.0), Some(0));
    assert_eq!(active_segment(&segments, 100.0, 5.0), Some(1));
}

#[test]
fn test_active_segment_pre_roll() {
    let segments = song();
    assert_eq!(active_segment(&segments, 5.0, 5.0), Some(0));
    assert_eq!(active_segment(&segments, 4.9, 5.0), None);
    assert_eq!(active_segment(&[], 1.0, 5.0), None);
}

#[test]
fn test_active_word_is_half_open() {
    let seg = &song()[0];
    assert_eq!(active_word(seg, 10.0), Some(0));
    assert_eq!(active_word(seg, 11.0), Some(1));
    assert_eq!(active_word(seg, 12.0), None);
}

#[test]
fn test_line_held_after_last_word_ends() {
    let segments = song();
    let end = segments[0].words[1].end_time;

    assert_eq!(active_segment(&segments, end, 5.0), Some(0));
    assert_eq!(active_word(&segments[0], end), None);
    assert_eq!(active_word(&segments[0], end - 0.01), Some(1));
}

#[test]
fn test_live_segment_uses_configured_pre_roll() {
    let segments = song();

    let default = AlignmentConfig::default();
    assert_eq!(live_segment(&segments, 5.0, &default), Some(0));
    assert_eq!(live_segment(&segments, 4.0, &default), None);

    let long_intro = AlignmentConfig {
        pre_roll_secs: 8.0,
        ..AlignmentConfig::default()
    };
    assert_eq!(live_segment(&segments, 4.0, &long_intro), Some(0));
    assert_eq!(live_segment(&segments, 13.0, &long_intro), Some(0));

    let no_pre_roll = AlignmentConfig {
        pre_roll_secs: 0.0,
        ..AlignmentConfig::default()
    };
    assert_eq!(live_segment(&segments, 9.9, &no_pre_roll), None);
    assert_eq!(live_segment(&segments, 10.0, &no_pre_roll), Some(0));
}

#[test]
fn test_word_progress() {
    let word = WordTiming {
        text: "la".to_string(),
        start_time: 2.0,
        end_time: 4.0,
    };
    assert_eq!(word_progress(&word, 1.0), 0.0);
    assert_eq!(word_progress(&word, 3.0), 0.5);
    assert_eq!(word_progress(&word, 9.0), 1.0);

    let instant = WordTiming {
        text: "la".to_string(),
        start_time: 2.0,
        end_time: 2.0,
    };
    assert_eq!(word_progress(&instant, 1.9), 0.0);
    assert_eq!(word_progress(&instant, 2.0), 1.0);
}

#[test]
fn test_nudge_shifts_words() {
    let moved = nudge(&song()[0], 0.5);

    assert_eq!(moved.id, "seg_1");
    assert_eq!(moved.start_time, 10.5);
    assert_eq!(moved.end_time, 12.5);
    assert_eq!(moved.words[1].start_time, 11.5);
}

#[test]
fn test_nudge_clamps_at_zero() {
    let seg = segment("seg_1", 0.5, 0.55, &[(0.5, 0.55)]);
    let moved = nudge(&seg, -1.0);

    assert_eq!(moved.start_time, 0.0);
    assert_eq!(moved.end_time, 0.1);
    assert_eq!(moved.words[0].start_time, 0.0);
    assert_eq!(moved.words[0].end_time, 0.0);
}

#[test]
fn test_rescale_keeps_relative_positions() {
    let slower = rescale(&song()[0], 2.0);

    assert_eq!(slower.start_time, 10.0);
    assert_eq!(slower.end_time, 14.0);
    assert_eq!(slower.words[0].end_time, 12.0);
    assert_eq!(slower.words[1].start_time, 12.0);
    assert_eq!(slower.words[1].end_time, 14.0);
}

#[test]
fn test_rescale_ignores_invalid_multiplier() {
    let seg = song()[0].clone();
    assert_eq!(rescale(&seg, 0.0), seg);
    assert_eq!(rescale(&seg, -1.0), seg);
    assert_eq!(rescale(&seg, f64::NAN), seg);
}
