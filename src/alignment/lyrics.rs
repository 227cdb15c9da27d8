/// Sung lines of the caller's lyrics, one entry per line including repeats
///
/// Lines are trimmed and blank lines are dropped.
pub fn lyric_lines(raw_lyrics: &str) -> Vec<&str> {
    raw_lyrics
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Split a line on runs of whitespace, discarding empty tokens
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Total whitespace-delimited words across all lyric lines
pub fn word_count(raw_lyrics: &str) -> usize {
    raw_lyrics.split_whitespace().count()
}
