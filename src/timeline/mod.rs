//! Consumer-side helpers over assembled karaoke segments
//!
//! - Playback lookup: which line and word are live at a given time
//! - Editing: nudging and re-speeding a line without re-running alignment

mod edit;
mod playback;

pub use edit::{nudge, rescale};
pub use playback::{active_segment, active_word, live_segment, word_progress};
