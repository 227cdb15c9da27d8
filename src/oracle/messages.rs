use base64::Engine;
use serde::{Deserialize, Serialize};

/// Request sent to the line segmenter
#[derive(Debug, Serialize, Deserialize)]
pub struct SegmentRequest {
    pub request_id: String,
    /// Lyric lines in sung order, repeats included
    pub lyrics: Vec<String>,
    pub audio: String,  // Base64-encoded audio file bytes
    pub mime_type: String,
    pub timestamp: String,  // RFC3339 timestamp
}

impl SegmentRequest {
    pub fn new(request_id: String, lyrics: Vec<String>, audio: &[u8], mime_type: &str) -> Self {
        Self {
            request_id,
            lyrics,
            audio: base64::engine::general_purpose::STANDARD.encode(audio),
            mime_type: mime_type.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Line segmenter reply: the model's raw text, possibly fenced JSON
#[derive(Debug, Serialize, Deserialize)]
pub struct SegmentReply {
    pub text: String,
}

/// Request sent to the acoustic word aligner
///
/// The reply body is an [`crate::alignment::AlignerResponse`].
#[derive(Debug, Serialize, Deserialize)]
pub struct AlignRequest {
    pub request_id: String,
    pub audio: String,  // Base64-encoded audio file bytes
    pub mime_type: String,
    pub language: String,
    pub timestamp: String,  // RFC3339 timestamp
}

impl AlignRequest {
    pub fn new(request_id: String, audio: &[u8], mime_type: &str, language: &str) -> Self {
        Self {
            request_id,
            audio: base64::engine::general_purpose::STANDARD.encode(audio),
            mime_type: mime_type.to_string(),
            language: language.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
