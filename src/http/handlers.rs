use super::state::AppState;
use crate::alignment::{assemble_payload, AcousticWord, AlignerResponse};
use crate::sync::{SyncInput, SYNC_FAILED_MESSAGE};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncKaraokeRequest {
    /// Newline-separated lyrics to sync with the audio
    pub raw_lyrics: String,

    /// Base64-encoded audio file
    pub audio: String,

    /// Audio MIME type
    #[serde(default = "default_mime_type")]
    pub mime_type: String,
}

fn default_mime_type() -> String {
    "audio/mpeg".to_string()
}

#[derive(Debug, Deserialize)]
pub struct AlignKaraokeRequest {
    /// Raw line segmenter response (fenced JSON allowed)
    pub segments: String,

    /// Acoustic aligner words; omitted = character-proportional timing
    #[serde(default)]
    pub words: Option<Vec<AcousticWord>>,
}

/// Envelope shared with the studio's other generation endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub message: String,
    pub data: GenerationData,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationData {
    /// JSON-serialized `KaraokeSegment[]`
    pub generated_text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /karaoke/sync
/// Sync lyrics with uploaded audio using both models
pub async fn sync_karaoke(
    State(state): State<AppState>,
    Json(req): Json<SyncKaraokeRequest>,
) -> impl IntoResponse {
    let audio = match base64::engine::general_purpose::STANDARD.decode(req.audio.as_bytes()) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Rejecting sync request with bad audio encoding: {}", e);
            return error_response(StatusCode::BAD_REQUEST, "audio must be base64-encoded");
        }
    };

    let input = SyncInput {
        audio,
        mime_type: req.mime_type,
        raw_lyrics: req.raw_lyrics,
    };

    let segments = match state.sync.sync(&input).await {
        Ok(segments) => segments,
        Err(e) if e.is_invalid_input() => {
            warn!("Rejecting sync request: {}", e);
            return error_response(StatusCode::BAD_REQUEST, e.user_message());
        }
        Err(e) => {
            error!("Karaoke sync failed: {}", e);
            return error_response(StatusCode::BAD_GATEWAY, e.user_message());
        }
    };

    let generated_text = match serde_json::to_string(&segments) {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to serialize segments: {}", e);
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, SYNC_FAILED_MESSAGE);
        }
    };

    info!("Karaoke synced: {} segments", segments.len());

    (
        StatusCode::OK,
        Json(GenerationResponse {
            message: "Karaoke synced successfully".to_string(),
            data: GenerationData { generated_text },
        }),
    )
        .into_response()
}

/// POST /karaoke/align
/// Time already-obtained model outputs without calling the models
pub async fn align_karaoke(
    State(state): State<AppState>,
    Json(req): Json<AlignKaraokeRequest>,
) -> impl IntoResponse {
    let words = AlignerResponse { words: req.words }.into_words();
    let segments = assemble_payload(&req.segments, &words, state.sync.alignment_config());

    if segments.is_empty() {
        return error_response(StatusCode::UNPROCESSABLE_ENTITY, SYNC_FAILED_MESSAGE);
    }

    (StatusCode::OK, Json(segments)).into_response()
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
