use super::config::SyncConfig;
use super::error::SyncError;
use crate::alignment::{
    assemble_payload, lyric_lines, word_count, AcousticWord, AlignmentConfig, KaraokeSegment,
};
use crate::oracle::{AlignRequest, LineSegmenter, SegmentRequest, WordAligner};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Audio plus the lyrics to sync against it
#[derive(Debug, Clone)]
pub struct SyncInput {
    /// Raw audio file bytes
    pub audio: Vec<u8>,
    pub mime_type: String,
    /// Newline-separated lyrics, one line per sung line
    pub raw_lyrics: String,
}

/// Runs both oracles for a request and assembles karaoke segments
///
/// Holds no per-request state; one instance serves concurrent requests.
pub struct SyncService {
    segmenter: Arc<dyn LineSegmenter>,
    aligner: Option<Arc<dyn WordAligner>>,
    config: SyncConfig,
    alignment: AlignmentConfig,
}

impl SyncService {
    pub fn new(
        segmenter: Arc<dyn LineSegmenter>,
        aligner: Option<Arc<dyn WordAligner>>,
        config: SyncConfig,
        alignment: AlignmentConfig,
    ) -> Self {
        Self {
            segmenter,
            aligner,
            config,
            alignment,
        }
    }

    pub fn alignment_config(&self) -> &AlignmentConfig {
        &self.alignment
    }

    /// Sync lyrics to audio
    ///
    /// Segmenter and aligner are called concurrently; assembly starts once
    /// both have answered.
    pub async fn sync(&self, input: &SyncInput) -> Result<Vec<KaraokeSegment>, SyncError> {
        let lines = lyric_lines(&input.raw_lyrics);
        if lines.is_empty() {
            return Err(SyncError::InvalidInput("lyrics contain no lines".to_string()));
        }
        if input.audio.is_empty() {
            return Err(SyncError::InvalidInput("audio is empty".to_string()));
        }

        let request_id = uuid::Uuid::new_v4().to_string();

        info!(
            "Sync {}: {} lines, {} words, {} bytes of {}",
            request_id,
            lines.len(),
            word_count(&input.raw_lyrics),
            input.audio.len(),
            input.mime_type
        );

        let segment_request = SegmentRequest::new(
            request_id.clone(),
            lines.iter().map(|line| line.to_string()).collect(),
            &input.audio,
            &input.mime_type,
        );
        let align_request = AlignRequest::new(
            request_id.clone(),
            &input.audio,
            &input.mime_type,
            &self.config.language,
        );

        let (segmented, aligned) = tokio::join!(
            self.segmenter.segment(&segment_request),
            self.acoustic_words(&align_request)
        );

        let raw = segmented.map_err(|e| {
            error!("Sync {}: segmenter failed: {:#}", request_id, e);
            SyncError::Segmenter(e)
        })?;
        let words = aligned?;

        let segments = assemble_payload(&raw, &words, &self.alignment);
        if segments.is_empty() {
            error!("Sync {}: segmenter returned no usable segments", request_id);
            return Err(SyncError::NoSegments);
        }

        if segments.len() != lines.len() {
            if self.config.strict_line_count {
                error!(
                    "Sync {}: {} segments for {} lines",
                    request_id,
                    segments.len(),
                    lines.len()
                );
                return Err(SyncError::LineCountMismatch {
                    expected: lines.len(),
                    actual: segments.len(),
                });
            }
            warn!(
                "Sync {}: {} segments for {} lines, trusting segmenter order",
                request_id,
                segments.len(),
                lines.len()
            );
        }

        info!(
            "Sync {} complete: {} segments, {} acoustic words",
            request_id,
            segments.len(),
            words.len()
        );

        Ok(segments)
    }

    /// Aligner output, or no words when it is absent or failing and not required
    async fn acoustic_words(&self, request: &AlignRequest) -> Result<Vec<AcousticWord>, SyncError> {
        let Some(aligner) = &self.aligner else {
            if self.config.require_aligner {
                return Err(SyncError::Aligner(anyhow::anyhow!("no aligner configured")));
            }
            warn!("No acoustic aligner configured, using character-proportional timing");
            return Ok(Vec::new());
        };

        match aligner.align(request).await {
            Ok(response) => Ok(response.into_words()),
            Err(e) if self.config.require_aligner => {
                error!("Sync {}: aligner failed: {:#}", request.request_id, e);
                Err(SyncError::Aligner(e))
            }
            Err(e) => {
                warn!(
                    "Sync {}: aligner failed, using character-proportional timing: {:#}",
                    request.request_id, e
                );
                Ok(Vec::new())
            }
        }
    }
}
