use super::messages::{AlignRequest, SegmentReply, SegmentRequest};
use super::{LineSegmenter, WordAligner};
use crate::alignment::AlignerResponse;
use crate::config::OracleConfig;
use anyhow::{anyhow, Context, Result};
use async_nats::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

/// Reaches both models over NATS request/reply
pub struct NatsOracle {
    client: Client,
    segment_subject: String,
    align_subject: Option<String>,
    timeout: Duration,
}

impl NatsOracle {
    /// Connect to NATS server
    pub async fn connect(config: &OracleConfig) -> Result<Self> {
        info!("Connecting to NATS at {}", config.nats_url);

        let client = async_nats::connect(config.nats_url.as_str())
            .await
            .context("Failed to connect to NATS")?;

        info!("Connected to NATS successfully");

        Ok(Self {
            client,
            segment_subject: config.segment_subject.clone(),
            align_subject: config.aligner_subject().map(str::to_string),
            timeout: Duration::from_secs(config.timeout_secs),
        })
    }

    /// Whether an aligner subject is configured
    pub fn has_aligner(&self) -> bool {
        self.align_subject.is_some()
    }

    async fn request<T: Serialize>(&self, subject: &str, message: &T) -> Result<Vec<u8>> {
        let payload = serde_json::to_vec(message)?;

        debug!("Requesting {} ({} bytes)", subject, payload.len());

        let reply = tokio::time::timeout(
            self.timeout,
            self.client.request(subject.to_string(), payload.into()),
        )
        .await
        .map_err(|_| anyhow!("Request to {} timed out after {:?}", subject, self.timeout))?
        .with_context(|| format!("Request to {} failed", subject))?;

        debug!("Reply from {} ({} bytes)", subject, reply.payload.len());

        Ok(reply.payload.to_vec())
    }
}

#[async_trait::async_trait]
impl LineSegmenter for NatsOracle {
    async fn segment(&self, request: &SegmentRequest) -> Result<String> {
        let body = self.request(&self.segment_subject, request).await?;
        let reply: SegmentReply =
            serde_json::from_slice(&body).context("Failed to parse segmenter reply")?;
        Ok(reply.text)
    }
}

#[async_trait::async_trait]
impl WordAligner for NatsOracle {
    async fn align(&self, request: &AlignRequest) -> Result<AlignerResponse> {
        let subject = self
            .align_subject
            .as_deref()
            .ok_or_else(|| anyhow!("No aligner subject configured"))?;

        let body = self.request(subject, request).await?;
        serde_json::from_slice(&body).context("Failed to parse aligner reply")
    }
}
