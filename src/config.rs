use crate::alignment::AlignmentConfig;
use crate::http::DEFAULT_MAX_BODY_BYTES;
use crate::sync::SyncConfig;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub alignment: AlignmentConfig,
    pub oracle: OracleConfig,
    pub sync: SyncConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "karaoke-sync".to_string(),
            http: HttpConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
    /// Largest accepted request body; audio is base64 inside JSON
    pub max_body_bytes: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 8080,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    /// NATS server URL
    pub nats_url: String,
    /// Subject the line segmenter answers on
    pub segment_subject: String,
    /// Subject the acoustic aligner answers on (unset or blank = no aligner)
    pub align_subject: Option<String>,
    /// Per-request timeout; long songs can take minutes to segment
    pub timeout_secs: u64,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            nats_url: "nats://localhost:4222".to_string(),
            segment_subject: "karaoke.segment".to_string(),
            align_subject: Some("karaoke.align".to_string()),
            timeout_secs: 180,
        }
    }
}

impl OracleConfig {
    /// Aligner subject, treating a blank value as unset
    ///
    /// Neither TOML nor env can express `None`, so `align_subject = ""`
    /// is how a deployment turns the aligner off.
    pub fn aligner_subject(&self) -> Option<&str> {
        self.align_subject
            .as_deref()
            .map(str::trim)
            .filter(|subject| !subject.is_empty())
    }
}

impl Config {
    /// Load from an optional config file, then `KARAOKE__*` environment overrides
    ///
    /// e.g. `KARAOKE__SERVICE__HTTP__PORT=9000`
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("KARAOKE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
