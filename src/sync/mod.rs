//! Sync request orchestration
//!
//! One request = segmenter + aligner in parallel, then pure assembly.

mod config;
mod error;
mod service;

pub use config::SyncConfig;
pub use error::{SyncError, SYNC_FAILED_MESSAGE};
pub use service::{SyncInput, SyncService};
