use crate::sync::SyncService;
use std::sync::Arc;

/// Default request body cap; songs arrive base64-encoded inside JSON
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Oracle-backed sync pipeline (also carries the alignment tunables)
    pub sync: Arc<SyncService>,

    /// Largest accepted request body in bytes
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(sync: Arc<SyncService>) -> Self {
        Self {
            sync,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}
