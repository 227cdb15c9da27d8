//! HTTP API for the karaoke studio front end
//!
//! - POST /karaoke/sync - Run both oracles and return timed segments
//! - POST /karaoke/align - Time saved oracle outputs (no model calls)
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use handlers::{
    AlignKaraokeRequest, ErrorResponse, GenerationData, GenerationResponse, SyncKaraokeRequest,
};
pub use routes::create_router;
pub use state::{AppState, DEFAULT_MAX_BODY_BYTES};
