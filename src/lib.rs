pub mod alignment;
pub mod config;
pub mod http;
pub mod oracle;
pub mod sync;
pub mod timeline;

pub use alignment::{
    assemble, assemble_payload, distribute_words, AcousticWord, AlignerResponse, AlignmentConfig,
    KaraokeSegment, LineSegment, WordTiming,
};
pub use config::Config;
pub use http::{create_router, AppState};
pub use oracle::{LineSegmenter, NatsOracle, WordAligner};
pub use sync::{SyncConfig, SyncError, SyncInput, SyncService};
