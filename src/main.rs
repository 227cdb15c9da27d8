use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use karaoke_sync::{
    assemble_payload, create_router, AlignerResponse, AppState, Config, LineSegmenter, NatsOracle,
    SyncService, WordAligner,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "karaoke-sync", about = "Word-level karaoke timing service")]
struct Cli {
    /// Config file (extension optional)
    #[arg(long, default_value = "config/karaoke-sync")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API backed by the NATS model services
    Serve,
    /// Time saved model outputs and print the segments as JSON
    Align {
        /// Raw line segmenter response
        #[arg(long)]
        segments: PathBuf,
        /// Acoustic aligner response (`{"words": [...]}`)
        #[arg(long)]
        words: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let cfg = Config::load(&cli.config)?;

    match cli.command {
        Command::Serve => serve(cfg).await,
        Command::Align { segments, words } => align(&cfg, &segments, words.as_deref()),
    }
}

async fn serve(cfg: Config) -> Result<()> {
    info!("{} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));

    let oracle = Arc::new(NatsOracle::connect(&cfg.oracle).await?);

    let aligner: Option<Arc<dyn WordAligner>> = if oracle.has_aligner() {
        Some(oracle.clone() as Arc<dyn WordAligner>)
    } else {
        warn!("No aligner subject configured, word timing will be character-proportional");
        None
    };
    let segmenter: Arc<dyn LineSegmenter> = oracle;

    let service = SyncService::new(segmenter, aligner, cfg.sync.clone(), cfg.alignment.clone());
    let state =
        AppState::new(Arc::new(service)).with_max_body_bytes(cfg.service.http.max_body_bytes);
    let router = create_router(state);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .await
        .context("HTTP server failed")?;

    Ok(())
}

fn align(cfg: &Config, segments_path: &Path, words_path: Option<&Path>) -> Result<()> {
    let raw = std::fs::read_to_string(segments_path)
        .with_context(|| format!("Failed to read {}", segments_path.display()))?;

    let words = match words_path {
        Some(path) => {
            let body = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str::<AlignerResponse>(&body)
                .with_context(|| format!("Failed to parse {}", path.display()))?
                .into_words()
        }
        None => Vec::new(),
    };

    let segments = assemble_payload(&raw, &words, &cfg.alignment);
    if segments.is_empty() {
        anyhow::bail!("No segments could be assembled from {}", segments_path.display());
    }

    info!(
        "Assembled {} segments from {} acoustic words",
        segments.len(),
        words.len()
    );

    println!("{}", serde_json::to_string_pretty(&segments)?);

    Ok(())
}
