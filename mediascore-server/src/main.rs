//! mediascore-server: HTTP front end for the content review engine

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use mediascore::analyzer::{EvaluationEngine, KeywordCategory};
use mediascore::config::load_config;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod error;
mod routes;

use routes::AppState;

#[derive(Parser)]
#[command(name = "mediascore-server", about = "mediascore content review HTTP server")]
struct Cli {
    /// Path to config file (default: search .mediascorerc.json in current dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Bind address (overrides config `server.host`)
    #[arg(long, env = "MEDIASCORE_HOST")]
    host: Option<String>,

    /// Bind port (overrides config `server.port`)
    #[arg(long, env = "MEDIASCORE_PORT")]
    port: Option<u16>,

    /// Directory holding index.html (overrides config `server.staticDir`)
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("mediascore=info".parse()?))
        .init();

    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let config = load_config(&cwd, cli.config.as_deref())?;
    let server = &config.server;

    let host = cli.host.unwrap_or_else(|| server.host().to_string());
    let port = cli.port.unwrap_or_else(|| server.port());
    let static_dir = cli
        .static_dir
        .unwrap_or_else(|| server.static_dir().to_path_buf());

    let engine = EvaluationEngine::from_config(&config);
    let keywords = engine.keywords();
    info!(
        absolute_claims = keywords.phrases(KeywordCategory::AbsoluteClaims).len(),
        sensitive = keywords.phrases(KeywordCategory::SensitiveDomain).len(),
        privacy = keywords.phrases(KeywordCategory::Privacy).len(),
        "Keyword lists loaded"
    );

    let state = Arc::new(AppState {
        engine,
        static_dir,
        max_upload_bytes: server.max_upload_bytes(),
        allowed_origins: server.allowed_origins.clone(),
    });

    let app = routes::build_router(state);

    let addr = format!("{host}:{port}");
    info!("mediascore server starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
