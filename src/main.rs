// ABOUTME: Entry point for the itemd binary.
// ABOUTME: Parses CLI arguments, initializes tracing, and starts the HTTP server.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use itemd_server::{AppState, ItemdConfig, create_router};
use itemd_store::SessionManager;

#[derive(Debug, Parser)]
#[command(name = "itemd", about = "Minimal HTTP CRUD service for item records")]
struct Args {
    /// SQLite database file (overrides ITEMD_DB)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Socket address to bind (overrides ITEMD_BIND)
    #[arg(long)]
    bind: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "itemd=debug,tower_http=debug".parse().unwrap()),
        )
        .init();

    let mut config = ItemdConfig::from_env()?;
    if let Some(db) = args.db {
        config.db_path = db;
    }
    if let Some(bind) = args.bind {
        config.bind = bind;
    }

    // Schema initialization happens here, once, at process start.
    let sessions = SessionManager::new(&config.db_path)?;
    tracing::info!("using database at {}", config.db_path.display());

    let state = Arc::new(AppState::new(sessions));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!("itemd listening on {}", config.bind);
    axum::serve(listener, app).await?;

    Ok(())
}
