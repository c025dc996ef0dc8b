use anyhow::Context;
use clap::Parser;
use rolo_core::{config::Config, Dataset};
use rolo_http::AppState;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "rolo", about = "rolo — contact directory search service")]
struct Cli {
    /// Address to bind, e.g. 127.0.0.1:8080. Overrides `[server] bind`.
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// Contacts JSON file. Overrides `[dataset] path`; when neither is set,
    /// the embedded sample dataset is served.
    #[arg(long)]
    contacts: Option<PathBuf>,

    /// Explicit config file instead of ~/.config/rolo/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load()?,
    };

    let dataset = match &cli.contacts {
        Some(path) => Dataset::load(path)?,
        None if !config.dataset.path.is_empty() => Dataset::load(Path::new(&config.dataset.path))?,
        None => Dataset::embedded(),
    };
    tracing::info!(
        contacts = dataset.len(),
        source = dataset.source(),
        "contact dataset loaded"
    );

    let addr = match cli.bind {
        Some(addr) => addr,
        None => config
            .server
            .bind
            .parse()
            .with_context(|| format!("invalid [server] bind address {:?}", config.server.bind))?,
    };

    rolo_http::serve(addr, AppState::new(dataset)).await
}
