//! rolo-http — the HTTP surface of rolo.
//!
//! Builds the axum router and serves it. Handlers stay thin: parse the query
//! string, call into `rolo-core`, and map errors onto status codes. All state
//! is injected through [`AppState`]; there are no module-level globals.

pub mod error;
pub mod handlers;

use axum::{routing::get, Router};
use rolo_core::Dataset;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// State shared by all handlers: the read-only contact dataset.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
}

impl AppState {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }
}

/// Build the route table.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/search", get(handlers::search))
        .route("/health", get(handlers::health))
        .with_state(state)
}

/// Bind `addr` and serve requests until the task is stopped.
pub async fn serve(addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
