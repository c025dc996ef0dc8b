//! Request handlers.

use crate::error::ApiError;
use crate::AppState;
use axum::extract::{Query, State};
use axum::response::Html;
use axum::Json;
use rolo_core::{Field, SearchPage, SearchRequest, DEFAULT_PAGE_SIZE};
use serde::{Deserialize, Serialize};

/// The embedded search page served at `/`.
const SEARCH_PAGE: &str = include_str!("../assets/search.html");

// ---------------------------------------------------------------------------
// GET /search
// ---------------------------------------------------------------------------

/// Query-string parameters for `GET /search`.
///
/// Non-integer or negative `size`/`offset` values are rejected by the `Query`
/// extractor itself (400) before this struct exists.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
    pub field: Option<String>,
    #[serde(default = "default_size")]
    pub size: usize,
    #[serde(default)]
    pub offset: usize,
}

fn default_size() -> usize {
    DEFAULT_PAGE_SIZE
}

pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchPage>, ApiError> {
    let field = params
        .field
        .as_deref()
        .map(str::parse::<Field>)
        .transpose()?;

    let request = SearchRequest {
        query: params.query,
        field,
        size: params.size,
        offset: params.offset,
    };
    let page = rolo_core::search(state.dataset.contacts(), &request)?;

    tracing::debug!(
        query = request.query.as_deref().unwrap_or(""),
        total = page.total,
        returned = page.results.len(),
        "search served"
    );
    Ok(Json(page))
}

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

pub async fn index() -> Html<&'static str> {
    Html(SEARCH_PAGE)
}

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub contacts: usize,
    pub source: String,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        contacts: state.dataset.len(),
        source: state.dataset.source().to_string(),
        loaded_at: state.dataset.loaded_at(),
    })
}
