//! lore-server: HTTP transport for lore searches.
//!
//! Serves a single endpoint:
//!
//! ```text
//! GET /search?query=cat&caseSensitive=false&wholeWords=false&fuzzy=false&sortByRelevance=false
//! ```
//!
//! Each request takes one store snapshot (re-reading the document first when
//! the reload policy is `per_request`) and runs the search on the blocking
//! pool against that snapshot.

pub mod wire;

use axum::{
    extract::{rejection::QueryRejection, Query as Params, State},
    http::{header, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use lore_core::{Markers, Query, StoreHandle};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use wire::{ApiError, SearchResponse};

/// State shared by all requests.
#[derive(Debug)]
pub struct AppState {
    pub store: StoreHandle,
    pub markers: Markers,
}

impl AppState {
    pub fn new(store: StoreHandle, markers: Markers) -> Self {
        Self { store, markers }
    }
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/search", get(search))
        .fallback(not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(addr: &str, state: Arc<AppState>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        store = %state.store.path().display(),
        policy = ?state.store.policy(),
        "server: listening"
    );
    axum::serve(listener, router(state)).await?;
    Ok(())
}

async fn search(
    State(state): State<Arc<AppState>>,
    params: Result<Params<Query>, QueryRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Params(query) = params?;
    tracing::debug!(query = %query.text, "server: search request");

    let results = tokio::task::spawn_blocking(move || -> Result<_, lore_core::SearchError> {
        let snapshot = state.store.snapshot_for_search()?;
        lore_core::search_with(&snapshot, &query, &state.markers)
    })
    .await??;

    Ok(Json(SearchResponse::new(results)))
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "not found: only GET /search is served",
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
