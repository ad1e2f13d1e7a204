//! Wire types for the `/search` endpoint.
//!
//! Success and failure bodies both carry a `success` flag so a client can
//! tell "no results" apart from "search failed" without looking at the status.

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lore_core::{SearchError, SearchResult};
use serde::Serialize;

/// `200` body: `{"success": true, "results": [...], "total": n}`.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub results: Vec<SearchResult>,
    pub total: usize,
}

impl SearchResponse {
    pub fn new(results: Vec<SearchResult>) -> Self {
        Self {
            success: true,
            total: results.len(),
            results,
        }
    }
}

/// Failure body: `{"success": false, "error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

/// Everything a search request can fail with.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid search parameters: {0}")]
    BadRequest(#[from] QueryRejection),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("search task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Search(_) | ApiError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::error!(%status, error = %self, "search: request failed");
        let body = ErrorBody {
            success: false,
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
