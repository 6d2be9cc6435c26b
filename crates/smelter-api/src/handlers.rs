//! Route handler functions for all API endpoints.
//!
//! Each handler extracts its input via axum extractors, reads from the
//! shared AppState, and returns a JSON response.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use smelter_core::types::BatchRecord;

use crate::error::ApiError;
use crate::state::AppState;

// =============================================================================
// Request / response types
// =============================================================================

/// Request body for POST /api/chatbot.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatbotRequest {
    /// Free-text question about a batch.
    pub question: String,
}

/// Response body for POST /api/chatbot.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatbotResponse {
    pub answer: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BatchesResponse {
    pub batches: Vec<BatchRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
    pub batch_count: u64,
}

// =============================================================================
// Handler functions
// =============================================================================

/// POST /api/chatbot - answer a free-text question about a batch.
///
/// Any well-formed question gets 200, including unknown batches and
/// questions with no batch id or timestamp. A missing or non-string
/// `question` is a 400.
pub async fn chatbot(
    State(state): State<AppState>,
    payload: Result<Json<ChatbotRequest>, JsonRejection>,
) -> Result<Json<ChatbotResponse>, ApiError> {
    let Json(request) = payload?;
    let answer = state.interpreter.try_answer(&request.question)?;
    Ok(Json(ChatbotResponse { answer }))
}

/// GET /api/batches - every stored batch, in production order.
pub async fn list_batches(State(state): State<AppState>) -> Json<BatchesResponse> {
    Json(BatchesResponse {
        batches: state.store.records().to_vec(),
    })
}

/// GET /api/batches/{batch_id} - a single batch record.
pub async fn get_batch(
    State(state): State<AppState>,
    Path(batch_id): Path<String>,
) -> Result<Json<BatchRecord>, ApiError> {
    state
        .store
        .find_by_batch_id(&batch_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Batch {} not found", batch_id)))
}

/// GET /health - liveness and dataset size.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        batch_count: state.store.len() as u64,
    })
}
