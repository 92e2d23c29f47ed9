use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::chat::assistant::ask;
use crate::chat::markdown::to_markdown;
use crate::chat::transcript::ChatTurn;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Omit to start a new session.
    pub session_id: Option<Uuid>,
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub session_id: Uuid,
    pub response: String,
    pub markdown: String,
    pub turn_count: usize,
}

#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub session_id: Uuid,
    pub turns: Vec<ChatTurn>,
}

/// POST /api/v1/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let session_id = req.session_id.unwrap_or_else(Uuid::new_v4);

    let turn = ask(&state.llm, &req.question).await?;
    let turn_count = state.transcripts.append(session_id, &turn).await?;

    Ok(Json(ChatResponse {
        session_id,
        markdown: to_markdown(&turn.response),
        response: turn.response,
        turn_count,
    }))
}

/// GET /api/v1/chat/:session_id
pub async fn handle_get_transcript(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<TranscriptResponse>, AppError> {
    let turns = state.transcripts.load(session_id).await?;
    Ok(Json(TranscriptResponse { session_id, turns }))
}

/// DELETE /api/v1/chat/:session_id
pub async fn handle_clear_transcript(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.transcripts.clear(session_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
