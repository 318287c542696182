//! Axum route handlers for the interview coach chat.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::session::{ChatTurn, InterviewSnapshot};
use crate::state::AppState;
use crate::workspace::store::RESULT_DISCARDED;
use crate::workspace::Tab;

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct SendMessageResponse {
    pub reply: ChatTurn,
    pub interview: InterviewSnapshot,
}

/// POST /api/v1/workspaces/:id/interview/messages
///
/// The user turn is recorded before the model is called. A failed call still
/// answers 200 with one synthetic assistant turn in the transcript.
pub async fn handle_send_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SendMessageRequest>,
) -> Result<Json<SendMessageResponse>, AppError> {
    if req.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    let pending = state
        .workspaces
        .with(id, |ws| {
            ws.require_active(Tab::Interview)?;
            let language = ws.preferences.language;
            Ok(ws.interview.begin_turn(language, &req.message)?)
        })
        .await?;
    info!(
        workspace_id = %id,
        session_id = %pending.session_id,
        language = %pending.language,
        history_turns = pending.history.len(),
        "sending interview message"
    );

    let reply = match state
        .llm
        .chat(pending.system, &pending.history, &pending.message)
        .await
    {
        Ok(text) => Some(text),
        Err(e) => {
            error!(workspace_id = %id, session_id = %pending.session_id, "interview chat failed: {e}");
            None
        }
    };

    let response = state
        .workspaces
        .with(id, |ws| {
            let reply = ws
                .interview
                .finish_turn(&pending, reply.as_deref())
                .ok_or_else(|| AppError::Conflict(RESULT_DISCARDED.to_string()))?;
            Ok(SendMessageResponse {
                reply,
                interview: ws.interview.snapshot(),
            })
        })
        .await?;

    Ok(Json(response))
}

/// GET /api/v1/workspaces/:id/interview
pub async fn handle_get_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InterviewSnapshot>, AppError> {
    let snapshot = state
        .workspaces
        .with(id, |ws| Ok(ws.interview.snapshot()))
        .await?;
    Ok(Json(snapshot))
}

/// DELETE /api/v1/workspaces/:id/interview
///
/// Discards the session and its transcript.
pub async fn handle_reset_interview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InterviewSnapshot>, AppError> {
    let snapshot = state
        .workspaces
        .with(id, |ws| {
            ws.interview.reset();
            Ok(ws.interview.snapshot())
        })
        .await?;
    Ok(Json(snapshot))
}
