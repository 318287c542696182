//! Axum route handlers for workspace lifecycle, view selection and preferences.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::i18n::Language;
use crate::state::AppState;
use crate::theme::Theme;
use crate::workspace::{Preferences, Tab, WorkspaceSnapshot};

#[derive(Debug, Default, Deserialize)]
pub struct CreateWorkspaceRequest {
    pub language: Option<Language>,
    pub theme: Option<Theme>,
}

#[derive(Debug, Deserialize)]
pub struct SelectTabRequest {
    pub tab: Tab,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdatePreferencesRequest {
    pub language: Option<Language>,
    pub theme: Option<Theme>,
}

/// POST /api/v1/workspaces
///
/// Body is optional; language falls back to the configured default.
/// A body that is present must be a valid request.
pub async fn handle_create_workspace(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<WorkspaceSnapshot>), AppError> {
    let request = parse_create_request(&body)?;
    let preferences = Preferences {
        language: request.language.unwrap_or(state.config.default_language),
        theme: request.theme.unwrap_or_default(),
    };
    let snapshot = state.workspaces.create(preferences).await;
    Ok((StatusCode::CREATED, Json(snapshot)))
}

fn parse_create_request(body: &[u8]) -> Result<CreateWorkspaceRequest, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(CreateWorkspaceRequest::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| AppError::Validation(format!("invalid workspace request: {e}")))
}

/// GET /api/v1/workspaces/:id
pub async fn handle_get_workspace(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<WorkspaceSnapshot>, AppError> {
    let snapshot = state.workspaces.with(id, |ws| Ok(ws.snapshot())).await?;
    Ok(Json(snapshot))
}

/// DELETE /api/v1/workspaces/:id
pub async fn handle_delete_workspace(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.workspaces.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/workspaces/:id/tab
pub async fn handle_select_tab(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SelectTabRequest>,
) -> Result<Json<WorkspaceSnapshot>, AppError> {
    let snapshot = state
        .workspaces
        .with(id, |ws| {
            ws.select_tab(req.tab);
            Ok(ws.snapshot())
        })
        .await?;
    Ok(Json(snapshot))
}

/// PATCH /api/v1/workspaces/:id/preferences
pub async fn handle_update_preferences(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdatePreferencesRequest>,
) -> Result<Json<WorkspaceSnapshot>, AppError> {
    let snapshot = state
        .workspaces
        .with(id, |ws| {
            if let Some(language) = req.language {
                ws.set_language(language);
            }
            if let Some(theme) = req.theme {
                ws.set_theme(theme);
            }
            Ok(ws.snapshot())
        })
        .await?;
    Ok(Json(snapshot))
}

/// POST /api/v1/workspaces/:id/preferences/language/toggle
pub async fn handle_toggle_language(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<WorkspaceSnapshot>, AppError> {
    let snapshot = state
        .workspaces
        .with(id, |ws| {
            ws.set_language(ws.preferences.language.toggled());
            Ok(ws.snapshot())
        })
        .await?;
    Ok(Json(snapshot))
}

/// POST /api/v1/workspaces/:id/preferences/theme/toggle
pub async fn handle_toggle_theme(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<WorkspaceSnapshot>, AppError> {
    let snapshot = state
        .workspaces
        .with(id, |ws| {
            ws.set_theme(ws.preferences.theme.toggled());
            Ok(ws.snapshot())
        })
        .await?;
    Ok(Json(snapshot))
}
