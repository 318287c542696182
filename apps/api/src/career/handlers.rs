//! Axum route handlers for the career path view.

use axum::{
    extract::{Multipart, Path, State},
    response::Html,
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::career::analyzer::analyze_career;
use crate::career::models::CareerAnalysis;
use crate::career::render::render_career_map;
use crate::errors::AppError;
use crate::state::AppState;
use crate::upload::UploadForm;
use crate::workspace::slot::FeatureSnapshot;
use crate::workspace::{run_feature, Tab, Workspace};

/// POST /api/v1/workspaces/:id/career
pub async fn handle_analyze_career(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<CareerAnalysis>, AppError> {
    let form = UploadForm::read(multipart).await?;
    let file = form
        .file
        .ok_or_else(|| AppError::Validation("a résumé file is required".to_string()))?;
    info!(workspace_id = %id, file = %file.name, "analyzing career path");

    let llm = &state.llm;
    let analysis = run_feature(
        &state.workspaces,
        id,
        Tab::Career,
        Workspace::career_slot,
        |language| async move { analyze_career(llm, &file, language).await },
    )
    .await?;

    Ok(Json(analysis))
}

/// DELETE /api/v1/workspaces/:id/career
pub async fn handle_reset_career(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FeatureSnapshot<CareerAnalysis>>, AppError> {
    let snapshot = state
        .workspaces
        .with(id, |ws| {
            ws.career.reset();
            Ok(ws.career.snapshot())
        })
        .await?;
    Ok(Json(snapshot))
}

/// GET /api/v1/workspaces/:id/career/map
pub async fn handle_career_map(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    let html = state
        .workspaces
        .with(id, |ws| {
            let analysis = ws
                .career
                .result()
                .ok_or_else(|| AppError::NotFound("no career analysis available".to_string()))?;
            Ok(render_career_map(
                analysis,
                ws.preferences.language,
                ws.preferences.theme,
            )?)
        })
        .await?;
    Ok(Html(html))
}
