//! Axum route handlers for the résumé builder.

use axum::{
    extract::{Multipart, Path, State},
    response::Html,
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::resume::extractor::extract_resume;
use crate::resume::models::ResumeProfile;
use crate::resume::render::render_resume;
use crate::state::AppState;
use crate::upload::UploadForm;
use crate::workspace::slot::FeatureSnapshot;
use crate::workspace::{run_feature, Tab, Workspace};

/// POST /api/v1/workspaces/:id/resume
///
/// Multipart with a `file` part. Replaces any previously extracted profile.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<ResumeProfile>, AppError> {
    let form = UploadForm::read(multipart).await?;
    let file = form
        .file
        .ok_or_else(|| AppError::Validation("a résumé file is required".to_string()))?;
    info!(workspace_id = %id, file = %file.name, size = %file.display_size(), "analyzing resume");

    let llm = &state.llm;
    let profile = run_feature(
        &state.workspaces,
        id,
        Tab::Resume,
        Workspace::resume_slot,
        |language| async move { extract_resume(llm, &file, language).await },
    )
    .await?;

    Ok(Json(profile))
}

/// DELETE /api/v1/workspaces/:id/resume
///
/// "Upload New": drops the held profile.
pub async fn handle_reset_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FeatureSnapshot<ResumeProfile>>, AppError> {
    let snapshot = state
        .workspaces
        .with(id, |ws| {
            ws.resume.reset();
            Ok(ws.resume.snapshot())
        })
        .await?;
    Ok(Json(snapshot))
}

/// GET /api/v1/workspaces/:id/resume/print
///
/// Printable A4 page in the workspace language.
pub async fn handle_print_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    let html = state
        .workspaces
        .with(id, |ws| {
            let profile = ws
                .resume
                .result()
                .ok_or_else(|| AppError::NotFound("no résumé has been analyzed".to_string()))?;
            Ok(render_resume(profile, ws.preferences.language)?)
        })
        .await?;
    Ok(Html(html))
}
