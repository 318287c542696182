//! Axum route handlers for the ATS check.

use axum::{
    extract::{Multipart, Path, State},
    response::Html,
    Json,
};
use tracing::info;
use uuid::Uuid;

use crate::ats::checker::check_ats;
use crate::ats::models::AtsReport;
use crate::ats::render::render_ats_panel;
use crate::errors::AppError;
use crate::state::AppState;
use crate::upload::UploadForm;
use crate::workspace::slot::FeatureSnapshot;
use crate::workspace::{run_feature, Tab, Workspace};

/// Multipart text field holding the pasted job description.
pub const JOB_DESCRIPTION_FIELD: &str = "job_description";

/// POST /api/v1/workspaces/:id/ats
///
/// Needs both a `file` part and a non-blank `job_description`.
pub async fn handle_check_ats(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<AtsReport>, AppError> {
    let form = UploadForm::read(multipart).await?;
    let job_description = form
        .field(JOB_DESCRIPTION_FIELD)
        .ok_or_else(|| AppError::Validation("job_description cannot be empty".to_string()))?
        .to_string();
    let file = form
        .file
        .ok_or_else(|| AppError::Validation("a résumé file is required".to_string()))?;
    info!(
        workspace_id = %id,
        file = %file.name,
        jd_chars = job_description.chars().count(),
        "checking ATS compatibility"
    );

    let llm = &state.llm;
    let report = run_feature(
        &state.workspaces,
        id,
        Tab::Ats,
        Workspace::ats_slot,
        |language| async move { check_ats(llm, &file, &job_description, language).await },
    )
    .await?;

    Ok(Json(report))
}

/// DELETE /api/v1/workspaces/:id/ats
pub async fn handle_reset_ats(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FeatureSnapshot<AtsReport>>, AppError> {
    let snapshot = state
        .workspaces
        .with(id, |ws| {
            ws.ats.reset();
            Ok(ws.ats.snapshot())
        })
        .await?;
    Ok(Json(snapshot))
}

/// GET /api/v1/workspaces/:id/ats/panel
pub async fn handle_ats_panel(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    let html = state
        .workspaces
        .with(id, |ws| {
            let report = ws
                .ats
                .result()
                .ok_or_else(|| AppError::NotFound("no ATS check result available".to_string()))?;
            Ok(render_ats_panel(
                report,
                ws.preferences.language,
                ws.preferences.theme,
            )?)
        })
        .await?;
    Ok(Html(html))
}
