//! Axum route handlers for the image studio.

use anyhow::Context;
use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::images::generator::generate_image;
use crate::images::models::{GeneratedImage, ImageSize};
use crate::state::AppState;
use crate::workspace::slot::FeatureSnapshot;
use crate::workspace::{run_feature, Tab, Workspace};

#[derive(Debug, Deserialize)]
pub struct GenerateImageRequest {
    pub prompt: String,
    #[serde(default)]
    pub size: ImageSize,
}

/// POST /api/v1/workspaces/:id/images
///
/// The previous image is cleared as soon as the new request starts.
pub async fn handle_generate_image(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<GenerateImageRequest>,
) -> Result<Json<GeneratedImage>, AppError> {
    if req.prompt.trim().is_empty() {
        return Err(AppError::Validation("prompt cannot be empty".to_string()));
    }
    info!(workspace_id = %id, size = req.size.as_str(), "generating image");

    let llm = &state.llm;
    let image = run_feature(
        &state.workspaces,
        id,
        Tab::Images,
        Workspace::images_slot,
        |_| async move { generate_image(llm, &req.prompt, req.size).await },
    )
    .await?;

    Ok(Json(image))
}

/// DELETE /api/v1/workspaces/:id/images
pub async fn handle_reset_image(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FeatureSnapshot<GeneratedImage>>, AppError> {
    let snapshot = state
        .workspaces
        .with(id, |ws| {
            ws.images.reset();
            Ok(ws.images.snapshot())
        })
        .await?;
    Ok(Json(snapshot))
}

/// GET /api/v1/workspaces/:id/images/download
///
/// Raw image bytes as an attachment named `generated-image-<unix millis>.png`.
pub async fn handle_download_image(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let image = state
        .workspaces
        .with(id, |ws| {
            ws.images
                .result()
                .cloned()
                .ok_or_else(|| AppError::NotFound("no image has been generated".to_string()))
        })
        .await?;

    let bytes = image
        .decode()
        .context("generated image payload is not valid base64")?;
    let disposition = format!(
        "attachment; filename=\"{}\"",
        GeneratedImage::download_name(Utc::now())
    );

    Ok((
        [
            (header::CONTENT_TYPE, image.mime_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    ))
}
