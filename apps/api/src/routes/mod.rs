pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, patch, post, put},
    Router,
};

use crate::ats::handlers as ats;
use crate::career::handlers as career;
use crate::images::handlers as images;
use crate::interview::handlers as interview;
use crate::resume::handlers as resume;
use crate::state::AppState;
use crate::workspace::handlers as workspace;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // Workspace lifecycle and preferences
        .route("/api/v1/workspaces", post(workspace::handle_create_workspace))
        .route(
            "/api/v1/workspaces/:id",
            get(workspace::handle_get_workspace).delete(workspace::handle_delete_workspace),
        )
        .route("/api/v1/workspaces/:id/tab", put(workspace::handle_select_tab))
        .route(
            "/api/v1/workspaces/:id/preferences",
            patch(workspace::handle_update_preferences),
        )
        .route(
            "/api/v1/workspaces/:id/preferences/language/toggle",
            post(workspace::handle_toggle_language),
        )
        .route(
            "/api/v1/workspaces/:id/preferences/theme/toggle",
            post(workspace::handle_toggle_theme),
        )
        // Résumé builder
        .route(
            "/api/v1/workspaces/:id/resume",
            post(resume::handle_analyze_resume).delete(resume::handle_reset_resume),
        )
        .route(
            "/api/v1/workspaces/:id/resume/print",
            get(resume::handle_print_resume),
        )
        // Career path
        .route(
            "/api/v1/workspaces/:id/career",
            post(career::handle_analyze_career).delete(career::handle_reset_career),
        )
        .route(
            "/api/v1/workspaces/:id/career/map",
            get(career::handle_career_map),
        )
        // ATS check
        .route(
            "/api/v1/workspaces/:id/ats",
            post(ats::handle_check_ats).delete(ats::handle_reset_ats),
        )
        .route("/api/v1/workspaces/:id/ats/panel", get(ats::handle_ats_panel))
        // Interview coach
        .route(
            "/api/v1/workspaces/:id/interview",
            get(interview::handle_get_interview).delete(interview::handle_reset_interview),
        )
        .route(
            "/api/v1/workspaces/:id/interview/messages",
            post(interview::handle_send_message),
        )
        // Image studio
        .route(
            "/api/v1/workspaces/:id/images",
            post(images::handle_generate_image).delete(images::handle_reset_image),
        )
        .route(
            "/api/v1/workspaces/:id/images/download",
            get(images::handle_download_image),
        )
        .layer(body_limit)
        .with_state(state)
}
