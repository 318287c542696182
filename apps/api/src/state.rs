use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::workspace::WorkspaceStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Every open workspace, keyed by id. Lives only as long as the process.
    pub workspaces: WorkspaceStore,
    pub config: Config,
}
