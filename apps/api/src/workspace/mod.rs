// Workspaces: per-page-view UI state (active view, preferences, feature
// results) held in memory and shared by every feature handler.

pub mod handlers;
pub mod models;
pub mod slot;
pub mod store;

pub use models::{Preferences, Tab, Workspace, WorkspaceSnapshot};
pub use store::{run_feature, WorkspaceStore};
