//! In-memory workspace registry and the shared feature-call flow.
//!
//! The map lock is never held across an inference await: a call takes a
//! ticket under the lock, releases it, awaits the model, then re-locks and
//! commits only if the ticket is still current.
//!
//! Workspaces nobody has touched for the configured idle time are evicted by
//! a background sweeper.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::i18n::Language;
use crate::llm_client::LlmError;
use crate::workspace::models::{Preferences, Tab, Workspace, WorkspaceSnapshot};
use crate::workspace::slot::FeatureSlot;

/// Message returned when a finished call no longer has a view to land in.
pub const RESULT_DISCARDED: &str = "the view was reset before the result arrived; result discarded";

struct Entry {
    workspace: Workspace,
    last_seen: Instant,
}

#[derive(Clone, Default)]
pub struct WorkspaceStore {
    inner: Arc<Mutex<HashMap<Uuid, Entry>>>,
}

impl WorkspaceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, preferences: Preferences) -> WorkspaceSnapshot {
        let workspace = Workspace::new(preferences);
        let snapshot = workspace.snapshot();
        let entry = Entry {
            workspace,
            last_seen: Instant::now(),
        };
        self.inner.lock().await.insert(snapshot.id, entry);
        info!(workspace_id = %snapshot.id, language = %preferences.language, "workspace created");
        snapshot
    }

    /// Runs `f` against the workspace under the store lock and marks it as seen.
    pub async fn with<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut Workspace) -> Result<R, AppError>,
    ) -> Result<R, AppError> {
        let mut workspaces = self.inner.lock().await;
        let entry = workspaces
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Workspace {id} not found")))?;
        entry.last_seen = Instant::now();
        f(&mut entry.workspace)
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        self.inner
            .lock()
            .await
            .remove(&id)
            .map(|_| info!(workspace_id = %id, "workspace closed"))
            .ok_or_else(|| AppError::NotFound(format!("Workspace {id} not found")))
    }

    /// Drops every workspace idle for longer than `ttl`. A workspace with a
    /// call still out is kept until that call lands. Returns how many went.
    pub async fn evict_idle(&self, ttl: Duration) -> usize {
        let mut workspaces = self.inner.lock().await;
        let before = workspaces.len();
        workspaces.retain(|id, entry| {
            let keep = entry.last_seen.elapsed() <= ttl || entry.workspace.is_busy();
            if !keep {
                debug!(workspace_id = %id, "evicting idle workspace");
            }
            keep
        });
        before - workspaces.len()
    }

    /// Runs `evict_idle` every `every` for the life of the process.
    pub fn spawn_sweeper(&self, ttl: Duration, every: Duration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut ticker = time::interval(every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let evicted = store.evict_idle(ttl).await;
                if evicted > 0 {
                    info!(evicted, "evicted idle workspaces");
                }
            }
        })
    }
}

/// Runs one feature call for the view `tab`.
///
/// Refused with 409 when the view is not active or a call for it is already
/// out. On success the result replaces whatever the slot held; on failure
/// the slot goes back to idle and the caller gets the view's localized
/// failure message. A result whose view was reset meanwhile is discarded.
pub async fn run_feature<T, F, Fut>(
    store: &WorkspaceStore,
    id: Uuid,
    tab: Tab,
    slot: fn(&mut Workspace) -> &mut FeatureSlot<T>,
    call: F,
) -> Result<T, AppError>
where
    T: Clone,
    F: FnOnce(Language) -> Fut,
    Fut: Future<Output = Result<T, LlmError>>,
{
    let (ticket, language) = store
        .with(id, |ws| {
            ws.require_active(tab)?;
            let ticket = slot(ws).begin()?;
            Ok((ticket, ws.preferences.language))
        })
        .await?;

    let outcome = call(language).await;

    store
        .with(id, |ws| match outcome {
            Ok(value) => {
                if slot(ws).complete(ticket, value.clone()) {
                    Ok(value)
                } else {
                    warn!(workspace_id = %id, view = %tab, "stale result dropped");
                    Err(AppError::Conflict(RESULT_DISCARDED.to_string()))
                }
            }
            Err(e) => {
                slot(ws).fail(ticket);
                Err(AppError::llm(tab.failure_message(language), e))
            }
        })
        .await
}
