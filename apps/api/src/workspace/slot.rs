//! Per-feature result slot: idle → loading → ready, with stale-result dropping.
//!
//! Every reset bumps the slot epoch. A call started under an older epoch
//! still runs to completion, but its outcome is ignored when it comes back.

use serde::Serialize;
use thiserror::Error;

use crate::errors::AppError;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "status", content = "result", rename_all = "snake_case")]
pub enum FeatureState<T> {
    Idle,
    Loading,
    Ready(T),
}

/// Proof that a call was started under a given slot epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Error)]
#[error("a request for this feature is already in progress")]
pub struct SlotBusy;

impl From<SlotBusy> for AppError {
    fn from(e: SlotBusy) -> Self {
        AppError::Conflict(e.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct FeatureSlot<T> {
    state: FeatureState<T>,
    epoch: u64,
}

impl<T> Default for FeatureSlot<T> {
    fn default() -> Self {
        Self {
            state: FeatureState::Idle,
            epoch: 0,
        }
    }
}

impl<T> FeatureSlot<T> {
    pub fn state(&self) -> &FeatureState<T> {
        &self.state
    }

    pub fn result(&self) -> Option<&T> {
        match &self.state {
            FeatureState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.state, FeatureState::Loading)
    }

    /// Starts a call. Any held result is dropped: results are replaced, never merged.
    pub fn begin(&mut self) -> Result<Ticket, SlotBusy> {
        if self.is_busy() {
            return Err(SlotBusy);
        }
        self.state = FeatureState::Loading;
        Ok(Ticket(self.epoch))
    }

    /// Stores the result if the ticket is still current. Returns whether it was kept.
    pub fn complete(&mut self, ticket: Ticket, value: T) -> bool {
        if !self.owns(ticket) {
            return false;
        }
        self.state = FeatureState::Ready(value);
        true
    }

    /// Returns to idle after a failed call if the ticket is still current.
    pub fn fail(&mut self, ticket: Ticket) -> bool {
        if !self.owns(ticket) {
            return false;
        }
        self.state = FeatureState::Idle;
        true
    }

    pub fn reset(&mut self) {
        self.epoch += 1;
        self.state = FeatureState::Idle;
    }

    fn owns(&self, ticket: Ticket) -> bool {
        ticket.0 == self.epoch && self.is_busy()
    }
}

/// What a client sees of one feature.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FeatureSnapshot<T> {
    pub status: &'static str,
    pub busy: bool,
    pub result: Option<T>,
}

impl<T: Clone> FeatureSlot<T> {
    pub fn snapshot(&self) -> FeatureSnapshot<T> {
        let status = match self.state() {
            FeatureState::Idle => "idle",
            FeatureState::Loading => "loading",
            FeatureState::Ready(_) => "ready",
        };
        FeatureSnapshot {
            status,
            busy: self.is_busy(),
            result: self.result().cloned(),
        }
    }
}
