//! Interview-coach chat: session, visible transcript and in-flight bookkeeping.
//!
//! The transcript is what the user sees. `history` is what the model sees on
//! the next turn and only ever holds successful exchanges, so a synthetic
//! error reply never leaks into the conversation context.

use chrono::{DateTime, Utc};
use pulldown_cmark::{html, Event, Parser};
use serde::Serialize;
use uuid::Uuid;

use crate::i18n::Language;
use crate::interview::prompts::COACH_SYSTEM_PROMPT;
use crate::llm_client::{Content, Part};
use crate::workspace::slot::SlotBusy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatTurn {
    pub role: Speaker,
    pub text: String,
    /// Markdown rendering of assistant turns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// True for the locally generated reply that stands in for a failed call.
    pub synthetic: bool,
}

impl ChatTurn {
    fn user(text: &str) -> Self {
        Self {
            role: Speaker::User,
            text: text.to_string(),
            html: None,
            synthetic: false,
        }
    }

    fn model(text: &str, synthetic: bool) -> Self {
        Self {
            role: Speaker::Model,
            text: text.to_string(),
            html: Some(markdown_to_html(text)),
            synthetic,
        }
    }
}

/// Markdown to HTML with any raw HTML in the reply emitted as escaped text.
fn markdown_to_html(text: &str) -> String {
    let events = Parser::new(text).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        other => other,
    });
    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, events);
    out
}

#[derive(Debug, Clone)]
pub struct ChatSession {
    pub id: Uuid,
    pub language: Language,
    pub created_at: DateTime<Utc>,
    transcript: Vec<ChatTurn>,
    history: Vec<Content>,
}

impl ChatSession {
    pub fn new(language: Language) -> Self {
        Self {
            id: Uuid::new_v4(),
            language,
            created_at: Utc::now(),
            transcript: Vec::new(),
            history: Vec::new(),
        }
    }

    pub fn system_instruction(&self) -> &'static str {
        COACH_SYSTEM_PROMPT.get(self.language)
    }

    pub fn transcript(&self) -> &[ChatTurn] {
        &self.transcript
    }

    fn record_reply(&mut self, message: &str, reply: &str) {
        self.history.push(Content::user(vec![Part::text(message)]));
        self.history.push(Content::model(reply));
        self.transcript.push(ChatTurn::model(reply, false));
    }

    fn record_failure(&mut self) {
        let text = self.language.strings().chat_error_reply;
        self.transcript.push(ChatTurn::model(text, true));
    }
}

/// Everything the handler needs to make the call without holding the workspace lock.
#[derive(Debug, Clone)]
pub struct PendingTurn {
    epoch: u64,
    pub session_id: Uuid,
    pub language: Language,
    pub system: &'static str,
    pub history: Vec<Content>,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct InterviewSnapshot {
    pub session_id: Option<Uuid>,
    pub started_at: Option<DateTime<Utc>>,
    pub language: Option<Language>,
    pub busy: bool,
    pub transcript: Vec<ChatTurn>,
}

/// The interview view's state inside a workspace.
#[derive(Debug, Default)]
pub struct InterviewView {
    session: Option<ChatSession>,
    in_flight: bool,
    epoch: u64,
}

impl InterviewView {
    pub fn session(&self) -> Option<&ChatSession> {
        self.session.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    /// Creates the session if none exists, then appends the user turn before
    /// any reply is awaited.
    pub fn begin_turn(&mut self, language: Language, message: &str) -> Result<PendingTurn, SlotBusy> {
        if self.in_flight {
            return Err(SlotBusy);
        }
        let session = self
            .session
            .get_or_insert_with(|| ChatSession::new(language));
        session.transcript.push(ChatTurn::user(message));
        self.in_flight = true;

        Ok(PendingTurn {
            epoch: self.epoch,
            session_id: session.id,
            language: session.language,
            system: session.system_instruction(),
            history: session.history.clone(),
            message: message.to_string(),
        })
    }

    /// Appends the assistant reply, or one synthetic error turn on failure.
    /// Returns `None` when the session was replaced while the call was out.
    pub fn finish_turn(&mut self, pending: &PendingTurn, reply: Option<&str>) -> Option<ChatTurn> {
        if pending.epoch != self.epoch {
            return None;
        }
        let session = self.session.as_mut()?;
        self.in_flight = false;

        match reply {
            Some(text) => session.record_reply(&pending.message, text),
            None => session.record_failure(),
        }
        session.transcript.last().cloned()
    }

    /// Discards the session and transcript entirely.
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.session = None;
        self.in_flight = false;
    }

    /// A language switch replaces an active session with an empty one
    /// configured for the new language.
    pub fn switch_language(&mut self, language: Language) {
        if self.session.is_some() {
            self.reset();
            self.session = Some(ChatSession::new(language));
        }
    }

    pub fn snapshot(&self) -> InterviewSnapshot {
        let session = self.session();
        InterviewSnapshot {
            session_id: session.map(|s| s.id),
            started_at: session.map(|s| s.created_at),
            language: session.map(|s| s.language),
            busy: self.is_busy(),
            transcript: session.map(|s| s.transcript().to_vec()).unwrap_or_default(),
        }
    }
}
