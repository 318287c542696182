use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ats::models::AtsReport;
use crate::career::models::CareerAnalysis;
use crate::errors::AppError;
use crate::i18n::Language;
use crate::images::models::GeneratedImage;
use crate::interview::session::{InterviewSnapshot, InterviewView};
use crate::resume::models::ResumeProfile;
use crate::theme::{Palette, Theme};
use crate::workspace::slot::{FeatureSlot, FeatureSnapshot};

/// The six mutually exclusive views. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Home,
    Resume,
    Interview,
    Career,
    Ats,
    Images,
}

impl Tab {
    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Resume => "resume",
            Tab::Interview => "interview",
            Tab::Career => "career",
            Tab::Ats => "ats",
            Tab::Images => "images",
        }
    }

    /// The single user-facing message for a failed call from this view.
    pub fn failure_message(self, language: Language) -> &'static str {
        let strings = language.strings();
        match self {
            Tab::Resume => strings.resume_failed,
            Tab::Career => strings.career_failed,
            Tab::Ats => strings.ats_failed,
            Tab::Images => strings.image_failed,
            Tab::Home | Tab::Interview => strings.request_failed,
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub language: Language,
    pub theme: Theme,
}

/// One page view's worth of state: preferences, the active view and every
/// feature's held result.
#[derive(Debug)]
pub struct Workspace {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub preferences: Preferences,
    active_tab: Tab,
    pub resume: FeatureSlot<ResumeProfile>,
    pub career: FeatureSlot<CareerAnalysis>,
    pub ats: FeatureSlot<AtsReport>,
    pub images: FeatureSlot<GeneratedImage>,
    pub interview: InterviewView,
}

impl Workspace {
    pub fn new(preferences: Preferences) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            preferences,
            active_tab: Tab::default(),
            resume: FeatureSlot::default(),
            career: FeatureSlot::default(),
            ats: FeatureSlot::default(),
            images: FeatureSlot::default(),
            interview: InterviewView::default(),
        }
    }

    /// Whether any feature has a call out.
    pub fn is_busy(&self) -> bool {
        self.resume.is_busy()
            || self.career.is_busy()
            || self.ats.is_busy()
            || self.images.is_busy()
            || self.interview.is_busy()
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Switches views. The view being left is unmounted: its result or
    /// transcript is discarded and any call still out for it will be dropped.
    pub fn select_tab(&mut self, tab: Tab) {
        if tab == self.active_tab {
            return;
        }
        let leaving = self.active_tab;
        self.reset_feature(leaving);
        self.active_tab = tab;
        tracing::debug!(workspace_id = %self.id, from = %leaving, to = %tab, "tab switched");
    }

    pub fn reset_feature(&mut self, tab: Tab) {
        match tab {
            Tab::Home => {}
            Tab::Resume => self.resume.reset(),
            Tab::Interview => self.interview.reset(),
            Tab::Career => self.career.reset(),
            Tab::Ats => self.ats.reset(),
            Tab::Images => self.images.reset(),
        }
    }

    /// Feature actions are only accepted while their view is mounted.
    pub fn require_active(&self, tab: Tab) -> Result<(), AppError> {
        if self.active_tab != tab {
            return Err(AppError::Conflict(format!(
                "the {tab} view is not active (active view: {})",
                self.active_tab
            )));
        }
        Ok(())
    }

    pub fn set_language(&mut self, language: Language) {
        if self.preferences.language == language {
            return;
        }
        self.preferences.language = language;
        self.interview.switch_language(language);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.preferences.theme = theme;
    }

    pub fn resume_slot(&mut self) -> &mut FeatureSlot<ResumeProfile> {
        &mut self.resume
    }

    pub fn career_slot(&mut self) -> &mut FeatureSlot<CareerAnalysis> {
        &mut self.career
    }

    pub fn ats_slot(&mut self) -> &mut FeatureSlot<AtsReport> {
        &mut self.ats
    }

    pub fn images_slot(&mut self) -> &mut FeatureSlot<GeneratedImage> {
        &mut self.images
    }

    pub fn snapshot(&self) -> WorkspaceSnapshot {
        let language = self.preferences.language;
        let theme = self.preferences.theme;
        WorkspaceSnapshot {
            id: self.id,
            created_at: self.created_at,
            language,
            direction: language.direction(),
            theme,
            palette: theme.palette(),
            active_tab: self.active_tab(),
            resume: self.resume.snapshot(),
            career: self.career.snapshot(),
            ats: self.ats.snapshot(),
            images: self.images.snapshot(),
            interview: self.interview.snapshot(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WorkspaceSnapshot {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub language: Language,
    pub direction: &'static str,
    pub theme: Theme,
    pub palette: &'static Palette,
    pub active_tab: Tab,
    pub resume: FeatureSnapshot<ResumeProfile>,
    pub career: FeatureSnapshot<CareerAnalysis>,
    pub ats: FeatureSnapshot<AtsReport>,
    pub images: FeatureSnapshot<GeneratedImage>,
    pub interview: InterviewSnapshot,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workspace() -> Workspace {
        Workspace::new(Preferences::default())
    }

    #[test]
    fn test_new_workspace_starts_on_home() {
        let ws = workspace();
        assert_eq!(ws.active_tab(), Tab::Home);
        assert_eq!(ws.preferences.language, Language::Ar);
        assert_eq!(ws.preferences.theme, Theme::Light);
    }

    #[test]
    fn test_leaving_a_view_discards_its_result() {
        let mut ws = workspace();
        ws.select_tab(Tab::Resume);
        let ticket = ws.resume.begin().unwrap();
        ws.resume.complete(ticket, ResumeProfile::default());

        ws.select_tab(Tab::Career);
        assert!(ws.resume.result().is_none());
        assert_eq!(ws.active_tab(), Tab::Career);
    }

    #[test]
    fn test_reselecting_the_active_view_keeps_its_result() {
        let mut ws = workspace();
        ws.select_tab(Tab::Career);
        let ticket = ws.career.begin().unwrap();
        ws.career.complete(ticket, CareerAnalysis::default());

        ws.select_tab(Tab::Career);
        assert!(ws.career.result().is_some());
    }

    #[test]
    fn test_call_out_when_view_unmounts_is_dropped() {
        let mut ws = workspace();
        ws.select_tab(Tab::Ats);
        let ticket = ws.ats.begin().unwrap();

        ws.select_tab(Tab::Home);
        ws.select_tab(Tab::Ats);
        let late = AtsReport::from(crate::ats::models::AtsResult::default());
        assert!(!ws.ats.complete(ticket, late));
        assert!(ws.ats.result().is_none());
        assert!(!ws.ats.is_busy());
    }

    #[test]
    fn test_leaving_interview_discards_transcript() {
        let mut ws = workspace();
        ws.select_tab(Tab::Interview);
        ws.interview.begin_turn(Language::Ar, "مرحبا").unwrap();

        ws.select_tab(Tab::Images);
        assert!(ws.interview.session().is_none());
    }

    #[test]
    fn test_busy_when_any_feature_has_a_call_out() {
        let mut ws = workspace();
        assert!(!ws.is_busy());
        ws.interview.begin_turn(Language::Ar, "مرحبا").unwrap();
        assert!(ws.is_busy());
    }

    #[test]
    fn test_actions_require_their_view() {
        let mut ws = workspace();
        assert!(matches!(ws.require_active(Tab::Resume), Err(AppError::Conflict(_))));
        ws.select_tab(Tab::Resume);
        assert!(ws.require_active(Tab::Resume).is_ok());
    }

    #[test]
    fn test_language_change_replaces_chat_session() {
        let mut ws = workspace();
        ws.select_tab(Tab::Interview);
        let pending = ws.interview.begin_turn(Language::Ar, "مرحبا").unwrap();
        ws.interview.finish_turn(&pending, Some("أهلا"));

        ws.set_language(Language::En);
        let session = ws.interview.session().unwrap();
        assert_eq!(session.language, Language::En);
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn test_setting_same_language_keeps_chat_session() {
        let mut ws = workspace();
        ws.select_tab(Tab::Interview);
        ws.interview.begin_turn(Language::Ar, "مرحبا").unwrap();

        ws.set_language(Language::Ar);
        assert_eq!(ws.interview.session().unwrap().transcript().len(), 1);
    }

    #[test]
    fn test_failure_messages_are_per_feature_and_localized() {
        assert_eq!(
            Tab::Resume.failure_message(Language::En),
            "Error analyzing resume"
        );
        assert_eq!(
            Tab::Images.failure_message(Language::Ar),
            "حدث خطأ أثناء توليد الصورة"
        );
    }

    #[test]
    fn test_snapshot_shape() {
        let mut ws = Workspace::new(Preferences {
            language: Language::En,
            theme: Theme::Dark,
        });
        ws.select_tab(Tab::Images);
        let value = serde_json::to_value(ws.snapshot()).unwrap();
        assert_eq!(value["active_tab"], "images");
        assert_eq!(value["direction"], "ltr");
        assert_eq!(value["theme"], "dark");
        assert_eq!(value["palette"]["bg"], "#0f172a");
        assert_eq!(value["images"]["status"], "idle");
        assert_eq!(value["interview"]["transcript"], serde_json::json!([]));
    }
}
