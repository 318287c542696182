// Shared prompt utilities.
// Each feature that needs LLM calls defines its own prompts.rs alongside it;
// this file holds what they have in common.

use crate::i18n::Language;

/// An instruction written once per display language.
pub struct LocalizedPrompt {
    pub ar: &'static str,
    pub en: &'static str,
}

impl LocalizedPrompt {
    pub const fn new(ar: &'static str, en: &'static str) -> Self {
        Self { ar, en }
    }

    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::Ar => self.ar,
            Language::En => self.en,
        }
    }

    /// Fills every `{key}` placeholder with `value`.
    pub fn render(&self, language: Language, key: &str, value: &str) -> String {
        self.get(language).replace(&format!("{{{key}}}"), value)
    }
}
