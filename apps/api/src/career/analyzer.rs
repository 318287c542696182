//! Career analyzer: suggested roles and interview preparation from a résumé.

use crate::career::models::CareerAnalysis;
use crate::career::prompts::{career_schema, CAREER_SUGGEST_PROMPT};
use crate::i18n::Language;
use crate::llm_client::{LlmClient, LlmError};
use crate::upload::UploadedFile;

pub async fn analyze_career(
    llm: &LlmClient,
    file: &UploadedFile,
    language: Language,
) -> Result<CareerAnalysis, LlmError> {
    llm.call_json(
        Some(file.to_blob()),
        CAREER_SUGGEST_PROMPT.get(language),
        career_schema(),
    )
    .await
}
