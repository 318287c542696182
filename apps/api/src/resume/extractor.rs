//! Résumé extraction: turns an uploaded résumé into a `ResumeProfile`.

use crate::i18n::Language;
use crate::llm_client::{LlmClient, LlmError};
use crate::resume::models::ResumeProfile;
use crate::resume::prompts::{resume_schema, RESUME_EXTRACT_PROMPT};
use crate::upload::UploadedFile;

pub async fn extract_resume(
    llm: &LlmClient,
    file: &UploadedFile,
    language: Language,
) -> Result<ResumeProfile, LlmError> {
    llm.call_json(
        Some(file.to_blob()),
        RESUME_EXTRACT_PROMPT.get(language),
        resume_schema(),
    )
    .await
}
