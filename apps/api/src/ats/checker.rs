//! ATS checker: scores a résumé against one job description.

use crate::ats::models::{AtsReport, AtsResult};
use crate::ats::prompts::{ats_schema, ATS_CHECK_PROMPT};
use crate::i18n::Language;
use crate::llm_client::{LlmClient, LlmError};
use crate::upload::UploadedFile;

pub async fn check_ats(
    llm: &LlmClient,
    file: &UploadedFile,
    job_description: &str,
    language: Language,
) -> Result<AtsReport, LlmError> {
    let instruction = ATS_CHECK_PROMPT.render(language, "job_description", job_description);
    let result: AtsResult = llm
        .call_json(Some(file.to_blob()), &instruction, ats_schema())
        .await?;
    Ok(result.into())
}
