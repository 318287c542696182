// ATS compatibility prompt and response schema.

use crate::llm_client::prompts::LocalizedPrompt;
use crate::llm_client::schema::Schema;

/// Replace `{job_description}` before sending.
pub const ATS_CHECK_PROMPT: LocalizedPrompt = LocalizedPrompt::new(
    "قارن السيرة الذاتية مع الوصف الوظيفي التالي وقم بتقييم التوافق (ATS Score) من 100. \
     وقدم ملاحظات للتحسين.\nالوصف الوظيفي: {job_description}",
    "Compare the resume with the following job description and provide an ATS Score \
     out of 100 and improvement feedback.\nJob Description: {job_description}",
);

pub fn ats_schema() -> Schema {
    Schema::object([
        ("score", Schema::number()),
        ("feedback", Schema::string_list()),
    ])
}
