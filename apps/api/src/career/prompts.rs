// Career-path suggestion prompt and response schema.

use crate::llm_client::prompts::LocalizedPrompt;
use crate::llm_client::schema::Schema;

pub const CAREER_SUGGEST_PROMPT: LocalizedPrompt = LocalizedPrompt::new(
    "بناءً على السيرة الذاتية، اقترح مسارات وظيفية وأسئلة مقابلة.",
    "Based on the resume, suggest career paths and interview questions.",
);

pub fn career_schema() -> Schema {
    Schema::object([
        ("atsScore", Schema::number()),
        ("atsLog", Schema::string_list()),
        ("suggestedRoles", Schema::string_list()),
        (
            "interviewPrep",
            Schema::array(Schema::object([
                ("question", Schema::string()),
                ("focusArea", Schema::string()),
                ("tip", Schema::string()),
            ])),
        ),
    ])
}
