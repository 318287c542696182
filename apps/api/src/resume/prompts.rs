// Résumé extraction prompt and response schema.

use crate::llm_client::prompts::LocalizedPrompt;
use crate::llm_client::schema::Schema;

pub const RESUME_EXTRACT_PROMPT: LocalizedPrompt = LocalizedPrompt::new(
    "قم بتحليل السيرة الذاتية واستخراج البيانات التالية بدقة. \
     تأكد من استخراج التواريخ والتفاصيل. إذا كان الملف صورة، استخدم OCR.",
    "Analyze the resume and extract the following data precisely. \
     Ensure dates and details are extracted.",
);

/// Shape the extraction call must return. Mirrors `ResumeProfile`.
pub fn resume_schema() -> Schema {
    Schema::object([
        ("fullName", Schema::string()),
        ("title", Schema::string()),
        (
            "contact",
            Schema::object([
                ("phone", Schema::string()),
                ("email", Schema::string()),
                ("linkedin", Schema::string()),
                ("location", Schema::string()),
            ]),
        ),
        ("summary", Schema::string()),
        (
            "education",
            Schema::array(Schema::object([
                ("degree", Schema::string()),
                ("school", Schema::string()),
                ("year", Schema::string()),
            ])),
        ),
        (
            "experience",
            Schema::array(Schema::object([
                ("role", Schema::string()),
                ("company", Schema::string()),
                ("date", Schema::string()),
                ("points", Schema::string_list()),
            ])),
        ),
        ("skills", Schema::string_list()),
        (
            "courses",
            Schema::array(Schema::object([("name", Schema::string())])),
        ),
        (
            "volunteering",
            Schema::array(Schema::object([
                ("title", Schema::string()),
                ("points", Schema::string_list()),
            ])),
        ),
    ])
}
