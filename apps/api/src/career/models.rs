use serde::{Deserialize, Serialize};

/// Career-path suggestions derived from a résumé.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CareerAnalysis {
    /// 0 – 100
    pub ats_score: f64,
    /// Requested from the model and kept in the result, but no view renders it.
    pub ats_log: Vec<String>,
    pub suggested_roles: Vec<String>,
    pub interview_prep: Vec<InterviewPrepItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InterviewPrepItem {
    pub question: String,
    pub focus_area: String,
    pub tip: String,
}
