//! Display languages and the handful of strings the server emits itself
//! (section headings, view labels, failure messages).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ar,
    En,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::Ar => Language::En,
            Language::En => Language::Ar,
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Language::Ar)
    }

    /// HTML `dir` attribute value.
    pub fn direction(self) -> &'static str {
        if self.is_rtl() {
            "rtl"
        } else {
            "ltr"
        }
    }

    pub fn font_family(self) -> &'static str {
        match self {
            Language::Ar => "Cairo, sans-serif",
            Language::En => "Arial, sans-serif",
        }
    }

    pub fn strings(self) -> &'static Strings {
        match self {
            Language::Ar => &AR,
            Language::En => &EN,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unsupported language code '{0}'")]
pub struct UnknownLanguage(String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ar" => Ok(Language::Ar),
            "en" => Ok(Language::En),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

pub struct Strings {

    pub summary_heading: &'static str,
    pub education_heading: &'static str,
    pub experience_heading: &'static str,
    pub skills_heading: &'static str,
    pub courses_heading: &'static str,
    pub volunteering_heading: &'static str,

    pub career_path: &'static str,
    pub suggested_roles: &'static str,
    pub interview_prep: &'static str,
    pub focus_area: &'static str,
    pub tip: &'static str,

    pub ats_check: &'static str,
    pub results: &'static str,
    pub band_good: &'static str,
    pub band_fair: &'static str,
    pub band_poor: &'static str,

    pub resume_failed: &'static str,
    pub career_failed: &'static str,
    pub ats_failed: &'static str,
    pub image_failed: &'static str,
    pub request_failed: &'static str,
    /// Synthetic assistant turn appended when a chat call fails.
    pub chat_error_reply: &'static str,
}

static AR: Strings = Strings {

    summary_heading: "الملخص المهني",
    education_heading: "التعليم",
    experience_heading: "الخبرات العملية",
    skills_heading: "المهارات",
    courses_heading: "الدورات والشهادات",
    volunteering_heading: "التطوع والتدريب",

    career_path: "تحليل المسار الوظيفي",
    suggested_roles: "المسميات الوظيفية المقترحة",
    interview_prep: "التحضير للمقابلة",
    focus_area: "محور التركيز",
    tip: "نصيحة",

    ats_check: "فحص التوافق (ATS)",
    results: "النتائج",
    band_good: "جيد",
    band_fair: "متوسط",
    band_poor: "ضعيف",

    resume_failed: "حدث خطأ أثناء تحليل السيرة الذاتية",
    career_failed: "حدث خطأ أثناء تحليل المسار الوظيفي",
    ats_failed: "حدث خطأ أثناء فحص التوافق",
    image_failed: "حدث خطأ أثناء توليد الصورة",
    request_failed: "تعذر تنفيذ الطلب",
    chat_error_reply: "حدث خطأ، يرجى المحاولة مرة أخرى.",
};

static EN: Strings = Strings {

    summary_heading: "Profile Summary",
    education_heading: "Education",
    experience_heading: "Work Experience",
    skills_heading: "Skills",
    courses_heading: "Courses & Certificates",
    volunteering_heading: "Volunteering & Training",

    career_path: "Career Path Analysis",
    suggested_roles: "Suggested Roles",
    interview_prep: "Interview Prep",
    focus_area: "Focus Area",
    tip: "Tip",

    ats_check: "ATS Check",
    results: "Results",
    band_good: "Good",
    band_fair: "Fair",
    band_poor: "Poor",

    resume_failed: "Error analyzing resume",
    career_failed: "Error analyzing career path",
    ats_failed: "Error checking ATS compatibility",
    image_failed: "Error generating image",
    request_failed: "The request could not be completed",
    chat_error_reply: "Error occurred, please try again.",
};
