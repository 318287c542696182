//! Printable A4 résumé page. The browser's print dialog turns it into a PDF.
//!
//! Every section is emitted only when its underlying text or list is
//! non-empty; lists keep the order the extraction returned.

use askama::Template;

use crate::i18n::{Language, Strings};
use crate::resume::models::{Course, ResumeProfile, Volunteering};

#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="{{ lang }}" dir="{{ dir }}">
<head>
    <meta charset="UTF-8">
    <title>{{ profile.full_name }}</title>
    <style>
        @page { size: A4; margin: 0; }
        body { margin: 0; background: #ffffff; }
        .page { width: 210mm; min-height: 297mm; padding: 15mm 20mm; box-sizing: border-box;
                margin: 0 auto; color: #1E293B; font-family: {{ font }}; }
        header { text-align: center; margin-bottom: 2rem; }
        h1 { font-size: 2.25rem; text-transform: uppercase; color: #4F46E5; margin: 0 0 .5rem; }
        h2 { font-size: 1.25rem; text-transform: uppercase; color: #64748B; margin: 0; }
        .contact { display: flex; flex-wrap: wrap; justify-content: center; gap: 1rem; margin-top: 1rem;
                   padding: .75rem 0; border-top: 1px solid #E2E8F0; border-bottom: 1px solid #E2E8F0;
                   font-size: .875rem; color: #475569; }
        h3 { font-size: 1.125rem; text-transform: uppercase; color: #4F46E5;
             border-bottom: 2px solid #4F46E5; padding-bottom: .25rem; }
        .row { display: flex; justify-content: space-between; align-items: baseline; }
        .muted { color: #475569; font-size: .875rem; }
        .org { color: #64748B; font-style: italic; }
        .skills { display: grid; grid-template-columns: 1fr 1fr; gap: .5rem 2rem; }
        ul { font-size: .875rem; }
    </style>
</head>
<body>
<div class="page">
    <header>
        <h1>{{ profile.full_name }}</h1>
        <h2>{{ profile.title }}</h2>
        <div class="contact">
            {% if !profile.contact.phone.is_empty() %}<span class="phone">{{ profile.contact.phone }}</span>{% endif %}
            {% if !profile.contact.email.is_empty() %}<span class="email">{{ profile.contact.email }}</span>{% endif %}
            {% if !profile.contact.linkedin.is_empty() %}<span class="linkedin">{{ profile.contact.linkedin }}</span>{% endif %}
            {% if !location.is_empty() %}<span class="location">{{ location }}</span>{% endif %}
        </div>
    </header>

    {% if !profile.summary.is_empty() %}
    <section id="summary">
        <h3>{{ strings.summary_heading }}</h3>
        <p>{{ profile.summary }}</p>
    </section>
    {% endif %}

    {% if !profile.education.is_empty() %}
    <section id="education">
        <h3>{{ strings.education_heading }}</h3>
        {% for edu in profile.education %}
        <div class="entry">
            <div class="row"><strong>{{ edu.school }}</strong><span class="muted">{{ edu.year }}</span></div>
            <div class="muted">{{ edu.degree }}</div>
        </div>
        {% endfor %}
    </section>
    {% endif %}

    {% if !profile.experience.is_empty() %}
    <section id="experience">
        <h3>{{ strings.experience_heading }}</h3>
        {% for exp in profile.experience %}
        <div class="entry">
            <div class="row"><strong>{{ exp.role }}</strong><span class="muted">{{ exp.date }}</span></div>
            <div class="org">{{ exp.company }}</div>
            <ul>
                {% for point in exp.points %}<li>{{ point }}</li>{% endfor %}
            </ul>
        </div>
        {% endfor %}
    </section>
    {% endif %}

    {% if !profile.skills.is_empty() %}
    <section id="skills">
        <h3>{{ strings.skills_heading }}</h3>
        <div class="skills">
            {% for skill in profile.skills %}<span class="skill">{{ skill }}</span>{% endfor %}
        </div>
    </section>
    {% endif %}

    {% if !courses.is_empty() %}
    <section id="courses">
        <h3>{{ strings.courses_heading }}</h3>
        <ul>
            {% for course in courses %}<li>{{ course.name }}</li>{% endfor %}
        </ul>
    </section>
    {% endif %}

    {% if !volunteering.is_empty() %}
    <section id="volunteering">
        <h3>{{ strings.volunteering_heading }}</h3>
        {% for vol in volunteering %}
        <div class="entry">
            <strong>{{ vol.title }}</strong>
            <ul>
                {% for point in vol.points %}<li>{{ point }}</li>{% endfor %}
            </ul>
        </div>
        {% endfor %}
    </section>
    {% endif %}
</div>
</body>
</html>"#,
    ext = "html"
)]
struct ResumeTemplate<'a> {
    lang: &'static str,
    dir: &'static str,
    font: &'static str,
    strings: &'static Strings,
    profile: &'a ResumeProfile,
    location: &'a str,
    courses: &'a [Course],
    volunteering: &'a [Volunteering],
}

pub fn render_resume(profile: &ResumeProfile, language: Language) -> askama::Result<String> {
    ResumeTemplate {
        lang: language.code(),
        dir: language.direction(),
        font: language.font_family(),
        strings: language.strings(),
        profile,
        location: profile.contact.location.as_deref().unwrap_or_default(),
        courses: profile.courses.as_deref().unwrap_or_default(),
        volunteering: profile.volunteering.as_deref().unwrap_or_default(),
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::models::{Contact, Education, Experience};

    fn profile() -> ResumeProfile {
        ResumeProfile {
            full_name: "Sara Ahmed".to_string(),
            title: "Backend Engineer".to_string(),
            contact: Contact {
                phone: String::new(),
                email: "sara@example.com".to_string(),
                linkedin: String::new(),
                location: None,
            },
            summary: String::new(),
            education: vec![Education {
                degree: "BSc".to_string(),
                school: "KSU".to_string(),
                year: "2019".to_string(),
            }],
            experience: vec![
                Experience {
                    role: "Senior Engineer".to_string(),
                    company: "Acme".to_string(),
                    date: "2022 - Present".to_string(),
                    points: vec!["Zeta point".to_string(), "Alpha point".to_string()],
                },
                Experience {
                    role: "Engineer".to_string(),
                    company: "Initech".to_string(),
                    date: "2019 - 2022".to_string(),
                    points: vec![],
                },
            ],
            skills: vec!["SQL".to_string(), "Rust".to_string(), "Go".to_string()],
            courses: Some(vec![]),
            volunteering: None,
        }
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let html = render_resume(&profile(), Language::En).unwrap();
        assert!(!html.contains(r#"id="summary""#));
        assert!(!html.contains(r#"id="courses""#));
        assert!(!html.contains(r#"id="volunteering""#));
        assert!(!html.contains(r#"class="phone""#));
        assert!(!html.contains(r#"class="location""#));
        assert!(html.contains(r#"id="education""#));
        assert!(html.contains(r#"class="email""#));
    }

    #[test]
    fn test_lists_keep_original_order() {
        let html = render_resume(&profile(), Language::En).unwrap();
        let pos = |needle: &str| html.find(needle).unwrap();
        assert!(pos("Senior Engineer") < pos("Initech"));
        assert!(pos("Zeta point") < pos("Alpha point"));
        assert!(pos(">SQL<") < pos(">Rust<"));
        assert!(pos(">Rust<") < pos(">Go<"));
    }

    #[test]
    fn test_arabic_layout_is_right_to_left_with_arabic_headings() {
        let html = render_resume(&profile(), Language::Ar).unwrap();
        assert!(html.contains(r#"dir="rtl""#));
        assert!(html.contains("Cairo, sans-serif"));
        assert!(html.contains("الخبرات العملية"));
        assert!(!html.contains("Work Experience"));
    }

    #[test]
    fn test_optional_sections_render_when_present() {
        let mut p = profile();
        p.summary = "Five years building APIs.".to_string();
        p.contact.location = Some("Riyadh".to_string());
        p.courses = Some(vec![Course {
            name: "AWS Practitioner".to_string(),
        }]);
        p.volunteering = Some(vec![Volunteering {
            title: "Mentor".to_string(),
            points: vec!["Coached juniors".to_string()],
        }]);

        let html = render_resume(&p, Language::En).unwrap();
        assert!(html.contains("Profile Summary"));
        assert!(html.contains("Riyadh"));
        assert!(html.contains("AWS Practitioner"));
        assert!(html.contains("Coached juniors"));
    }

    #[test]
    fn test_model_output_is_html_escaped() {
        let mut p = profile();
        p.full_name = "<script>alert(1)</script>".to_string();
        let html = render_resume(&p, Language::En).unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
