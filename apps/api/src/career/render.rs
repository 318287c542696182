use askama::Template;

use crate::career::models::{CareerAnalysis, InterviewPrepItem};
use crate::i18n::{Language, Strings};
use crate::theme::{Palette, Theme};

/// Career map: suggested roles as a badge collection, then the interview-prep
/// items exactly in the order the model returned them.
#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="{{ lang }}" dir="{{ dir }}">
<head>
    <meta charset="UTF-8">
    <title>{{ strings.career_path }}</title>
    <style>
        :root { --color-bg: {{ palette.bg }}; --color-card: {{ palette.card }};
                --color-text-main: {{ palette.text_main }}; --color-text-secondary: {{ palette.text_secondary }};
                --color-border: {{ palette.border }}; --color-primary-light: {{ palette.primary_light }}; }
        body { background: var(--color-bg); color: var(--color-text-main); font-family: {{ font }}; }
        .card { background: var(--color-card); border: 1px solid var(--color-border); border-radius: 1rem; padding: 1.5rem; }
        .badges { display: flex; flex-wrap: wrap; gap: .5rem; }
        .badge { background: var(--color-primary-light); color: #4F46E5; border-radius: 9999px; padding: .25rem .75rem; font-weight: 700; }
        .prep li { margin-bottom: 1rem; }
        .focus { color: var(--color-text-secondary); font-size: .875rem; }
    </style>
</head>
<body>
<div class="card">
    <h2>{{ strings.career_path }}</h2>
    {% if !analysis.suggested_roles.is_empty() %}
    <section id="roles">
        <h3>{{ strings.suggested_roles }}</h3>
        <div class="badges">
            {% for role in analysis.suggested_roles %}<span class="badge">{{ role }}</span>{% endfor %}
        </div>
    </section>
    {% endif %}
    {% if !prep.is_empty() %}
    <section id="prep">
        <h3>{{ strings.interview_prep }}</h3>
        <ol class="prep">
            {% for item in prep %}
            <li>
                <strong class="question">{{ item.question }}</strong>
                {% if !item.focus_area.is_empty() %}<div class="focus">{{ strings.focus_area }}: {{ item.focus_area }}</div>{% endif %}
                {% if !item.tip.is_empty() %}<p class="tip">{{ strings.tip }}: {{ item.tip }}</p>{% endif %}
            </li>
            {% endfor %}
        </ol>
    </section>
    {% endif %}
</div>
</body>
</html>"#,
    ext = "html"
)]
struct CareerMapTemplate<'a> {
    lang: &'static str,
    dir: &'static str,
    font: &'static str,
    strings: &'static Strings,
    palette: &'static Palette,
    analysis: &'a CareerAnalysis,
    prep: &'a [InterviewPrepItem],
}

pub fn render_career_map(
    analysis: &CareerAnalysis,
    language: Language,
    theme: Theme,
) -> askama::Result<String> {
    CareerMapTemplate {
        lang: language.code(),
        dir: language.direction(),
        font: language.font_family(),
        strings: language.strings(),
        palette: theme.palette(),
        analysis,
        prep: &analysis.interview_prep,
    }
    .render()
}
