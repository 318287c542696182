use askama::Template;

use crate::ats::models::AtsReport;
use crate::i18n::{Language, Strings};
use crate::theme::{Palette, Theme};

#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="{{ lang }}" dir="{{ dir }}">
<head>
    <meta charset="UTF-8">
    <title>{{ strings.ats_check }}</title>
    <style>
        body { background: {{ palette.bg }}; color: {{ palette.text_main }}; font-family: {{ font }}; }
        .card { background: {{ palette.card }}; border: 1px solid {{ palette.border }}; border-radius: 1rem; padding: 1.5rem; }
        .score { width: 8rem; height: 8rem; border-radius: 50%; border: .5rem solid {{ colour }};
                 display: flex; flex-direction: column; align-items: center; justify-content: center; margin: 0 auto; }
        .score .value { font-size: 2rem; font-weight: 800; color: {{ colour }}; }
        .score .band { font-size: .75rem; color: {{ palette.text_secondary }}; }
        .feedback li { margin-bottom: .5rem; color: {{ palette.text_secondary }}; }
    </style>
</head>
<body>
<div class="card">
    <h2>{{ strings.results }}</h2>
    <div class="score band-{{ band_class }}">
        <span class="value">{{ score }}</span>
        <span class="band">{{ band_label }}</span>
    </div>
    {% if !report.feedback.is_empty() %}
    <ul class="feedback">
        {% for note in report.feedback %}<li>{{ note }}</li>{% endfor %}
    </ul>
    {% endif %}
</div>
</body>
</html>"#,
    ext = "html"
)]
struct AtsPanelTemplate<'a> {
    lang: &'static str,
    dir: &'static str,
    font: &'static str,
    strings: &'static Strings,
    palette: &'static Palette,
    report: &'a AtsReport,
    score: String,
    colour: &'static str,
    band_class: &'static str,
    band_label: &'static str,
}

/// Score shown as an integer when the model returned a whole number.
fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.0}")
    } else {
        format!("{score:.1}")
    }
}

pub fn render_ats_panel(
    report: &AtsReport,
    language: Language,
    theme: Theme,
) -> askama::Result<String> {
    AtsPanelTemplate {
        lang: language.code(),
        dir: language.direction(),
        font: language.font_family(),
        strings: language.strings(),
        palette: theme.palette(),
        report,
        score: format_score(report.score),
        colour: report.band.colour(),
        band_class: report.band.as_str(),
        band_label: report.band.label(language),
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ats::models::AtsResult;

    #[test]
    fn test_panel_shows_band_and_feedback_in_order() {
        let report = AtsReport::from(AtsResult {
            score: 49.0,
            feedback: vec!["First".to_string(), "Second".to_string()],
        });
        let html = render_ats_panel(&report, Language::En, Theme::Light).unwrap();

        assert!(html.contains("band-poor"));
        assert!(html.contains(r#"<span class="value">49</span>"#));
        assert!(html.contains("#ef4444"));
        assert!(html.find("First").unwrap() < html.find("Second").unwrap());
    }

    #[test]
    fn test_shown_score_matches_band() {
        let report = AtsReport::from(AtsResult {
            score: 69.96,
            feedback: vec![],
        });
        let html = render_ats_panel(&report, Language::En, Theme::Light).unwrap();
        assert!(html.contains(r#"<span class="value">69.9</span>"#));
        assert!(html.contains("band-fair"));
    }

    #[test]
    fn test_fractional_score_keeps_one_decimal() {
        assert_eq!(format_score(72.5), "72.5");
        assert_eq!(format_score(70.0), "70");
    }

    #[test]
    fn test_empty_feedback_omits_list() {
        let report = AtsReport::from(AtsResult {
            score: 80.0,
            feedback: vec![],
        });
        let html = render_ats_panel(&report, Language::Ar, Theme::Dark).unwrap();
        assert!(!html.contains(r#"class="feedback""#));
        assert!(html.contains("band-good"));
        assert!(html.contains("جيد"));
    }
}
