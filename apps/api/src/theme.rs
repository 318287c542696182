use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// CSS custom-property values for a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub bg: &'static str,
    pub card: &'static str,
    pub text_main: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub primary_light: &'static str,
    pub bg_hover: &'static str,
}

const LIGHT: Palette = Palette {
    bg: "#f8fafc",
    card: "#ffffff",
    text_main: "#0f172a",
    text_secondary: "#475569",
    text_muted: "#94a3b8",
    border: "#e2e8f0",
    primary_light: "#e0e7ff",
    bg_hover: "#f1f5f9",
};

const DARK: Palette = Palette {
    bg: "#0f172a",
    card: "#1e293b",
    text_main: "#f1f5f9",
    text_secondary: "#94a3b8",
    text_muted: "#64748b",
    border: "#334155",
    primary_light: "rgba(79, 70, 229, 0.2)",
    bg_hover: "#334155",
};

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }
}
