use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// Raw ATS check result as returned by the model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtsResult {
    pub score: f64,
    pub feedback: Vec<String>,
}

/// Colour band for the score. Carries no meaning beyond the visual cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AtsBand {
    Good,
    Fair,
    Poor,
}

impl AtsBand {
    /// score ≥ 70 → good, 50 ≤ score < 70 → fair, otherwise poor.
    pub fn for_score(score: f64) -> Self {
        if score >= 70.0 {
            AtsBand::Good
        } else if score >= 50.0 {
            AtsBand::Fair
        } else {
            AtsBand::Poor
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AtsBand::Good => "good",
            AtsBand::Fair => "fair",
            AtsBand::Poor => "poor",
        }
    }

    pub fn colour(self) -> &'static str {
        match self {
            AtsBand::Good => "#22c55e",
            AtsBand::Fair => "#eab308",
            AtsBand::Poor => "#ef4444",
        }
    }

    pub fn label(self, language: Language) -> &'static str {
        let strings = language.strings();
        match self {
            AtsBand::Good => strings.band_good,
            AtsBand::Fair => strings.band_fair,
            AtsBand::Poor => strings.band_poor,
        }
    }
}

/// What the ATS view holds: the result plus its band. The score is kept to
/// one decimal, truncated, so the shown number and its band always agree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AtsReport {
    pub score: f64,
    pub feedback: Vec<String>,
    pub band: AtsBand,
}

impl From<AtsResult> for AtsReport {
    fn from(result: AtsResult) -> Self {
        let score = (result.score * 10.0).floor() / 10.0;
        Self {
            band: AtsBand::for_score(score),
            score,
            feedback: result.feedback,
        }
    }
}
