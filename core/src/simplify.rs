//! Label simplification for display
//!
//! Collapses verbose extracted disease/risk text into short, stable
//! display labels and a traffic-light color category.

use crate::types::{RiskColor, RiskLevel};

/// Lookup table mapping verbose disease text to canonical short forms.
/// Evaluated top to bottom; first match wins.
const DISEASE_SHORT_FORMS: &[(&[&str], &str)] = &[
    (&["herpes zoster", "shingles"], "Shingles"),
    (&["herpes simplex"], "Herpes"),
    (&["carcinoma", "cancer"], "Cancer"),
    (&["pneumonia"], "Pneumonia"),
    (&["dermatitis"], "Dermatitis"),
    (&["melanoma"], "Melanoma"),
    (&["tuberculosis", "tb"], "Tuberculosis"),
    (&["fracture"], "Fracture"),
    (&["visual characteristics"], "Findings"),
];

/// Collapses a disease string into a display label of at most two words
///
/// A label that is already two words or fewer passes through unchanged.
/// Longer labels go through the canonical lookup table, and anything the
/// table misses falls back to its first two words. No disease at all
/// yields "Unknown".
pub fn simplify_disease(disease: Option<&str>) -> String {
    let Some(disease) = disease else {
        return "Unknown".to_string();
    };

    let words: Vec<&str> = disease.split_whitespace().collect();
    if words.len() <= 2 {
        return disease.to_string();
    }

    let lower = disease.to_lowercase();
    for (markers, short) in DISEASE_SHORT_FORMS {
        if markers.iter().any(|m| lower.contains(m)) {
            return (*short).to_string();
        }
    }

    words[..2].join(" ")
}

/// Confirms the final risk level for a result
///
/// An explicit level set by an extractor is kept; otherwise the level is
/// derived from the free-text risk phrase, with Unknown as the final
/// fallback.
pub fn resolve_risk_level(level: RiskLevel, risk: Option<&str>) -> RiskLevel {
    if !level.is_unknown() {
        return level;
    }
    match risk {
        Some(phrase) => RiskLevel::from_phrase(phrase),
        None => RiskLevel::Unknown,
    }
}

/// Maps risk output to a traffic-light display color
///
/// postMI cohort phrasing is informational rather than alarming and maps
/// to blue, as does any risk text the level rules cannot resolve. No
/// risk information at all maps to gray.
pub fn risk_color(risk: Option<&str>, level: RiskLevel) -> RiskColor {
    if risk.is_none() && level.is_unknown() {
        return RiskColor::Gray;
    }

    if risk.is_some_and(|r| r.to_lowercase().contains("postmi")) {
        return RiskColor::Blue;
    }

    match resolve_risk_level(level, risk) {
        RiskLevel::Low => RiskColor::Green,
        RiskLevel::Medium => RiskColor::Yellow,
        RiskLevel::High => RiskColor::Red,
        RiskLevel::Unknown => RiskColor::Blue,
    }
}
