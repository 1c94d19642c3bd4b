use crate::types::Prediction;
use regex::Regex;
use std::sync::LazyLock;

// Lead-in phrasings tried in order; the first matching pattern wins.
static PREDICTION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)prediction\s*(?:is|:)?\s*(positive|negative|not detected|detected)",
        r"(?i)findings\s*(?:are|is|:)?\s*(positive|negative|not detected|detected)",
        r"(?i)assessment\s*(?:is|:)?\s*(positive|negative|not detected|detected)",
        r"(?i)diagnosis\s*(?:is|:)?\s*(positive|negative|not detected|detected)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid prediction pattern"))
    .collect()
});

/// Extracts the diagnostic prediction from a normalized narrative
///
/// Lead-ins are tried in order: prediction, findings, assessment,
/// diagnosis. Returns `None` when no phrasing matches; absence is not
/// an error.
pub fn extract_prediction(text: &str) -> Option<Prediction> {
    for pattern in PREDICTION_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(text) {
            if let Some(prediction) = Prediction::from_str(&caps[1]) {
                return Some(prediction);
            }
        }
    }
    None
}
