use super::defaults::DIABETES_PROBABILITY_CUTOFF;
use super::lab_metrics::extract_risk_probability;
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

// Positive indicators, checked first; any match settles the verdict.
static POSITIVE_INDICATORS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)diabetes\s+(?:status\s*)?(?:is|:)?\s*positive",
        r"(?i)diabetes\s+(?:status\s*)?(?:is|:)?\s*present",
        r"(?i)diabetic\s+condition\s+(?:is|:)?\s*confirmed",
        r"(?i)likely\s+to\s+have\s+diabetes",
        r"(?i)high\s+(?:risk|probability|likelihood)\s+of\s+diabetes",
        r"(?i)diabetes\s+(?:status\s*)?(?:is\s+|:\s*)?detected",
        r"(?i)75%\s+likelihood\s+of\s+diabetes",
        r"(?i)indicators\s+of\s+diabetes",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid positive indicator"))
    .collect()
});

// Negative indicators, mirrored structure, checked second.
static NEGATIVE_INDICATORS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)diabetes\s+(?:status\s*)?(?:is|:)?\s*negative",
        r"(?i)diabetes\s+(?:status\s*)?(?:is|:)?\s*absent",
        r"(?i)no\s+(?:signs|indicators)\s+of\s+diabetes",
        r"(?i)diabetes\s+(?:status\s*)?not\s+detected",
        r"(?i)low\s+(?:risk|probability|likelihood)\s+of\s+diabetes",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid negative indicator"))
    .collect()
});

/// Binary diabetes determination from a narrative
///
/// Fixed rule order: explicit positive indicators, then explicit
/// negative indicators, then a numeric probability above the cutoff,
/// and finally false when no evidence was found at all.
pub fn has_diabetes(text: &str) -> bool {
    if POSITIVE_INDICATORS.iter().any(|p| p.is_match(text)) {
        debug!("diabetes verdict: positive indicator matched");
        return true;
    }

    if NEGATIVE_INDICATORS.iter().any(|p| p.is_match(text)) {
        debug!("diabetes verdict: negative indicator matched");
        return false;
    }

    if let Some(probability) = extract_risk_probability(text) {
        debug!("diabetes verdict: probability fallback {}", probability);
        return probability > DIABETES_PROBABILITY_CUTOFF;
    }

    false
}
