use crate::types::RiskLevel;
use regex::Regex;
use std::sync::LazyLock;

// Lead-in phrasings tried in order, capturing up to the next sentence
// boundary.
static RISK_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)risk\s*(?:level|:)?\s*(?:is|:)?\s*([^.]+)",
        r"(?i)severity\s*(?:is|:)?\s*([^.]+)",
        r"(?i)assessment\s*(?:is|:)?\s*([^.]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid risk pattern"))
    .collect()
});

/// Fallback severity literals, checked in this exact order. "mild to
/// moderate" must precede the standalone "mild" or it would be
/// misclassified as low.
const SEVERITY_FALLBACKS: &[(&str, &str, RiskLevel)] = &[
    ("mild to moderate", "Mild to Moderate", RiskLevel::Medium),
    ("mild", "Mild", RiskLevel::Low),
    ("moderate", "Moderate", RiskLevel::Medium),
    ("severe", "Severe", RiskLevel::High),
];

/// Extracts the risk phrase and derived level from a narrative
///
/// Lead-in phrasings first (risk level, severity, assessment), with the
/// level derived from the captured phrase by the ordered low → medium →
/// high substring rules. Falls back to bare severity literals when no
/// lead-in matches.
pub fn extract_risk(text: &str) -> (Option<String>, RiskLevel) {
    for pattern in RISK_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(text) {
            let phrase = caps[1].trim();
            if !phrase.is_empty() {
                return (Some(phrase.to_string()), RiskLevel::from_phrase(phrase));
            }
        }
    }

    let lower = text.to_lowercase();
    for (marker, phrase, level) in SEVERITY_FALLBACKS {
        if lower.contains(marker) {
            return (Some((*phrase).to_string()), *level);
        }
    }

    (None, RiskLevel::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_risk_lead_in() {
        let (risk, level) = extract_risk("Risk level is High.");
        assert_eq!(risk.as_deref(), Some("High"));
        assert_eq!(level, RiskLevel::High);
    }

    #[test]
    fn test_severity_lead_in() {
        let (risk, level) = extract_risk("Severity: minimal changes only.");
        assert_eq!(risk.as_deref(), Some("minimal changes only"));
        assert_eq!(level, RiskLevel::Low);
    }

    #[test]
    fn test_risk_outranks_assessment() {
        // "assessment" also matches, but the risk lead-in is tried first
        let text = "The assessment is positive. Risk level is High.";
        let (risk, level) = extract_risk(text);
        assert_eq!(risk.as_deref(), Some("High"));
        assert_eq!(level, RiskLevel::High);
    }

    #[rstest]
    #[case("mild to moderate inflammation", "Mild to Moderate", RiskLevel::Medium)]
    #[case("a mild reaction", "Mild", RiskLevel::Low)]
    #[case("moderate scarring", "Moderate", RiskLevel::Medium)]
    #[case("severe tissue damage", "Severe", RiskLevel::High)]
    fn test_severity_fallbacks(
        #[case] text: &str,
        #[case] expected_phrase: &str,
        #[case] expected_level: RiskLevel,
    ) {
        let (risk, level) = extract_risk(text);
        assert_eq!(risk.as_deref(), Some(expected_phrase));
        assert_eq!(level, expected_level);
    }

    #[test]
    fn test_no_match_is_unknown() {
        let (risk, level) = extract_risk("Nothing remarkable.");
        assert_eq!(risk, None);
        assert_eq!(level, RiskLevel::Unknown);
    }

    #[test]
    fn test_unresolvable_lead_in_phrase_is_unknown_level() {
        let (risk, level) = extract_risk("Risk level is indeterminate.");
        assert_eq!(risk.as_deref(), Some("indeterminate"));
        assert_eq!(level, RiskLevel::Unknown);
    }
}
