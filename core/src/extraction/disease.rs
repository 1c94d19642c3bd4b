use log::debug;
use regex::Regex;
use std::sync::LazyLock;

// Lead-in phrasings tried in order, capturing up to the next sentence
// boundary.
static DISEASE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)disease\s*(?:type|:)?\s*(?:is|:)?\s*([^.]+)",
        r"(?i)diagnosis\s*(?:is|:)?\s*([^.]+)",
        r"(?i)condition\s*(?:is|:)?\s*([^.]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid disease pattern"))
    .collect()
});

/// Condition vocabulary scanned when no lead-in phrasing matches.
/// Scanned in order; the first condition whose sentence carries no
/// negation wins.
const COMMON_CONDITIONS: &[&str] = &[
    "pneumonia",
    "tuberculosis",
    "covid",
    "fracture",
    "cancer",
    "tumor",
    "carcinoma",
    "melanoma",
    "herpes",
    "zoster",
    "shingles",
    "dermatitis",
    "eczema",
    "psoriasis",
    "rash",
    "lesion",
];

/// Compound detectors evaluated after the vocabulary scan comes up empty
const COMPOUND_CONDITIONS: &[(&[&str], &str)] = &[
    (&["herpes zoster", "shingles"], "Herpes Zoster (Shingles)"),
    (&["herpes simplex", "hsv"], "Herpes Simplex Virus"),
    (&["dermatitis"], "Dermatitis"),
];

/// Extracts a disease label from a normalized narrative
///
/// Four tiers, each only consulted when the previous found nothing:
/// explicit lead-in phrasing, condition vocabulary scan (skipping
/// negated sentences), compound detectors, and a generic placeholder
/// when the text only describes visual characteristics.
pub fn extract_disease(text: &str) -> Option<String> {
    for pattern in DISEASE_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(text) {
            let label = caps[1].trim();
            if !label.is_empty() {
                debug!("disease lead-in matched: {}", label);
                return Some(label.to_string());
            }
        }
    }

    if let Some(condition) = scan_condition_vocabulary(text) {
        return Some(condition);
    }

    let lower = text.to_lowercase();
    for (markers, label) in COMPOUND_CONDITIONS {
        if markers.iter().any(|m| lower.contains(m)) {
            return Some((*label).to_string());
        }
    }

    if lower.contains("visual characteristics") {
        return Some("Based on visual characteristics".to_string());
    }

    None
}

/// Scans the condition vocabulary, skipping negated mentions
///
/// A mention only counts when its containing sentence does not also
/// contain "not" (e.g. "no signs, not pneumonia" is skipped).
fn scan_condition_vocabulary(text: &str) -> Option<String> {
    let lower = text.to_lowercase();

    for condition in COMMON_CONDITIONS {
        if !lower.contains(condition) {
            continue;
        }
        for sentence in lower.split(['.', '!', '?']) {
            if !sentence.contains(condition) {
                continue;
            }
            if sentence.contains("not") {
                continue;
            }
            return Some(capitalize(condition));
        }
    }

    None
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_in_capture_to_sentence_boundary() {
        assert_eq!(
            extract_disease("Disease type is Herpes Zoster Shingles. Risk is high."),
            Some("Herpes Zoster Shingles".to_string())
        );
        assert_eq!(
            extract_disease("Diagnosis bacterial pneumonia. Further tests pending."),
            Some("bacterial pneumonia".to_string())
        );
    }

    #[test]
    fn test_lead_in_order() {
        // "disease" lead-in outranks "condition"
        let text = "Condition is stable. Disease type is melanoma.";
        assert_eq!(extract_disease(text), Some("melanoma".to_string()));
    }

    #[test]
    fn test_vocabulary_scan() {
        assert_eq!(
            extract_disease("The image shows signs of pneumonia in the left lobe."),
            Some("Pneumonia".to_string())
        );
    }

    #[test]
    fn test_vocabulary_scan_skips_negated_sentence() {
        assert_eq!(
            extract_disease("This is not pneumonia. Lungs appear clear."),
            None
        );
        // A non-negated sentence later in the text still counts
        assert_eq!(
            extract_disease("This is not conclusive. Appearance consistent with pneumonia."),
            Some("Pneumonia".to_string())
        );
    }

    #[test]
    fn test_vocabulary_order_is_the_tie_break() {
        // "pneumonia" precedes "fracture" in the vocabulary
        let text = "Possible fracture and pneumonia visible.";
        assert_eq!(extract_disease(text), Some("Pneumonia".to_string()));
    }

    #[test]
    fn test_compound_detector_hsv() {
        // "hsv" is not in the vocabulary, so the compound tier fires
        assert_eq!(
            extract_disease("Pattern typical for HSV infection was observed."),
            Some("Herpes Simplex Virus".to_string())
        );
    }

    #[test]
    fn test_visual_characteristics_placeholder() {
        assert_eq!(
            extract_disease("Based on visual characteristics, nothing specific."),
            Some("Based on visual characteristics".to_string())
        );
    }

    #[test]
    fn test_no_match_is_none() {
        assert_eq!(extract_disease("A perfectly ordinary note."), None);
        assert_eq!(extract_disease(""), None);
    }
}
