use super::defaults::REPORT_CARD_DEFAULT_CONFIDENCE;
use crate::types::RiskLevel;
use regex::Regex;
use std::sync::LazyLock;

static PERCENTAGES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*%").expect("valid percentage pattern"));

/// Focus-area keyword groups, checked in order; first group wins
const FOCUS_GROUPS: &[(&[&str], &str)] = &[
    (
        &["heart attack", "cardiac", "heart failure", "myocardial infarction"],
        "Cardiac Care Metrics",
    ),
    (&["pneumonia", "respiratory"], "Respiratory Care Metrics"),
    (&["stroke"], "Stroke Care Metrics"),
];

/// Cohort phrasings that mark a report card as high-risk context
const POST_MI_MARKERS: &[&str] = &["postmi patients", "left ventricular", "heart failure risk"];

/// Fields derived from a quality/performance report card
#[derive(Debug, Clone, PartialEq)]
pub struct ReportCardFields {
    pub disease: String,
    pub probability: String,
    pub risk: String,
    pub risk_level: RiskLevel,
}

/// Extracts display fields from a report-card document
///
/// The disease label names the care focus ("Performance Metrics" when no
/// keyword group matches), the confidence is the highest percentage in
/// the text (default 100), and postMI/left-ventricular phrasing marks
/// the document high risk.
pub fn extract_report_card(text: &str) -> ReportCardFields {
    let lower = text.to_lowercase();

    let disease = FOCUS_GROUPS
        .iter()
        .find(|(markers, _)| markers.iter().any(|m| lower.contains(m)))
        .map(|(_, label)| (*label).to_string())
        .unwrap_or_else(|| "Performance Metrics".to_string());

    let probability = PERCENTAGES
        .captures_iter(text)
        .filter_map(|caps| caps[1].parse::<u32>().ok())
        .max()
        .unwrap_or(REPORT_CARD_DEFAULT_CONFIDENCE)
        .to_string();

    let (risk, risk_level) = if POST_MI_MARKERS.iter().any(|m| lower.contains(m)) {
        ("In postMI patients".to_string(), RiskLevel::High)
    } else {
        ("Performance Assessment".to_string(), RiskLevel::Medium)
    };

    ReportCardFields {
        disease,
        probability,
        risk,
        risk_level,
    }
}
