use crate::types::DocumentType;
use log::debug;

/// Markers that identify a quality/performance report card
const REPORT_CARD_MARKERS: &[&str] = &[
    "quality report card",
    "performance metrics",
    "hospital performance",
];

/// Markers a lab-metrics hint needs before the lab profile applies
const LAB_DOCUMENT_MARKERS: &[&str] = &["report", "medical document"];

/// Markers that flag the narrative as not describing a medical image
const UNRELATED_MARKERS: &[&str] = &["not related", "not a medical", "not show"];

/// Classifies a normalized narrative into an extraction profile
///
/// Rules, in order:
/// 1. A `ReportCard` hint, or any report-card marker in the text,
///    selects the report-card profile.
/// 2. A `LabMetrics` hint selects the lab profile when the text also
///    reads like a clinical document.
/// 3. Everything else is a general diagnostic narrative.
///
/// Classification is advisory: it picks which profile runs, nothing
/// more.
pub fn classify_document(text: &str, hint: Option<DocumentType>) -> DocumentType {
    let lower = text.to_lowercase();

    if hint == Some(DocumentType::ReportCard)
        || REPORT_CARD_MARKERS.iter().any(|m| lower.contains(m))
    {
        debug!("classified as report card");
        return DocumentType::ReportCard;
    }

    if hint == Some(DocumentType::LabMetrics)
        && LAB_DOCUMENT_MARKERS.iter().any(|m| lower.contains(m))
    {
        debug!("classified as lab metrics");
        return DocumentType::LabMetrics;
    }

    DocumentType::General
}

/// Whether the narrative says the analyzed source is not a medical image
pub fn is_unrelated(text: &str) -> bool {
    let lower = text.to_lowercase();
    UNRELATED_MARKERS.iter().any(|m| lower.contains(m))
}
