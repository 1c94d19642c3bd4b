use crate::error::{ReportcatError, Result};
use crate::extraction::{
    classify_document, extract_disease, extract_lab_metrics, extract_prediction,
    extract_probability, extract_report_card, extract_risk, has_diabetes, is_unrelated,
};
use crate::normalize::normalize;
use crate::simplify::{resolve_risk_level, simplify_disease};
use crate::types::{DocumentType, ExtractionResult};
use log::debug;

/// Input-size ceiling in bytes. Matching cost is linear in the input, but
/// callers pass narratives of a few KB; anything larger is a contract
/// violation rather than a report.
pub const MAX_INPUT_LEN: usize = 512 * 1024;

/// Main extractor for narrative medical reports
///
/// Provides a high-level API for deriving structured, display-ready
/// fields from an unstructured analysis narrative. Stateless: every
/// call normalizes, classifies and extracts independently, so the
/// extractor is safe to call concurrently from multiple requests.
///
/// # Example
///
/// ```
/// use reportcat_core::ReportExtractor;
///
/// let narrative = "The assessment is positive. Confidence is 82%. \
///                  Disease type is Herpes Zoster (Shingles). Risk level is High.";
/// let result = ReportExtractor::extract(narrative, None).unwrap();
///
/// assert_eq!(result.probability.as_deref(), Some("82"));
/// assert_eq!(result.simplified_disease, "Shingles");
/// assert_eq!(result.risk_level.to_string(), "high");
/// ```
pub struct ReportExtractor;

impl ReportExtractor {
    /// Extracts structured fields from a narrative report
    ///
    /// The optional hint biases document classification (see
    /// [`DocumentType`]). No-match outcomes are absorbed into absent
    /// fields; the only error is a caller contract violation.
    ///
    /// # Errors
    ///
    /// Returns [`ReportcatError::InvalidInput`] when the input exceeds
    /// [`MAX_INPUT_LEN`] bytes.
    pub fn extract(text: &str, hint: Option<DocumentType>) -> Result<ExtractionResult> {
        if text.len() > MAX_INPUT_LEN {
            return Err(ReportcatError::InvalidInput(format!(
                "narrative of {} bytes exceeds the {} byte ceiling",
                text.len(),
                MAX_INPUT_LEN
            )));
        }

        let normalized = normalize(text);
        let document_type = classify_document(&normalized, hint);
        debug!("document profile: {}", document_type);

        let mut result = ExtractionResult {
            document_type,
            unrelated: is_unrelated(&normalized),
            ..Default::default()
        };

        match document_type {
            DocumentType::ReportCard => {
                let fields = extract_report_card(&normalized);
                result.disease = Some(fields.disease);
                result.probability = Some(fields.probability);
                result.risk = Some(fields.risk);
                result.risk_level = fields.risk_level;
            }
            DocumentType::LabMetrics => {
                result.metrics = extract_lab_metrics(&normalized);
            }
            DocumentType::General => {
                result.prediction = extract_prediction(&normalized);
                result.probability = extract_probability(&normalized);
                result.disease = extract_disease(&normalized);
                let (risk, risk_level) = extract_risk(&normalized);
                result.risk = risk;
                result.risk_level = risk_level;

                // The classifier is advisory: a lab-hinted document that
                // reads like a general narrative still yields whatever
                // metrics its patterns find.
                if hint == Some(DocumentType::LabMetrics) {
                    result.metrics = extract_lab_metrics(&normalized);
                }
            }
        }

        result.diabetes_positive = has_diabetes(&normalized);
        result.simplified_disease = simplify_disease(result.disease.as_deref());
        result.risk_level = resolve_risk_level(result.risk_level, result.risk.as_deref());

        Ok(result)
    }
}
