use super::enums::{DocumentType, Prediction, RiskLevel};

/// Clinical metrics extracted from a lab-metrics document
///
/// Each field is captured independently; absence of one metric never
/// blocks extraction of the others. Values are kept as raw display
/// strings (blood pressure stays in its "systolic/diastolic" shape).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct LabMetrics {
    /// Glucose level
    pub glucose: Option<String>,

    /// HbA1c percentage
    pub hba1c: Option<String>,

    /// Body mass index
    pub bmi: Option<String>,

    /// Blood pressure as a raw "systolic/diastolic" string
    pub blood_pressure: Option<String>,

    /// Diabetes status keyword (positive/negative/present/absent/...)
    pub diabetes_status: Option<String>,

    /// Standalone probability/risk percentage
    pub probability: Option<String>,
}

impl LabMetrics {
    /// Returns whether no metric was extracted at all
    pub fn is_empty(&self) -> bool {
        self.glucose.is_none()
            && self.hba1c.is_none()
            && self.bmi.is_none()
            && self.blood_pressure.is_none()
            && self.diabetes_status.is_none()
            && self.probability.is_none()
    }
}

/// Structured extraction output for a narrative report
///
/// Plain data for direct rendering by the caller. Every narrative field
/// is optional; absence means "pattern not found", never an error. The
/// booleans and enums carry defined defaults (`diabetes_positive` false,
/// `risk_level` unknown, `simplified_disease` "Unknown").
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct ExtractionResult {
    /// Which extraction profile was applied
    pub document_type: DocumentType,

    /// Diagnostic prediction (positive/negative/detected/not detected)
    pub prediction: Option<Prediction>,

    /// Confidence/probability percentage as a display string in [0,100]
    pub probability: Option<String>,

    /// Free-text disease label before simplification
    pub disease: Option<String>,

    /// Canonical display label for the disease, at most two words
    pub simplified_disease: String,

    /// Free-text risk phrase
    pub risk: Option<String>,

    /// Derived ordinal risk classification
    pub risk_level: RiskLevel,

    /// Clinical metrics (populated only for lab-metrics documents)
    pub metrics: LabMetrics,

    /// Binary diabetes determination (false when no evidence found)
    pub diabetes_positive: bool,

    /// Whether the narrative says the source is not a medical image
    pub unrelated: bool,
}

impl Default for ExtractionResult {
    fn default() -> Self {
        Self {
            document_type: DocumentType::General,
            prediction: None,
            probability: None,
            disease: None,
            simplified_disease: "Unknown".to_string(),
            risk: None,
            risk_level: RiskLevel::Unknown,
            metrics: LabMetrics::default(),
            diabetes_positive: false,
            unrelated: false,
        }
    }
}

impl ExtractionResult {
    /// Returns whether any narrative field was extracted
    pub fn has_findings(&self) -> bool {
        self.prediction.is_some()
            || self.probability.is_some()
            || self.disease.is_some()
            || self.risk.is_some()
            || !self.metrics.is_empty()
    }
}
