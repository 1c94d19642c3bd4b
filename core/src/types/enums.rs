use std::fmt;

/// Document profile classification
///
/// Decides which extraction profile runs for a narrative. The same type
/// doubles as the optional caller hint: a `ReportCard` hint forces the
/// report-card profile, a `LabMetrics` hint enables the lab-metrics
/// profile when the text looks like a clinical document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "snake_case"))]
pub enum DocumentType {
    /// Free-form diagnostic narrative (imaging-style findings)
    #[default]
    General,
    /// Quality/performance report card
    ReportCard,
    /// Clinical lab panel (e.g. diabetes metrics)
    LabMetrics,
}

impl DocumentType {
    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            DocumentType::General => "general",
            DocumentType::ReportCard => "report card",
            DocumentType::LabMetrics => "lab metrics",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

/// Diagnostic prediction extracted from a narrative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "snake_case"))]
pub enum Prediction {
    Positive,
    Negative,
    Detected,
    NotDetected,
}

impl Prediction {
    /// Parses a prediction keyword as captured by the extraction patterns
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Some(Prediction::Positive),
            "negative" => Some(Prediction::Negative),
            "detected" => Some(Prediction::Detected),
            "not detected" => Some(Prediction::NotDetected),
            _ => None,
        }
    }

    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            Prediction::Positive => "positive",
            Prediction::Negative => "negative",
            Prediction::Detected => "detected",
            Prediction::NotDetected => "not detected",
        }
    }

    /// Whether this prediction indicates a finding was present
    pub fn is_affirmative(&self) -> bool {
        matches!(self, Prediction::Positive | Prediction::Detected)
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

/// Three-point ordinal risk classification
///
/// Ordering follows severity: Low < Medium < High. Unknown sorts first
/// so `max()` over partial evidence never promotes an unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum RiskLevel {
    #[default]
    Unknown,
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Returns whether this level is unknown
    pub fn is_unknown(&self) -> bool {
        matches!(self, RiskLevel::Unknown)
    }

    /// Derives a risk level from a free-text severity phrase
    ///
    /// Substring tests applied in order: low ("low"/"minimal"/"mild"),
    /// then medium ("moderate"/"medium"), then high
    /// ("high"/"severe"/"critical"). First match wins.
    pub fn from_phrase(s: &str) -> Self {
        let s_lower = s.to_lowercase();
        if ["low", "minimal", "mild"].iter().any(|p| s_lower.contains(p)) {
            RiskLevel::Low
        } else if ["moderate", "medium"].iter().any(|p| s_lower.contains(p)) {
            RiskLevel::Medium
        } else if ["high", "severe", "critical"]
            .iter()
            .any(|p| s_lower.contains(p))
        {
            RiskLevel::High
        } else {
            RiskLevel::Unknown
        }
    }

    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            RiskLevel::Unknown => "unknown",
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

/// Traffic-light display category derived from risk output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum RiskColor {
    /// No risk information at all
    Gray,
    Green,
    Yellow,
    Red,
    /// Informational (postMI cohort phrasing, or unresolvable text)
    Blue,
}

impl RiskColor {
    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            RiskColor::Gray => "gray",
            RiskColor::Green => "green",
            RiskColor::Yellow => "yellow",
            RiskColor::Red => "red",
            RiskColor::Blue => "blue",
        }
    }
}

impl fmt::Display for RiskColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_from_str() {
        assert_eq!(Prediction::from_str("positive"), Some(Prediction::Positive));
        assert_eq!(Prediction::from_str("NEGATIVE"), Some(Prediction::Negative));
        assert_eq!(
            Prediction::from_str(" detected "),
            Some(Prediction::Detected)
        );
        assert_eq!(
            Prediction::from_str("not detected"),
            Some(Prediction::NotDetected)
        );
        assert_eq!(Prediction::from_str("inconclusive"), None);
    }

    #[test]
    fn test_risk_level_from_phrase_order() {
        // "mild" is a low pattern and must win before medium/high checks
        assert_eq!(RiskLevel::from_phrase("Mild"), RiskLevel::Low);
        assert_eq!(
            RiskLevel::from_phrase("moderate severity"),
            RiskLevel::Medium
        );
        assert_eq!(RiskLevel::from_phrase("SEVERE"), RiskLevel::High);
        assert_eq!(RiskLevel::from_phrase("critical state"), RiskLevel::High);
        assert_eq!(RiskLevel::from_phrase("indeterminate"), RiskLevel::Unknown);
    }

    #[test]
    fn test_risk_level_low_wins_in_mixed_phrase() {
        // Substring order is the tie-break: a phrase containing both a low
        // and a high keyword resolves to the earlier (low) pattern.
        assert_eq!(RiskLevel::from_phrase("low to high"), RiskLevel::Low);
    }

    #[test]
    fn test_risk_level_ordering() {
        assert!(RiskLevel::Unknown < RiskLevel::Low);
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
    }

    #[test]
    fn test_prediction_affirmative() {
        assert!(Prediction::Positive.is_affirmative());
        assert!(Prediction::Detected.is_affirmative());
        assert!(!Prediction::Negative.is_affirmative());
        assert!(!Prediction::NotDetected.is_affirmative());
    }
}
