use crate::simplify::risk_color;
use crate::types::ExtractionResult;
use std::fmt;

/// Text report formatter for extraction results
pub struct TextReport<'a> {
    result: &'a ExtractionResult,
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(result: &'a ExtractionResult) -> Self {
        Self { result }
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Narrative Extraction")?;
        writeln!(f, "====================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Document Type:  {}",
            self.result.document_type.simple_name()
        )?;
        writeln!(
            f,
            "Prediction:     {}",
            self.result
                .prediction
                .map(|p| p.simple_name())
                .unwrap_or("n/a")
        )?;
        writeln!(
            f,
            "Probability:    {}",
            self.result
                .probability
                .as_deref()
                .map(|p| format!("{}%", p))
                .unwrap_or_else(|| "n/a".to_string())
        )?;
        writeln!(
            f,
            "Disease:        {}",
            self.result.disease.as_deref().unwrap_or("n/a")
        )?;
        writeln!(f, "Display Label:  {}", self.result.simplified_disease)?;
        writeln!(
            f,
            "Risk:           {}",
            self.result.risk.as_deref().unwrap_or("n/a")
        )?;
        writeln!(
            f,
            "Risk Level:     {}",
            self.result.risk_level.simple_name()
        )?;
        writeln!(
            f,
            "Risk Color:     {}",
            risk_color(self.result.risk.as_deref(), self.result.risk_level)
        )?;

        if !self.result.metrics.is_empty() {
            writeln!(f)?;
            writeln!(f, "Clinical Metrics")?;
            writeln!(f, "----------------")?;
            let metrics = &self.result.metrics;
            let rows = [
                ("Glucose", &metrics.glucose),
                ("HbA1c", &metrics.hba1c),
                ("BMI", &metrics.bmi),
                ("Blood Pressure", &metrics.blood_pressure),
                ("Diabetes Status", &metrics.diabetes_status),
                ("Probability", &metrics.probability),
            ];
            for (label, value) in rows {
                if let Some(value) = value {
                    writeln!(f, "{:<16}{}", format!("{}:", label), value)?;
                }
            }
        }

        writeln!(f)?;
        writeln!(f, "Diabetes Positive: {}", self.result.diabetes_positive)?;
        if self.result.unrelated {
            writeln!(f, "Warning: narrative says the source is not a medical image")?;
        }

        Ok(())
    }
}
