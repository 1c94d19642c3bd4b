use crate::types::LabMetrics;
use regex::Regex;
use std::sync::LazyLock;

static GLUCOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)glucose\s*(?:level)?\s*(?:of|:)?\s*([\d.]+)").expect("valid glucose pattern")
});

static HBA1C: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:hba1c|a1c)\s*(?:of|:)?\s*([\d.]+)\s*%?").expect("valid hba1c pattern")
});

static BMI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)bmi\s*(?:of|:)?\s*([\d.]+)").expect("valid bmi pattern"));

static BLOOD_PRESSURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:blood pressure|bp)\s*(?:of|:)?\s*([\d/]+)")
        .expect("valid blood pressure pattern")
});

static DIABETES_STATUS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:diabetes|diabetic)\s*(?:status|condition)?\s*(?:is|:)?\s*(positive|negative|present|absent|not detected|detected)",
    )
    .expect("valid diabetes status pattern")
});

static PROBABILITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:probability|chance|likelihood|risk)\s*(?:of|:)?\s*([\d.]+)\s*%?")
        .expect("valid probability pattern")
});

/// Extracts clinical panel metrics from a lab-style document
///
/// Each metric has its own capture pattern and is extracted
/// independently; a missing glucose value never blocks the HbA1c or
/// blood-pressure captures. Values stay as raw display strings.
pub fn extract_lab_metrics(text: &str) -> LabMetrics {
    LabMetrics {
        glucose: capture(&GLUCOSE, text),
        hba1c: capture(&HBA1C, text),
        bmi: capture(&BMI, text),
        blood_pressure: capture(&BLOOD_PRESSURE, text),
        diabetes_status: capture(&DIABETES_STATUS, text).map(|s| s.to_lowercase()),
        probability: capture(&PROBABILITY, text),
    }
}

fn capture(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .map(|caps| caps[1].trim().trim_end_matches('.').to_string())
}

/// Extracts the standalone probability/likelihood percentage used by the
/// diabetes determination fallback
pub fn extract_risk_probability(text: &str) -> Option<f64> {
    PROBABILITY
        .captures(text)
        .and_then(|caps| caps[1].trim_end_matches('.').parse().ok())
}
