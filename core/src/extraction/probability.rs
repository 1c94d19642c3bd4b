use super::defaults::{
    CONFIDENCE_BENIGN, CONFIDENCE_FOLLOW_UP, CONFIDENCE_HIGH, CONFIDENCE_LOW, CONFIDENCE_MEDIUM,
    CONFIDENCE_SUSPICIOUS,
};
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

static KEYWORD_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:probability|chance|likelihood|confidence)\s*(?:level|of)?\s*(?:is|:)?\s*([\d.]+)\s*%?")
        .expect("valid keyword-number pattern")
});

static PERCENT_BEFORE_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([\d.]+)\s*%\s*(?:probability|chance|likelihood|confidence)")
        .expect("valid percent-before-keyword pattern")
});

static TEXTUAL_CONFIDENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:probability|chance|likelihood|confidence)\s*(?:level)?\s*(?:is|:)?\s*(high|medium|low)")
        .expect("valid textual confidence pattern")
});

static STANDALONE_PERCENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)\s*(?:percent|%)").expect("valid standalone percent pattern")
});

/// A single probability rule: name plus matcher, iterated in order
type ProbabilityRule = (&'static str, fn(&str) -> Option<String>);

/// Ordered probability rule chain. First match wins; order is the
/// documented tie-break policy.
const PROBABILITY_RULES: &[ProbabilityRule] = &[
    ("keyword-number", rule_keyword_number),
    ("percent-before-keyword", rule_percent_before_keyword),
    ("textual-confidence", rule_textual_confidence),
    ("standalone-percent", rule_standalone_percent),
    ("content-fallback", rule_content_fallback),
];

/// Extracts a probability/confidence percentage from a narrative
///
/// Returns the value as a display string, or `None` when no rule in the
/// chain matches.
pub fn extract_probability(text: &str) -> Option<String> {
    for (name, rule) in PROBABILITY_RULES {
        if let Some(value) = rule(text) {
            debug!("probability rule matched: {}", name);
            return Some(value);
        }
    }
    None
}

/// Validates and normalizes a captured numeric string
///
/// Rejects captures that do not parse or fall outside [0,100] so the
/// chain can move on to the next rule.
fn accept_percentage(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('.');
    let value: f64 = trimmed.parse().ok()?;
    if (0.0..=100.0).contains(&value) {
        Some(trimmed.to_string())
    } else {
        None
    }
}

fn rule_keyword_number(text: &str) -> Option<String> {
    KEYWORD_NUMBER
        .captures(text)
        .and_then(|caps| accept_percentage(&caps[1]))
}

fn rule_percent_before_keyword(text: &str) -> Option<String> {
    PERCENT_BEFORE_KEYWORD
        .captures(text)
        .and_then(|caps| accept_percentage(&caps[1]))
}

fn rule_textual_confidence(text: &str) -> Option<String> {
    let caps = TEXTUAL_CONFIDENCE.captures(text)?;
    let anchor = match caps[1].to_lowercase().as_str() {
        "high" => CONFIDENCE_HIGH,
        "medium" => CONFIDENCE_MEDIUM,
        "low" => CONFIDENCE_LOW,
        _ => return None,
    };
    Some(anchor.to_string())
}

fn rule_standalone_percent(text: &str) -> Option<String> {
    // First occurrence anywhere. Known precision/recall tradeoff: an
    // unrelated percentage earlier in the text wins.
    STANDALONE_PERCENT
        .captures(text)
        .and_then(|caps| accept_percentage(&caps[1]))
}

fn rule_content_fallback(text: &str) -> Option<String> {
    let lower = text.to_lowercase();
    if ["suspicious", "concerning", "abnormal"]
        .iter()
        .any(|w| lower.contains(w))
    {
        return Some(CONFIDENCE_SUSPICIOUS.to_string());
    }
    // Normalization may have stripped the hyphen from "follow-up"
    if ["requires follow-up", "requires followup", "additional imaging"]
        .iter()
        .any(|w| lower.contains(w))
    {
        return Some(CONFIDENCE_FOLLOW_UP.to_string());
    }
    if ["likely benign", "probably benign"]
        .iter()
        .any(|w| lower.contains(w))
    {
        return Some(CONFIDENCE_BENIGN.to_string());
    }
    None
}
