//! Named fallback constants backing the extraction rule chains
//!
//! Every magic number the heuristics assign when a narrative carries no
//! explicit figure lives here, so tests assert against the same names
//! the rules use.

/// Numeric anchor for a textual "high" confidence
pub const CONFIDENCE_HIGH: u32 = 85;

/// Numeric anchor for a textual "medium" confidence
pub const CONFIDENCE_MEDIUM: u32 = 65;

/// Numeric anchor for a textual "low" confidence
pub const CONFIDENCE_LOW: u32 = 35;

/// Fallback when the narrative sounds suspicious/concerning/abnormal
pub const CONFIDENCE_SUSPICIOUS: u32 = 70;

/// Fallback when the narrative asks for follow-up or additional imaging
pub const CONFIDENCE_FOLLOW_UP: u32 = 50;

/// Fallback when the narrative reads likely/probably benign
pub const CONFIDENCE_BENIGN: u32 = 20;

/// Default confidence for a report card with no percentages at all
pub const REPORT_CARD_DEFAULT_CONFIDENCE: u32 = 100;

/// Probability above which an otherwise unlabelled diabetes document
/// counts as positive
pub const DIABETES_PROBABILITY_CUTOFF: f64 = 50.0;
