//! Core type definitions for narrative report extraction
//!
//! This module provides the fundamental types used throughout the reportcat library:
//! - [`DocumentType`]: Extraction profile classification (general, report card, lab metrics)
//! - [`Prediction`]: Diagnostic prediction values (positive, negative, detected, not detected)
//! - [`RiskLevel`]: Three-point ordinal risk classification with an unknown sentinel
//! - [`RiskColor`]: Traffic-light display category for risk output
//! - [`ExtractionResult`]: Structured, display-ready extraction output
//! - [`LabMetrics`]: Independently captured clinical panel values

mod enums;
mod result;

pub use enums::{DocumentType, Prediction, RiskColor, RiskLevel};
pub use result::{ExtractionResult, LabMetrics};
