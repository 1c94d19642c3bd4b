pub mod defaults;
pub mod diabetes;
pub mod disease;
pub mod document_type;
pub mod lab_metrics;
pub mod prediction;
pub mod probability;
pub mod report_card;
pub mod risk;

pub use diabetes::has_diabetes;
pub use disease::extract_disease;
pub use document_type::{classify_document, is_unrelated};
pub use lab_metrics::extract_lab_metrics;
pub use prediction::extract_prediction;
pub use probability::extract_probability;
pub use report_card::{extract_report_card, ReportCardFields};
pub use risk::extract_risk;
