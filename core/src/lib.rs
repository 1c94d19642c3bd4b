pub mod api;
pub mod cli;
pub mod error;
pub mod extraction;
pub mod normalize;
pub mod simplify;
pub mod types;

pub use api::{ReportExtractor, MAX_INPUT_LEN};
pub use cli::report::TextReport;
pub use error::{ReportcatError, Result};
pub use normalize::normalize;
pub use types::*;
