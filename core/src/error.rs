use thiserror::Error;

/// Result type for reportcat operations
pub type Result<T> = std::result::Result<T, ReportcatError>;

/// Error types for reportcat operations
#[derive(Error, Debug)]
pub enum ReportcatError {
    /// Caller contract violation (e.g. oversized input)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<String> for ReportcatError {
    fn from(s: String) -> Self {
        ReportcatError::InvalidInput(s)
    }
}

impl From<&str> for ReportcatError {
    fn from(s: &str) -> Self {
        ReportcatError::InvalidInput(s.to_string())
    }
}
