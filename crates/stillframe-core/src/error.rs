//! Error types for Stillframe

use thiserror::Error;

/// Main error type for Stillframe operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// Access code did not match (client gallery gate)
    #[error("Invalid access code")]
    InvalidCode,

    /// A tab selection outside the selector's fixed domain
    #[error("Selection outside tab domain: {0}")]
    OutOfDomainSelection(String),

    /// Contact inquiry could not be delivered
    #[error("Submission failed: {0}")]
    Submission(String),

    /// Catalog file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog file could not be parsed
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;
