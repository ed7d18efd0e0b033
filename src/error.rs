// User Intake - Error Taxonomy
//
// Three failure classes, kept as distinct variants so callers can report them
// differently:
// - Validation: malformed or missing form input; the submission is rejected
//   and nothing is written.
// - Storage: the document store could not be reached or written; no retry.
// - Io/Csv: the CSV export destination could not be written.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Stored document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl IntakeError {
    /// Create a validation error from any displayable cause.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Whether this failure should be shown to the submitter as a form
    /// problem rather than a server-side fault.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result type alias for user-intake operations.
pub type Result<T> = std::result::Result<T, IntakeError>;
