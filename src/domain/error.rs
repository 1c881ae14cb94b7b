// ============================================================
// Layer 3 — Domain Errors
// ============================================================
// Failures that callers of the study pipeline can act on.
// Conditions the pipeline recovers from locally (an empty
// document, too few entities for a quiz question) are not
// errors and never reach this enum.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StudyError {
    /// The PDF could not be read: corrupt, encrypted or empty.
    #[error("could not extract text from PDF: {message}")]
    Extraction { message: String },

    #[error("storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not serialise study guide: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("no stored study guide for job '{0}'")]
    UnknownJob(String),

    #[error("invalid job id '{0}'")]
    InvalidJobId(String),
}

impl StudyError {
    pub fn extraction(message: impl Into<String>) -> Self {
        Self::Extraction { message: message.into() }
    }
}
