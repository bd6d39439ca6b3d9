use std::path::PathBuf;

use thiserror::Error;

use crate::llm_client::LlmError;

/// Pipeline-level error type.
/// Every variant is fatal; a response without the delimiter is not an error.
#[derive(Debug, Error)]
pub enum TailorError {
    #[error("Cannot read {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot extract text from PDF {}: {message}", path.display())]
    PdfExtract { path: PathBuf, message: String },

    #[error("Completion request failed: {0}")]
    Upstream(#[from] LlmError),

    #[error("Invalid output file name: {0:?}")]
    InvalidOutputName(String),

    #[error("Cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
