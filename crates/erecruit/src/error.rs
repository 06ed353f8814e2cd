//! Error types for document extraction and batch runs.
//!
//! [`ExtractError`] is scoped to one document: the batch records it against
//! the file and moves on. [`Error`] is fatal to a whole run.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to extract content from one document.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The document could not be opened or parsed.
    #[error("failed to open {}: {message}", path.display())]
    Open { path: PathBuf, message: String },

    /// A page of the document could not be read.
    #[error("failed to read page {page} of {}: {message}", path.display())]
    Page {
        path: PathBuf,
        /// 1-based page number.
        page: usize,
        message: String,
    },

    /// The extraction backend panicked on a malformed document.
    #[error("extraction panicked on {} (malformed document)", path.display())]
    Panicked { path: PathBuf },
}

/// Fatal error for a batch run.
#[derive(Debug, Error)]
pub enum Error {
    /// The input folder could not be listed.
    #[error("cannot read folder {}: {source}", path.display())]
    ReadFolder {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error serializing CSV output.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error serializing JSON output.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A single document failed outside of a batch.
    #[error(transparent)]
    Extract(#[from] ExtractError),
}

/// Convenience alias for fallible batch operations.
pub type Result<T> = std::result::Result<T, Error>;
