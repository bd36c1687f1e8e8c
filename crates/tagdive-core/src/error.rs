//! Pipeline error taxonomy

use std::path::PathBuf;
use thiserror::Error;

/// Fatal pipeline failures. Per-tag and per-file conditions (missing source
/// folder, undecodable transcript, zero extracted messages) are handled
/// locally with a logged notice and never surface here.
#[derive(Debug, Error)]
pub enum Error {
    /// The export CSV could not be located anywhere under the working directory
    #[error("export file '{name}' not found under {root}")]
    ExportNotFound { name: String, root: PathBuf },

    /// No header in the export fuzzily matches a conversation-tag column
    #[error("no conversation-tag column in {path}")]
    TagColumnMissing { path: PathBuf },

    /// A configuration override file could not be read or parsed
    #[error("config {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
