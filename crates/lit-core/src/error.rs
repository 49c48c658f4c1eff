use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LitError {
    #[error("Source not found: {}: {source}", path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Start boundary {marker:?} not found after scanning {scanned_lines} lines")]
    BoundaryNotFound { marker: String, scanned_lines: usize },
    #[error("Failed to write {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid heading pattern {pattern:?}: {source}")]
    InvalidRule {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("Unknown work: {0}")]
    UnknownWork(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, LitError>;
