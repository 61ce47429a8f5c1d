use std::path::PathBuf;
use thiserror::Error;

/// Result type for extractor operations
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors that can occur while building or writing the template artifact
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Source directory is missing or not a directory
    #[error("Invalid source directory: {}", path.display())]
    SourceDir { path: PathBuf },

    /// Failed to write the output artifact
    #[error("Failed to write {}: {source}", path.display())]
    WriteArtifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
