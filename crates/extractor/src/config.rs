use crate::error::{ExtractError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default template directory, relative to the working directory.
pub const DEFAULT_SOURCE_DIR: &str = "Templates";

/// Default artifact path. The file carries a JS assignment but keeps the
/// `.json` name the visualizer loads.
pub const DEFAULT_OUTPUT_PATH: &str = "templates.json";

/// Configuration for a template extraction run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Directory scanned for template files (non-recursive)
    pub source_dir: PathBuf,

    /// Path the `const TEMPLATES = ...;` artifact is written to
    pub output_path: PathBuf,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl ExtractorConfig {
    /// Create config rooted at a specific template directory
    pub fn for_source(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            ..Default::default()
        }
    }

    /// Override the artifact path
    pub fn with_output(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !self.source_dir.is_dir() {
            return Err(ExtractError::SourceDir {
                path: self.source_dir.clone(),
            });
        }
        Ok(())
    }
}
