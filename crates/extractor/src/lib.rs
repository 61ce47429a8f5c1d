//! # Templight Extractor
//!
//! Turns a directory of plain-text welcome-light template files into a single
//! `const TEMPLATES = {...};` artifact consumed by the visualizer front end.
//!
//! ## Architecture
//!
//! ```text
//! Template directory
//!     │
//!     ├──> Scan (non-recursive, `!`-prefixed entries skipped)
//!     │
//!     ├──> Per-file line classifier
//!     │    ├─> Section markers (FLM2 Left [43] / FLM2 Right [44])
//!     │    ├─> Stage markers (Staging1_Data: / Staging2_Data:)
//!     │    └─> Data lines → one of four accumulators
//!     │
//!     ├──> Normalization (strip whitespace, split on commas, rejoin)
//!     │
//!     └──> TemplateCollection → const TEMPLATES = {...};
//! ```
//!
//! ## Example
//!
//! ```rust
//! use templight_extractor::{clean, TemplateParser};
//!
//! let template = "\
//! FLM2 Left [43]
//! Staging1_Data:
//! 1C,2F,
//! 00,4A
//! ";
//!
//! let raw = TemplateParser::new().parse(template);
//! assert_eq!(clean(&raw.left1), "1C, 2F, 00, 4A");
//! ```

mod config;
mod error;
mod extractor;
mod normalize;
mod output;
mod parser;
mod scanner;
mod types;

pub use config::{ExtractorConfig, DEFAULT_OUTPUT_PATH, DEFAULT_SOURCE_DIR};
pub use error::{ExtractError, Result};
pub use extractor::TemplateExtractor;
pub use normalize::clean;
pub use output::{render, write_artifact, OUTPUT_PREFIX, OUTPUT_SUFFIX};
pub use parser::{RawFields, Section, Stage, TemplateParser};
pub use scanner::TemplateScanner;
pub use types::{ExtractReport, FileFailure, TemplateCollection, TemplateRecord};
