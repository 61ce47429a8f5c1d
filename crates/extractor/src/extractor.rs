use crate::config::ExtractorConfig;
use crate::error::Result;
use crate::normalize::clean;
use crate::output;
use crate::parser::{RawFields, TemplateParser};
use crate::scanner::TemplateScanner;
use crate::types::{ExtractReport, FileFailure, TemplateRecord};
use std::fs;
use std::path::Path;

/// Drives one extraction run: scan, parse, normalize, write.
pub struct TemplateExtractor {
    config: ExtractorConfig,
}

impl TemplateExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Build the template collection without touching the output path.
    ///
    /// Per-file read/decode failures are collected in the report and never
    /// abort the run; a failed entry contributes no record. Each file is
    /// opened, fully read, and closed before the next one is touched.
    pub fn extract(&self) -> Result<ExtractReport> {
        self.config.validate()?;

        let mut report = ExtractReport::default();
        for path in TemplateScanner::new(&self.config.source_dir).scan() {
            let filename = display_name(&path);
            match fs::read_to_string(&path) {
                Ok(content) => {
                    let raw = TemplateParser::new().parse(&content);
                    report.templates.insert(filename, normalized_record(&raw));
                }
                Err(e) => {
                    log::warn!("Error parsing {filename}: {e}");
                    report.failures.push(FileFailure {
                        filename,
                        detail: e.to_string(),
                    });
                }
            }
        }
        Ok(report)
    }

    /// Full run: extract, then write the artifact to the configured path.
    ///
    /// Unlike per-file failures, a failed artifact write is fatal.
    pub fn run(&self) -> Result<ExtractReport> {
        let report = self.extract()?;
        output::write_artifact(&self.config.output_path, &report.templates)?;
        Ok(report)
    }
}

fn normalized_record(raw: &RawFields) -> TemplateRecord {
    TemplateRecord {
        left1: clean(&raw.left1),
        left2: clean(&raw.left2),
        right1: clean(&raw.right1),
        right2: clean(&raw.right2),
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
