use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Leading character that excludes a directory entry from extraction.
const SKIP_PREFIX: char = '!';

/// Scanner for candidate template files in a source directory
pub struct TemplateScanner {
    root: PathBuf,
}

impl TemplateScanner {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// List candidate entries, non-recursive, in directory listing order.
    ///
    /// Entries whose name starts with `!` are skipped. Everything else is a
    /// candidate, subdirectories included; unreadable candidates fail later
    /// at the file boundary so one bad entry never aborts the scan.
    pub fn scan(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for result in WalkDir::new(&self.root).min_depth(1).max_depth(1) {
            match result {
                Ok(entry) => {
                    if Self::is_skipped(entry.path()) {
                        log::debug!("Skipping excluded entry {}", entry.path().display());
                        continue;
                    }
                    files.push(entry.into_path());
                }
                Err(e) => log::warn!("Failed to read entry: {e}"),
            }
        }

        log::info!(
            "Found {} template candidates in {}",
            files.len(),
            self.root.display()
        );
        files
    }

    fn is_skipped(path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(SKIP_PREFIX))
    }
}
