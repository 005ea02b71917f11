use crate::error::ScanError;
use crate::patterns::{ImportPatterns, VAEX_PATTERNS};
use crate::report::{ImportMatch, ScanResult, ScanSummary};
use crate::scanners::notebook::scan_notebook_file;
use crate::scanners::python::scan_python_file;
use crate::walker::{walk, FileKind, EXCLUDED_DIR};
use anyhow::Result;
use colored::*;
use log::{debug, info};
use std::path::Path;

/// The scan driver.
/// Holds the target library and the directory name to skip.
pub struct ImportFinder {
    pub patterns: ImportPatterns,
    pub excluded_dir: String,
}

impl Default for ImportFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportFinder {
    /// Creates a finder looking for `vaex` and skipping `.git`.
    pub fn new() -> Self {
        Self {
            patterns: VAEX_PATTERNS.clone(),
            excluded_dir: EXCLUDED_DIR.to_string(),
        }
    }

    /// Creates a finder for another library.
    pub fn with_library(library: &str) -> Result<Self> {
        Ok(Self {
            patterns: ImportPatterns::for_library(library)?,
            excluded_dir: EXCLUDED_DIR.to_string(),
        })
    }

    pub fn library(&self) -> &str {
        self.patterns.library()
    }

    /// Scans every Python file and notebook under `root`.
    ///
    /// Files are handled one at a time. A file that cannot be read or parsed
    /// is reported on stderr and contributes nothing; the scan itself never
    /// fails.
    pub fn scan(&self, root: &Path) -> ScanResult {
        // Counters and per-type match lists, owned by this call only.
        let mut summary = ScanSummary::default();
        let mut python_matches = Vec::new();
        let mut notebook_matches = Vec::new();

        // Visit files one by one. A failing file yields a warning and no matches.
        for (path, kind) in walk(root, &self.excluded_dir) {
            debug!("scanning {}", path.display());
            match kind {
                FileKind::Python => {
                    summary.python_files += 1;
                    python_matches.extend(or_warn(scan_python_file(&path, &self.patterns)));
                }
                FileKind::Notebook => {
                    summary.notebook_files += 1;
                    notebook_matches.extend(or_warn(scan_notebook_file(&path, &self.patterns)));
                }
            }
        }

        info!(
            "visited {} python files and {} notebooks",
            summary.python_files, summary.notebook_files
        );

        // Python matches first, then notebook matches.
        let mut matches = python_matches;
        matches.extend(notebook_matches);

        ScanResult {
            root: root.to_path_buf(),
            library: self.library().to_string(),
            summary,
            matches,
        }
    }
}

/// Turns a per-file failure into a warning and an empty result.
fn or_warn(result: std::result::Result<Vec<ImportMatch>, ScanError>) -> Vec<ImportMatch> {
    result.unwrap_or_else(|err| {
        eprintln!("{} {}", "Warning:".yellow(), err);
        Vec::new()
    })
}
