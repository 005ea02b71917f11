use crate::docstring::{BlockStringTracker, LineClass};
use crate::error::ScanError;
use crate::patterns::ImportPatterns;
use crate::report::ImportMatch;
use regex::Regex;
use std::fs;
use std::path::Path;

lazy_static::lazy_static! {
    // Universal newlines: CRLF, lone CR and LF all end a line.
    static ref LINE_BREAK: Regex = Regex::new(r"\r\n|\r|\n").unwrap();
}

/// Scans Python source text for imports of the target library.
///
/// Lines inside block strings and full-line `#` comments are skipped.
/// Matches come back in line order.
pub fn scan_python_source(
    source: &str,
    file_path: &Path,
    patterns: &ImportPatterns,
) -> Vec<ImportMatch> {
    let mut tracker = BlockStringTracker::new();
    let mut matches = Vec::new();

    for (line_idx, line) in LINE_BREAK.split(source).enumerate() {
        let stripped = line.trim();

        if tracker.classify(stripped) == LineClass::Excluded || stripped.starts_with('#') {
            continue;
        }

        if patterns.is_source_import(stripped) {
            matches.push(ImportMatch::in_source(
                file_path.to_path_buf(),
                line_idx + 1,
                stripped,
            ));
        }
    }

    matches
}

/// Reads a Python file and scans it.
///
/// Malformed UTF-8 is replaced rather than rejected, so only I/O failures
/// produce an error.
pub fn scan_python_file(
    file_path: &Path,
    patterns: &ImportPatterns,
) -> Result<Vec<ImportMatch>, ScanError> {
    let bytes = fs::read(file_path).map_err(|source| ScanError::Read {
        path: file_path.to_path_buf(),
        source,
    })?;
    let source = String::from_utf8_lossy(&bytes);
    Ok(scan_python_source(&source, file_path, patterns))
}
