use serde::Serialize;
use std::path::PathBuf;

/// What kind of occurrence a match is. Only imports are detected today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Import,
}

/// One detected import of the target library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportMatch {
    /// File the import was found in.
    pub file: PathBuf,
    /// 1-based line number. For notebooks this counts within the cell.
    pub line: usize,
    /// Zero-based cell index, only set for notebook matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell: Option<usize>,
    /// The matched line, trimmed.
    pub content: String,
    #[serde(rename = "type")]
    pub kind: MatchKind,
}

impl ImportMatch {
    pub fn in_source(file: PathBuf, line: usize, content: &str) -> Self {
        Self {
            file,
            line,
            cell: None,
            content: content.trim().to_string(),
            kind: MatchKind::Import,
        }
    }

    pub fn in_cell(file: PathBuf, cell: usize, line: usize, content: &str) -> Self {
        Self {
            file,
            line,
            cell: Some(cell),
            content: content.trim().to_string(),
            kind: MatchKind::Import,
        }
    }
}

/// Counts of files visited per type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    pub python_files: usize,
    pub notebook_files: usize,
}

/// Everything a scan produced, ready for the reporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    /// Root directory that was scanned.
    pub root: PathBuf,
    /// Library that was searched for.
    pub library: String,
    pub summary: ScanSummary,
    /// Python matches first, then notebook matches, each in discovery order.
    pub matches: Vec<ImportMatch>,
}

impl ScanResult {
    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }

    /// Process status: 0 when nothing was found, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.has_matches() {
            1
        } else {
            0
        }
    }
}
