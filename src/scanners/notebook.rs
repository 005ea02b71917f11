use crate::error::ScanError;
use crate::patterns::ImportPatterns;
use crate::report::ImportMatch;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// The subset of the notebook format the scanner needs.
///
/// The document must be a JSON object; a missing `cells` list counts as empty.
#[derive(Debug, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Notebook {
    pub cells: Vec<Cell>,
}

impl TryFrom<Map<String, Value>> for Notebook {
    type Error = serde_json::Error;

    fn try_from(mut map: Map<String, Value>) -> Result<Self, Self::Error> {
        let cells = match map.remove("cells") {
            Some(cells) => serde_json::from_value(cells)?,
            None => Vec::new(),
        };
        Ok(Self { cells })
    }
}

/// One notebook cell. Must be a JSON object, but its fields are only
/// interpreted once the cell is known to be a code cell.
#[derive(Debug, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct Cell {
    /// `None` when the key is missing or not a string.
    pub cell_type: Option<String>,
    source: Option<Value>,
}

impl From<Map<String, Value>> for Cell {
    fn from(mut map: Map<String, Value>) -> Self {
        Self {
            cell_type: map
                .get("cell_type")
                .and_then(Value::as_str)
                .map(str::to_string),
            source: map.remove("source"),
        }
    }
}

/// Cell source is stored either as one string or as a list of fragments.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CellSource {
    Text(String),
    Fragments(Vec<String>),
}

impl CellSource {
    pub fn text(&self) -> String {
        match self {
            CellSource::Text(text) => text.clone(),
            CellSource::Fragments(fragments) => fragments.concat(),
        }
    }
}

impl Cell {
    pub fn is_code(&self) -> bool {
        self.cell_type.as_deref() == Some("code")
    }

    /// The concatenated source text. A missing source is empty; anything
    /// other than a string or a list of strings is an error.
    pub fn source_text(&self) -> Result<String, serde_json::Error> {
        match &self.source {
            Some(value) => CellSource::deserialize(value).map(|source| source.text()),
            None => Ok(String::new()),
        }
    }
}

/// Scans the code cells of an already parsed notebook.
///
/// Markdown and raw cells are never looked at. Cell indices count every
/// cell; line numbers restart at 1 in each cell.
pub fn scan_cells(
    notebook: &Notebook,
    file_path: &Path,
    patterns: &ImportPatterns,
) -> Result<Vec<ImportMatch>, ScanError> {
    let mut matches = Vec::new();

    for (cell_idx, cell) in notebook.cells.iter().enumerate() {
        if !cell.is_code() {
            continue;
        }
        let source = cell.source_text().map_err(|source| ScanError::Parse {
            path: file_path.to_path_buf(),
            source,
        })?;
        for (line_idx, line) in source.split('\n').enumerate() {
            if patterns.is_cell_import(line) {
                matches.push(ImportMatch::in_cell(
                    file_path.to_path_buf(),
                    cell_idx,
                    line_idx + 1,
                    line,
                ));
            }
        }
    }

    Ok(matches)
}

/// Parses notebook JSON text and scans it.
pub fn scan_notebook_source(
    content: &str,
    file_path: &Path,
    patterns: &ImportPatterns,
) -> Result<Vec<ImportMatch>, ScanError> {
    let notebook: Notebook = serde_json::from_str(content).map_err(|source| ScanError::Parse {
        path: file_path.to_path_buf(),
        source,
    })?;
    scan_cells(&notebook, file_path, patterns)
}

/// Reads a notebook file and scans it.
pub fn scan_notebook_file(
    file_path: &Path,
    patterns: &ImportPatterns,
) -> Result<Vec<ImportMatch>, ScanError> {
    let content = fs::read_to_string(file_path).map_err(|source| ScanError::Read {
        path: file_path.to_path_buf(),
        source,
    })?;
    scan_notebook_source(&content, file_path, patterns)
}
