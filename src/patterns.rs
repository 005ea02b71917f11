use anyhow::Result;
use regex::Regex;

/// Library searched for when nothing else is configured.
pub const DEFAULT_LIBRARY: &str = "vaex";

lazy_static::lazy_static! {
    /// Patterns for the default library, compiled once.
    pub static ref VAEX_PATTERNS: ImportPatterns = ImportPatterns::for_library(DEFAULT_LIBRARY).unwrap();
}

/// Compiled import patterns for one target library.
///
/// Python sources are matched anchored at the start of the trimmed line.
/// Notebook cells are matched anywhere in the line, since cell text gets no
/// comment or block-string filtering. The two differ on purpose; tests pin
/// both behaviours.
#[derive(Debug, Clone)]
pub struct ImportPatterns {
    library: String,
    anchored: Regex,
    unanchored: Regex,
}

impl ImportPatterns {
    pub fn for_library(library: &str) -> Result<Self> {
        let name = regex::escape(library);
        // `import vaex_x` still matches the anchored form; only `from` checks the boundary.
        let anchored = Regex::new(&format!(r"^(?:import\s+{name}|from\s+{name}\b)"))?;
        let unanchored = Regex::new(&format!(r"\b(?:import\s+{name}|from\s+{name})"))?;
        Ok(Self {
            library: library.to_string(),
            anchored,
            unanchored,
        })
    }

    pub fn library(&self) -> &str {
        &self.library
    }

    /// Matches a trimmed source line that starts with an import of the library.
    pub fn is_source_import(&self, trimmed: &str) -> bool {
        self.anchored.is_match(trimmed)
    }

    /// Matches a notebook line containing an import of the library anywhere.
    pub fn is_cell_import(&self, line: &str) -> bool {
        self.unanchored.is_match(line)
    }
}
