use crate::report::ScanResult;
use colored::*;
use std::io::{self, Write};

const RULE_WIDTH: usize = 80;

/// Writes the human-readable report.
///
/// Layout: header naming the root, per-type file counts, then either a single
/// all-clear line or a count followed by one block per match.
pub fn render_text<W: Write>(result: &ScanResult, out: &mut W) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);

    writeln!(
        out,
        "{}",
        format!(
            "Searching for {} imports in: {}",
            result.library,
            result.root.display()
        )
        .bold()
    )?;
    writeln!(out, "{}", rule)?;

    writeln!(out, "Files searched:")?;
    writeln!(out, "  Python files (.py): {}", result.summary.python_files)?;
    writeln!(
        out,
        "  Jupyter notebooks (.ipynb): {}",
        result.summary.notebook_files
    )?;
    writeln!(out)?;

    if !result.has_matches() {
        writeln!(
            out,
            "{}",
            format!("✓ No {} imports found in the repository.", result.library).green()
        )?;
        return Ok(());
    }

    writeln!(
        out,
        "{}",
        format!(
            "✗ Found {} {} import(s):",
            result.matches.len(),
            result.library
        )
        .red()
    )?;
    writeln!(out, "{}", rule)?;

    for m in &result.matches {
        writeln!(out, "\nFile: {}", m.file.display())?;
        match m.cell {
            Some(cell) => writeln!(out, "  Location: Cell {}, Line {}", cell, m.line)?,
            None => writeln!(out, "  Line: {}", m.line)?,
        }
        writeln!(out, "  Content: {}", m.content)?;
    }

    Ok(())
}

/// Writes the result as pretty-printed JSON.
pub fn render_json<W: Write>(result: &ScanResult, out: &mut W) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, result)?;
    writeln!(out)?;
    Ok(())
}
