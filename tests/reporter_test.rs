use std::path::PathBuf;
use vaex_finder::report::{ImportMatch, ScanResult, ScanSummary};
use vaex_finder::reporter::{render_json, render_text};

fn result_with(matches: Vec<ImportMatch>) -> ScanResult {
    ScanResult {
        root: PathBuf::from("/repo"),
        library: "vaex".to_string(),
        summary: ScanSummary {
            python_files: 3,
            notebook_files: 2,
        },
        matches,
    }
}

fn text(result: &ScanResult) -> String {
    colored::control::set_override(false);
    let mut out = Vec::new();
    render_text(result, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_text_report_without_matches() {
    let result = result_with(Vec::new());
    let output = text(&result);

    assert!(output.contains("Searching for vaex imports in: /repo"));
    assert!(output.contains("  Python files (.py): 3"));
    assert!(output.contains("  Jupyter notebooks (.ipynb): 2"));
    assert!(output.contains("✓ No vaex imports found in the repository."));
    assert!(!output.contains("File:"));
    assert_eq!(result.exit_code(), 0);
}

#[test]
fn test_text_report_with_matches() {
    let result = result_with(vec![
        ImportMatch::in_source(PathBuf::from("/repo/load.py"), 5, "  import vaex  "),
        ImportMatch::in_cell(PathBuf::from("/repo/nb.ipynb"), 1, 2, "import vaex as vx"),
    ]);
    let output = text(&result);

    assert!(output.contains("✗ Found 2 vaex import(s):"));
    assert!(output.contains("\nFile: /repo/load.py\n  Line: 5\n  Content: import vaex\n"));
    assert!(output
        .contains("\nFile: /repo/nb.ipynb\n  Location: Cell 1, Line 2\n  Content: import vaex as vx\n"));
    assert!(!output.contains("No vaex imports found"));
    assert_eq!(result.exit_code(), 1);
}

#[test]
fn test_json_report_shape() {
    let result = result_with(vec![
        ImportMatch::in_source(PathBuf::from("a.py"), 1, "import vaex"),
        ImportMatch::in_cell(PathBuf::from("b.ipynb"), 0, 3, "from vaex import open"),
    ]);
    let mut out = Vec::new();
    render_json(&result, &mut out).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(value["summary"]["python_files"], 3);
    assert_eq!(value["matches"][0]["type"], "import");
    assert!(value["matches"][0].get("cell").is_none());
    assert_eq!(value["matches"][1]["cell"], 0);
    assert_eq!(value["matches"][1]["line"], 3);
}
