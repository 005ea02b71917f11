// Library root, exposing the scanner pieces for the binary and for tests.

/// Module containing the scan driver.
/// This includes the `ImportFinder` struct that walks a tree and aggregates matches.
pub mod finder;

/// Module containing the directory walker and file classification.
pub mod walker;

/// Module containing the block-string exclusion heuristic used for Python sources.
pub mod docstring;

/// Module containing the compiled import patterns.
pub mod patterns;

/// Module containing the per-file-type scanners.
pub mod scanners;

/// Module defining the scan result data structures.
/// This includes `ImportMatch`, `ScanSummary` and `ScanResult`.
pub mod report;

/// Module containing text and JSON rendering of scan results.
pub mod reporter;

/// Module defining per-file scan errors.
pub mod error;
