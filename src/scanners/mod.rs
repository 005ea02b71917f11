// Scanners module
// One scanner per supported file type.

/// Line-oriented scanner for Python source files.
pub mod python;

/// Scanner for the code cells of Jupyter notebooks.
pub mod notebook;
