use std::path::{Path, PathBuf};
use thiserror::Error;

/// A failure confined to a single scanned file.
///
/// None of these abort a scan: the driver reports them as warnings and moves
/// on with an empty result for the offending file.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not read {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ScanError {
    /// The file the error belongs to.
    pub fn path(&self) -> &Path {
        match self {
            ScanError::Read { path, .. } | ScanError::Parse { path, .. } => path,
        }
    }
}
