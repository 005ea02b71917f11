use log::debug;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Directory name that is never descended into.
pub const EXCLUDED_DIR: &str = ".git";

/// The file types the scanners understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Python,
    Notebook,
}

impl FileKind {
    /// Classifies a file by the suffix of its name.
    pub fn classify(file_name: &str) -> Option<FileKind> {
        if file_name.ends_with(".py") {
            Some(FileKind::Python)
        } else if file_name.ends_with(".ipynb") {
            Some(FileKind::Notebook)
        } else {
            None
        }
    }
}

fn is_excluded(entry: &DirEntry, excluded_dir: &str) -> bool {
    entry.depth() > 0 && entry.file_type().is_dir() && entry.file_name() == excluded_dir
}

/// Lazily yields every scannable file under `root`.
///
/// Directories named `excluded_dir` are pruned at any depth. Entries within a
/// directory come out sorted by name so repeated runs print the same report.
/// Entries that cannot be read are skipped.
pub fn walk<'a>(
    root: &Path,
    excluded_dir: &'a str,
) -> impl Iterator<Item = (PathBuf, FileKind)> + 'a {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |e| !is_excluded(e, excluded_dir))
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(err) => {
                debug!("skipping unreadable entry: {}", err);
                None
            }
        })
        .filter(|e| !e.file_type().is_dir())
        .filter_map(|e| {
            let kind = FileKind::classify(&e.file_name().to_string_lossy())?;
            Some((e.into_path(), kind))
        })
}
