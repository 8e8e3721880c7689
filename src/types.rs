use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A directory that directly contains at least one header file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderDirectory {
    /// The full path to the directory, as reached from the root.
    pub path: PathBuf,
    /// The path relative to the root. This is what the CLI prints.
    pub relative: PathBuf,
    /// Number of header files directly inside the directory.
    pub headers: usize,
}

/// The complete result of a search.
#[derive(Debug, Serialize, Deserialize)]
pub struct FinderResult {
    /// The root the walk started from.
    pub root: PathBuf,
    /// Qualifying directories in traversal order.
    pub directories: Vec<HeaderDirectory>,
}

impl FinderResult {
    /// Relative paths of every qualifying directory.
    pub fn relative_paths(&self) -> impl Iterator<Item = &PathBuf> {
        self.directories.iter().map(|d| &d.relative)
    }
}
