use std::path::PathBuf;
use thiserror::Error;
/// Errors returned while searching for header directories.
///
/// Under [`ErrorPolicy::Skip`](crate::ErrorPolicy::Skip) the filesystem
/// variants are logged instead of returned.
#[derive(Debug, Error)]
pub enum FinderError {
    /// A directory the walk reached could not be listed for its headers.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The walker itself failed: missing root, unreadable subtree, broken link
    /// or link loop while following links.
    #[error("Walk error: {0}")]
    Walk(String),
    /// An ignore glob did not compile.
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
    #[error("Serialization failed: {0}")]
    Serialize(String),
}
impl FinderError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FinderError::Io {
            path: path.into(),
            source,
        }
    }
}
