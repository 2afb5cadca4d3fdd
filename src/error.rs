use std::path::PathBuf;
use thiserror::Error;
/// Fatal failures that stop an archive run.
///
/// Per-file read failures are not errors at this level; they are carried
/// inline by [`RecordBody::Unreadable`](crate::RecordBody::Unreadable).
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The root could not be inspected or listed, or the output file could
    /// not be created, written or flushed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// A directory below the root could not be listed.
    #[error("Walk error: {0}")]
    Walk(String),
    /// The root exists but is not a directory.
    #[error("Invalid path: {0}")]
    InvalidPath(String),
    /// The built-in exclusion glob failed to compile.
    #[error("Internal error: exclusion pattern '{pattern}' is invalid: {reason}")]
    Pattern { pattern: String, reason: String },
}
impl ArchiveError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ArchiveError::Io {
            path: path.into(),
            source,
        }
    }
}
