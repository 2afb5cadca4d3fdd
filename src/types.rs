use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What was read for a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordBody {
    /// The decoded file contents.
    ///
    /// Invalid UTF-8 sequences are replaced with U+FFFD; `lossy` is set when
    /// at least one replacement happened.
    Text { content: String, lossy: bool },
    /// The file could not be opened or read. Holds the error description.
    Unreadable(String),
}

/// One header-plus-body unit of the output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// The walk root joined with the file's relative path.
    pub path: PathBuf,
    pub body: RecordBody,
}

impl Record {
    pub fn is_error(&self) -> bool {
        matches!(self.body, RecordBody::Unreadable(_))
    }
}

/// Counters reported once a run completes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArchiveSummary {
    /// Where the records were written.
    pub output: PathBuf,
    /// Number of records written, error records included.
    pub records: usize,
    /// Records whose body is an `[Error reading file: ...]` line.
    pub errors: usize,
    /// Records decoded with at least one replacement character.
    pub lossy: usize,
    /// Subdirectories below the root that could not be listed.
    pub walk_errors: usize,
    /// Total bytes written to the output.
    pub bytes_written: u64,
}
