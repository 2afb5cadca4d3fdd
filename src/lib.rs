//! # Treedump
//!
//! `treedump` walks a directory tree and concatenates the text of every file it
//! finds into a single output file, one `--- <path>` headed record per file.
//! Files named `*.exe` (any case) are skipped.
//!
//! Contents are decoded as UTF-8 with invalid sequences replaced by U+FFFD, so
//! binary files still produce a (garbled) text record. A file that cannot be
//! opened or read gets an inline `[Error reading file: ...]` record and the
//! walk continues.
//!
//! # Features
//!
//! - `logging` (default): Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use treedump::{ArchiveBuilder, archive};
//!
//! let options = ArchiveBuilder::new(".")
//!     .output("directory_contents.txt")
//!     .sort_by_name(true)
//!     .build();
//!
//! let summary = archive(options).expect("Failed to archive directory");
//! println!("{} files, {} unreadable", summary.records, summary.errors);
//! ```

mod engine;
mod error;
pub mod filter;
mod options;
pub mod output;
mod types;

pub use engine::{RecordStream, archive, archive_to_writer, read_record};
pub use error::ArchiveError;
pub use filter::{ExcludeFilter, is_excluded_name};
pub use options::{ArchiveBuilder, ArchiveOptions, DEFAULT_OUTPUT};
pub use types::{ArchiveSummary, Record, RecordBody};
