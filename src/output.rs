//! Output formatting for archive records.
//!
//! Every record is rendered as a `--- <path>` header line followed by either
//! the file contents or an `[Error reading file: ...]` line, then a blank
//! line:
//!
//! ```text
//! --- ./a.txt
//! hello
//!
//! --- ./locked.txt
//! [Error reading file: Permission denied (os error 13)]
//!
//! ```

use crate::types::{Record, RecordBody};
use std::io::{self, Write};

/// Prefix of every header line.
pub const HEADER_PREFIX: &str = "--- ";

/// Terminates every record body.
pub const RECORD_SEPARATOR: &str = "\n\n";

/// Renders the header line for `record`, newline included.
pub fn format_header(record: &Record) -> String {
    format!("{}{}\n", HEADER_PREFIX, record.path.display())
}

/// Renders the inline body used when a file cannot be read.
pub fn format_read_error(description: &str) -> String {
    format!("[Error reading file: {}]", description)
}

/// Writes one record and returns the number of bytes written.
///
/// Contents are written verbatim; no newline is added or removed beyond the
/// trailing separator.
pub fn write_record<W: Write + ?Sized>(out: &mut W, record: &Record) -> io::Result<u64> {
    let header = format_header(record);
    out.write_all(header.as_bytes())?;
    let body_len = match &record.body {
        RecordBody::Text { content, .. } => {
            out.write_all(content.as_bytes())?;
            content.len()
        }
        RecordBody::Unreadable(description) => {
            let line = format_read_error(description);
            out.write_all(line.as_bytes())?;
            line.len()
        }
    };
    out.write_all(RECORD_SEPARATOR.as_bytes())?;
    Ok((header.len() + body_len + RECORD_SEPARATOR.len()) as u64)
}
