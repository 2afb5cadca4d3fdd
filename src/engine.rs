use crate::error::ArchiveError;
use crate::filter::ExcludeFilter;
use crate::options::ArchiveOptions;
use crate::output::write_record;
use crate::types::{ArchiveSummary, Record, RecordBody};
use ignore::WalkBuilder;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(options: &ArchiveOptions) -> Self {
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .standard_filters(false)
            .follow_links(options.follow_links);
        // Files of a directory come before its subdirectories, so a whole
        // directory is emitted before the walk descends.
        let by_name = options.sort_by_name;
        builder.sort_by_file_path(move |a, b| {
            let order = a.is_dir().cmp(&b.is_dir());
            if by_name {
                order.then_with(|| a.file_name().cmp(&b.file_name()))
            } else {
                order
            }
        });
        Self {
            inner: builder.build(),
        }
    }
    fn into_iter(self) -> impl Iterator<Item = Result<PathBuf, ArchiveError>> {
        self.inner.filter_map(|result| match result {
            Ok(entry) => {
                let file_type = entry.file_type()?;
                if file_type.is_file() {
                    return Some(Ok(entry.into_path()));
                }
                // Unfollowed links: linked files are read, linked directories
                // are neither recursed nor recorded, dangling links are kept
                // so they surface as read errors.
                if file_type.is_symlink() && !entry.path().is_dir() {
                    return Some(Ok(entry.into_path()));
                }
                #[cfg(feature = "logging")]
                if !file_type.is_dir() && !file_type.is_symlink() {
                    tracing::debug!("Skipping special file: {}", entry.path().display());
                }
                None
            }
            Err(e) => Some(Err(ArchiveError::Walk(e.to_string()))),
        })
    }
}
/// The output file, identified so the walk can step over it.
struct OutputMarker {
    name: OsString,
    canonical: PathBuf,
}
impl OutputMarker {
    fn locate(output: &Path) -> Option<Self> {
        let canonical = fs::canonicalize(output).ok()?;
        let name = canonical.file_name()?.to_os_string();
        Some(Self { name, canonical })
    }
    fn matches(&self, path: &Path) -> bool {
        path.file_name() == Some(self.name.as_os_str())
            && fs::canonicalize(path).is_ok_and(|p| p == self.canonical)
    }
}
fn check_root(root: &Path) -> Result<(), ArchiveError> {
    let metadata = fs::metadata(root).map_err(|e| ArchiveError::io(root, e))?;
    if !metadata.is_dir() {
        return Err(ArchiveError::InvalidPath(format!(
            "{} is not a directory",
            root.display()
        )));
    }
    fs::read_dir(root).map_err(|e| ArchiveError::io(root, e))?;
    Ok(())
}
fn read_text(path: &Path) -> io::Result<(String, bool)> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(match String::from_utf8(bytes) {
        Ok(content) => (content, false),
        Err(e) => (String::from_utf8_lossy(e.as_bytes()).into_owned(), true),
    })
}
/// Reads one file into a [`Record`].
///
/// Never fails: bytes that are not valid UTF-8 become U+FFFD, and any I/O
/// error opening or reading the file becomes a [`RecordBody::Unreadable`]
/// body carrying the error's description.
pub fn read_record(path: impl Into<PathBuf>) -> Record {
    let path = path.into();
    let body = match read_text(&path) {
        Ok((content, lossy)) => RecordBody::Text { content, lossy },
        Err(e) => {
            #[cfg(feature = "logging")]
            tracing::debug!("Unreadable file {}: {}", path.display(), e);
            RecordBody::Unreadable(e.to_string())
        }
    };
    Record { path, body }
}
/// Walks the root and yields one [`Record`] per archived file, in walk order.
///
/// Files matching the `*.exe` filter are skipped. When
/// [`ArchiveOptions::exclude_output`] is set and the output file already
/// exists, it is skipped too. Failures listing a directory are yielded as
/// [`ArchiveError::Walk`] and the walk carries on.
pub struct RecordStream {
    path_iter: Box<dyn Iterator<Item = Result<PathBuf, ArchiveError>>>,
    filter: ExcludeFilter,
    output: Option<OutputMarker>,
}
impl RecordStream {
    pub fn new(options: &ArchiveOptions) -> Result<Self, ArchiveError> {
        check_root(&options.root)?;
        Self::with_checked_root(options)
    }
    fn with_checked_root(options: &ArchiveOptions) -> Result<Self, ArchiveError> {
        let filter = ExcludeFilter::new()?;
        let output = if options.exclude_output {
            OutputMarker::locate(&options.output)
        } else {
            None
        };
        let path_iter = Box::new(Walker::new(options).into_iter());
        Ok(Self {
            path_iter,
            filter,
            output,
        })
    }
    fn skips(&self, path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        if self.filter.is_excluded(name) {
            #[cfg(feature = "logging")]
            tracing::debug!("Excluded by name: {}", path.display());
            return true;
        }
        self.output.as_ref().is_some_and(|marker| marker.matches(path))
    }
}
impl Iterator for RecordStream {
    type Item = Result<Record, ArchiveError>;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let path = match self.path_iter.next()? {
                Ok(p) => p,
                Err(e) => return Some(Err(e)),
            };
            if self.skips(&path) {
                continue;
            }
            return Some(Ok(read_record(path)));
        }
    }
}
/// Runs the archive procedure, writing records to `out` as they are read.
///
/// Directory listing failures below the root are logged and counted in
/// [`ArchiveSummary::walk_errors`]. Only a bad root or a failed write to
/// `out` aborts the run.
pub fn archive_to_writer<W: Write + ?Sized>(
    options: &ArchiveOptions,
    out: &mut W,
) -> Result<ArchiveSummary, ArchiveError> {
    check_root(&options.root)?;
    write_records(options, out)
}
fn write_records<W: Write + ?Sized>(
    options: &ArchiveOptions,
    out: &mut W,
) -> Result<ArchiveSummary, ArchiveError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Starting archive with root: {}", options.root.display());
    let mut summary = ArchiveSummary {
        output: options.output.clone(),
        ..Default::default()
    };
    for item in RecordStream::with_checked_root(options)? {
        let record = match item {
            Ok(record) => record,
            Err(_e) => {
                #[cfg(feature = "logging")]
                tracing::warn!("{}", _e);
                summary.walk_errors += 1;
                continue;
            }
        };
        summary.bytes_written +=
            write_record(out, &record).map_err(|e| ArchiveError::io(&options.output, e))?;
        summary.records += 1;
        match record.body {
            RecordBody::Unreadable(_) => summary.errors += 1,
            RecordBody::Text { lossy: true, .. } => summary.lossy += 1,
            RecordBody::Text { .. } => {}
        }
    }
    Ok(summary)
}
/// Creates (or truncates) [`ArchiveOptions::output`] and archives the root
/// into it.
///
/// The root is validated before the output file is touched. The file is
/// flushed and closed before returning; on a write failure it is closed with
/// whatever was written so far.
pub fn archive(options: ArchiveOptions) -> Result<ArchiveSummary, ArchiveError> {
    check_root(&options.root)?;
    let file = File::create(&options.output).map_err(|e| ArchiveError::io(&options.output, e))?;
    let mut writer = BufWriter::new(file);
    let summary = write_records(&options, &mut writer)?;
    writer
        .into_inner()
        .map_err(|e| ArchiveError::io(&options.output, e.into_error()))?;
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Archived {} files ({} unreadable) into {}",
        summary.records,
        summary.errors,
        summary.output.display()
    );
    Ok(summary)
}
