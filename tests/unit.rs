use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;
use treedump::{
    archive_to_writer, is_excluded_name,
    output::{format_header, format_read_error, write_record},
    read_record, ArchiveBuilder, ArchiveError, ExcludeFilter, Record, RecordBody, RecordStream,
};
#[test]
fn test_exe_filter_is_case_insensitive() {
    let filter = ExcludeFilter::new().unwrap();
    for name in ["b.exe", "B.EXE", "setup.Exe", ".exe"] {
        assert!(filter.is_excluded(OsStr::new(name)), "{name} should be skipped");
    }
    for name in ["exe", "notes.exe.txt", "a.exel", "exe.txt"] {
        assert!(!filter.is_excluded(OsStr::new(name)), "{name} should be kept");
    }
}
#[test]
fn test_is_excluded_name_matches_filter() {
    assert!(is_excluded_name(OsStr::new("tool.EXE")));
    assert!(is_excluded_name(OsStr::new("b.exe")));
    assert!(!is_excluded_name(OsStr::new("b.exe.bak")));
    assert!(!is_excluded_name(OsStr::new("readme.txt")));
}
#[test]
fn test_pattern_error_reads_as_internal() {
    let err = ArchiveError::Pattern {
        pattern: "*.exe".into(),
        reason: "bad".into(),
    };
    let message = err.to_string();
    assert!(message.starts_with("Internal error"));
    assert!(!message.contains("Walk"));
}
#[test]
fn test_read_record_text() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hello.txt");
    fs::write(&path, "hello world\n").unwrap();
    let record = read_record(&path);
    assert_eq!(record.path, path);
    assert_eq!(
        record.body,
        RecordBody::Text {
            content: "hello world\n".into(),
            lossy: false
        }
    );
}
#[test]
fn test_read_record_replaces_invalid_utf8() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("blob.bin");
    fs::write(&path, [b'o', b'k', 0xff, b'!']).unwrap();
    let record = read_record(&path);
    assert!(!record.is_error());
    assert_eq!(
        record.body,
        RecordBody::Text {
            content: "ok\u{FFFD}!".into(),
            lossy: true
        }
    );
}
#[test]
fn test_read_record_missing_file() {
    let dir = tempdir().unwrap();
    let record = read_record(dir.path().join("gone.txt"));
    assert!(record.is_error());
    match record.body {
        RecordBody::Unreadable(description) => assert!(!description.is_empty()),
        other => panic!("expected unreadable body, got {other:?}"),
    }
}
#[test]
fn test_write_record_text() {
    let record = Record {
        path: PathBuf::from("./a.txt"),
        body: RecordBody::Text {
            content: "hello".into(),
            lossy: false,
        },
    };
    let mut out = Vec::new();
    let written = write_record(&mut out, &record).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "--- ./a.txt\nhello\n\n");
    assert_eq!(written, "--- ./a.txt\nhello\n\n".len() as u64);
}
#[test]
fn test_write_record_error() {
    let record = Record {
        path: PathBuf::from("./locked.txt"),
        body: RecordBody::Unreadable("Permission denied (os error 13)".into()),
    };
    let mut out = Vec::new();
    write_record(&mut out, &record).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "--- ./locked.txt\n[Error reading file: Permission denied (os error 13)]\n\n"
    );
    assert_eq!(format_header(&record), "--- ./locked.txt\n");
    assert_eq!(format_read_error("x"), "[Error reading file: x]");
}
#[test]
fn test_stream_visits_files_before_subdirectories() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/c.txt"), "c").unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();
    fs::write(dir.path().join("z.txt"), "z").unwrap();
    let options = ArchiveBuilder::new(dir.path())
        .output(dir.path().join("out.txt"))
        .sort_by_name(true)
        .build();
    let paths: Vec<PathBuf> = RecordStream::new(&options)
        .unwrap()
        .map(|r| r.unwrap().path)
        .collect();
    assert_eq!(
        paths,
        vec![
            dir.path().join("a.txt"),
            dir.path().join("z.txt"),
            dir.path().join("sub").join("c.txt"),
        ]
    );
}
#[test]
fn test_stream_includes_hidden_and_ignored_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".hidden"), "h").unwrap();
    fs::write(dir.path().join(".gitignore"), "*.log\n").unwrap();
    fs::write(dir.path().join("app.log"), "l").unwrap();
    let options = ArchiveBuilder::new(dir.path())
        .output(dir.path().join("out.txt"))
        .build();
    let records: Vec<Record> = RecordStream::new(&options)
        .unwrap()
        .map(|r| r.unwrap())
        .collect();
    assert_eq!(records.len(), 3);
}
#[test]
fn test_stream_unsorted_visits_files_before_subdirectories() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/c.txt"), "c").unwrap();
    fs::write(dir.path().join("a.txt"), "a").unwrap();
    fs::write(dir.path().join("z.txt"), "z").unwrap();
    let options = ArchiveBuilder::new(dir.path())
        .output(dir.path().join("out.txt"))
        .build();
    let paths: Vec<PathBuf> = RecordStream::new(&options)
        .unwrap()
        .map(|r| r.unwrap().path)
        .collect();
    assert_eq!(paths.len(), 3);
    assert!(paths[..2].contains(&dir.path().join("a.txt")));
    assert!(paths[..2].contains(&dir.path().join("z.txt")));
    assert_eq!(paths[2], dir.path().join("sub").join("c.txt"));
}
#[test]
fn test_archive_to_writer_rejects_missing_root() {
    let dir = tempdir().unwrap();
    let options = ArchiveBuilder::new(dir.path().join("nope"))
        .output(dir.path().join("out.txt"))
        .build();
    let mut out = Vec::new();
    let err = archive_to_writer(&options, &mut out).unwrap_err();
    assert!(matches!(err, ArchiveError::Io { .. }));
    assert!(out.is_empty());
}
