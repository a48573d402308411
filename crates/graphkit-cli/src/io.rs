//! Input reading for the `graphkit` binary.
//!
//! `graphkit-core` is filesystem-free; every byte a subcommand consumes
//! comes through [`read_input`]. Disk files are size-checked via metadata
//! before any allocation, stdin is read through a `Read::take` cap, and
//! both paths finish with UTF-8 validation that reports the byte offset
//! of the first bad sequence. Every failure maps to a [`CliError`] with
//! exit code 2.
use std::io::Read as _;
use std::path::{Path, PathBuf};

use crate::PathOrStdin;
use crate::error::CliError;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Reads the entire contents of `source` into a `String`.
///
/// # Errors
///
/// Returns [`CliError`] (exit code 2) when the file is missing or
/// unreadable, when either source exceeds `max_size` bytes, or when the
/// content is not valid UTF-8.
pub fn read_input(source: &PathOrStdin, max_size: u64) -> Result<String, CliError> {
    match source {
        PathOrStdin::Path(path) => read_file(path, max_size),
        PathOrStdin::Stdin => read_stdin(max_size),
    }
}

// ---------------------------------------------------------------------------
// Disk file reading
// ---------------------------------------------------------------------------

fn read_file(path: &PathBuf, max_size: u64) -> Result<String, CliError> {
    // The length comes from metadata, so nothing is allocated for a file
    // that is already over the limit.
    let file_size = match std::fs::metadata(path) {
        Ok(meta) => meta.len(),
        Err(e) => {
            return Err(io_error_to_cli(&e, path));
        }
    };

    if file_size > max_size {
        return Err(CliError::FileTooLarge {
            source: path.display().to_string(),
            limit: max_size,
            actual: Some(file_size),
        });
    }

    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            return Err(io_error_to_cli(&e, path));
        }
    };

    bytes_to_string(&bytes, &path.display().to_string())
}

/// Maps a `std::io::Error` from a disk-file operation to a [`CliError`].
fn io_error_to_cli(e: &std::io::Error, path: &Path) -> CliError {
    match e.kind() {
        std::io::ErrorKind::NotFound => CliError::FileNotFound {
            path: path.to_path_buf(),
        },
        std::io::ErrorKind::PermissionDenied => CliError::PermissionDenied {
            path: path.to_path_buf(),
        },
        // Only the two kinds above get dedicated variants; the named arms
        // here exist so the wildcard stays lint-clean while everything
        // else falls through to IoError.
        std::io::ErrorKind::IsADirectory
        | std::io::ErrorKind::NotADirectory
        | std::io::ErrorKind::InvalidInput
        | std::io::ErrorKind::InvalidData
        | std::io::ErrorKind::TimedOut
        | std::io::ErrorKind::Interrupted
        | std::io::ErrorKind::UnexpectedEof
        | std::io::ErrorKind::OutOfMemory
        | std::io::ErrorKind::Other
        | _ => CliError::IoError {
            source: path.display().to_string(),
            detail: e.to_string(),
        },
    }
}

// ---------------------------------------------------------------------------
// Stdin reading
// ---------------------------------------------------------------------------

/// Reads the entire stdin stream, capped at `max_size` bytes.
///
/// A stream that yields exactly `max_size` bytes is ambiguous: it may be
/// exactly at the limit or just truncated by the cap. One extra byte read
/// settles it.
fn read_stdin(max_size: u64) -> Result<String, CliError> {
    let stdin = std::io::stdin();
    let handle = stdin.lock();

    let mut limited = handle.take(max_size);
    let mut buf: Vec<u8> = Vec::new();

    limited
        .read_to_end(&mut buf)
        .map_err(|e| CliError::StdinReadError {
            detail: e.to_string(),
        })?;

    if buf.len() as u64 == max_size {
        let stdin2 = std::io::stdin();
        let mut handle2 = stdin2.lock();
        let mut overflow = [0u8; 1];
        let extra = handle2
            .read(&mut overflow)
            .map_err(|e| CliError::StdinReadError {
                detail: e.to_string(),
            })?;
        if extra > 0 {
            return Err(CliError::FileTooLarge {
                source: "-".to_owned(),
                limit: max_size,
                actual: None,
            });
        }
    }

    bytes_to_string(&buf, "-")
}

// ---------------------------------------------------------------------------
// UTF-8 conversion
// ---------------------------------------------------------------------------

/// Converts a byte buffer to a `String`, reporting the byte offset of the
/// first invalid sequence on failure.
fn bytes_to_string(bytes: &[u8], source_label: &str) -> Result<String, CliError> {
    match std::str::from_utf8(bytes) {
        Ok(s) => Ok(s.to_owned()),
        Err(e) => Err(CliError::InvalidUtf8 {
            source: source_label.to_owned(),
            byte_offset: e.valid_up_to(),
        }),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]
    #![allow(clippy::wildcard_enum_match_arm)]

    use std::io::Write as _;

    use super::*;
    use crate::PathOrStdin;

    const SMALL_DOC: &str =
        r#"{"edges":[{"from":"a","to":"b","weight":2},{"from":"b","to":"c"}]}"#;

    /// Creates a named temporary file with the given contents.
    fn temp_file_with(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().expect("create temp file");
        f.write_all(contents).expect("write temp file");
        f
    }

    #[test]
    fn read_graph_document_from_disk() {
        let f = temp_file_with(SMALL_DOC.as_bytes());
        let source = PathOrStdin::Path(f.path().to_path_buf());
        let result = read_input(&source, 1024).expect("should read file");
        assert_eq!(result, SMALL_DOC);
    }

    #[test]
    fn read_empty_file() {
        let f = temp_file_with(b"");
        let source = PathOrStdin::Path(f.path().to_path_buf());
        let result = read_input(&source, 1024).expect("should read empty file");
        assert_eq!(result, "");
    }

    #[test]
    fn multibyte_vertex_names_pass_validation() {
        let doc = r#"{"edges":[{"from":"köln","to":"zürich"}]}"#;
        let f = temp_file_with(doc.as_bytes());
        let source = PathOrStdin::Path(f.path().to_path_buf());
        let result = read_input(&source, 1024).expect("umlauts are valid UTF-8");
        assert_eq!(result, doc);
    }

    #[test]
    fn read_file_exactly_at_limit_succeeds() {
        let f = temp_file_with(SMALL_DOC.as_bytes());
        let source = PathOrStdin::Path(f.path().to_path_buf());
        let limit = SMALL_DOC.len() as u64;
        let result = read_input(&source, limit).expect("should succeed at limit");
        assert_eq!(result, SMALL_DOC);
    }

    #[test]
    fn read_file_over_limit_returns_error() {
        let f = temp_file_with(SMALL_DOC.as_bytes());
        let source = PathOrStdin::Path(f.path().to_path_buf());
        let limit = SMALL_DOC.len() as u64 - 1;
        let err = read_input(&source, limit).expect_err("should fail over limit");
        assert_eq!(err.exit_code(), 2);
        match err {
            CliError::FileTooLarge {
                actual: Some(n), ..
            } => {
                assert_eq!(n, SMALL_DOC.len() as u64);
            }
            other => panic!("expected FileTooLarge, got {other:?}"),
        }
    }

    #[test]
    fn read_invalid_utf8_returns_error_with_offset() {
        // A valid prefix, then a lone continuation byte.
        let mut data = br#"{"edges":["#.to_vec();
        let valid_len = data.len();
        data.push(0x80);
        let f = temp_file_with(&data);
        let source = PathOrStdin::Path(f.path().to_path_buf());
        let err = read_input(&source, 1024).expect_err("should fail on bad UTF-8");
        assert_eq!(err.exit_code(), 2);
        match err {
            CliError::InvalidUtf8 { byte_offset, .. } => {
                assert_eq!(byte_offset, valid_len);
            }
            other => panic!("expected InvalidUtf8, got {other:?}"),
        }
    }

    #[test]
    fn read_nonexistent_file_returns_file_not_found() {
        let source = PathOrStdin::Path(PathBuf::from("/no/such/file/ever.json"));
        let err = read_input(&source, 1024).expect_err("should fail");
        assert_eq!(err.exit_code(), 2);
        assert!(matches!(err, CliError::FileNotFound { .. }));
    }

    #[test]
    fn reading_a_directory_maps_to_io_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let source = PathOrStdin::Path(dir.path().to_path_buf());
        // Generous limit: a directory's metadata length is filesystem-defined
        // and must not trip the size check before the read fails.
        let err = read_input(&source, 1 << 20).expect_err("directories are not input");
        assert_eq!(err.exit_code(), 2);
        assert!(matches!(err, CliError::IoError { .. }));
    }
}
