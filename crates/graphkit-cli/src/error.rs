/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `graphkit` binary. Every
/// variant maps to a stable exit code (1 or 2) via [`CliError::exit_code`]:
///
/// - Exit code **2** — input failure: the tool could not read or parse the
///   input at all. These errors terminate early before any algorithm runs.
/// - Exit code **1** — logical failure: the tool ran to completion but the
///   result is a well-defined failure (unknown vertex, no path, cycle).
use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `graphkit` CLI can produce.
///
/// Use [`CliError::exit_code`] to obtain the exit code associated with each
/// variant. [`CliError::message`] returns the human-readable error string
/// that should be printed to stderr before exiting.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the configured `--max-file-size` limit.
    FileTooLarge {
        /// A human-readable label for the source (`"-"` for stdin, or the
        /// filesystem path).
        source: String,
        /// The configured size limit in bytes.
        limit: u64,
        /// The actual size in bytes, if known (disk files only; `None` for
        /// stdin where the exact size is unknown).
        actual: Option<u64>,
    },

    /// The input bytes are not valid UTF-8.
    InvalidUtf8 {
        /// A human-readable label for the source.
        source: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// An I/O error occurred while reading from stdin.
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// A generic I/O error not covered by the more specific variants above.
    IoError {
        /// A human-readable label for the source.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// The input read fine but is not a valid graph document.
    ParseFailed {
        /// The underlying parse error message.
        detail: String,
    },

    // --- Exit code 1: logical failures ---
    /// A vertex named on the command line is not in the graph.
    VertexNotFound {
        /// The missing vertex name.
        vertex: String,
    },

    /// The `--to` target exists but is unreachable from the start vertex.
    NoPath {
        /// The start vertex.
        from: String,
        /// The unreachable target vertex.
        to: String,
    },

    /// A topological sort was requested on a cyclic graph.
    CycleDetected,
}

impl CliError {
    /// Returns the process exit code for this error.
    ///
    /// - `2` — input failure (file not found, parse error, etc.).
    /// - `1` — logical failure (unknown vertex, no path, cycle).
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::ParseFailed { .. } => 2,

            Self::VertexNotFound { .. } | Self::NoPath { .. } | Self::CycleDetected => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: Some(actual),
            } => {
                format!("error: file too large: {source} is {actual} bytes, limit is {limit} bytes")
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: None,
            } => {
                format!("error: file too large: {source} exceeded limit of {limit} bytes")
            }
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!(
                    "error: invalid UTF-8 in {source}: first invalid byte at offset {byte_offset}"
                )
            }
            Self::StdinReadError { detail } => {
                format!("error: failed to read stdin: {detail}")
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error reading {source}: {detail}")
            }
            Self::ParseFailed { detail } => {
                format!("error: {detail}")
            }
            Self::VertexNotFound { vertex } => {
                format!("error: vertex not found in graph: {vertex}")
            }
            Self::NoPath { from, to } => {
                format!("error: no path from {from} to {to}")
            }
            Self::CycleDetected => {
                "error: graph contains a cycle, no topological order exists".to_owned()
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use std::path::PathBuf;

    use super::*;

    // ── exit_code ────────────────────────────────────────────────────────────

    #[test]
    fn file_not_found_is_exit_2() {
        let e = CliError::FileNotFound {
            path: PathBuf::from("graph.json"),
        };
        assert_eq!(e.exit_code(), 2);
    }

    #[test]
    fn permission_denied_is_exit_2() {
        let e = CliError::PermissionDenied {
            path: PathBuf::from("/root/secret.json"),
        };
        assert_eq!(e.exit_code(), 2);
    }

    #[test]
    fn file_too_large_is_exit_2() {
        let e = CliError::FileTooLarge {
            source: "big.json".to_owned(),
            limit: 1024,
            actual: Some(2048),
        };
        assert_eq!(e.exit_code(), 2);
    }

    #[test]
    fn parse_failed_is_exit_2() {
        let e = CliError::ParseFailed {
            detail: "invalid graph document: expected `,`".to_owned(),
        };
        assert_eq!(e.exit_code(), 2);
    }

    #[test]
    fn vertex_not_found_is_exit_1() {
        let e = CliError::VertexNotFound {
            vertex: "z".to_owned(),
        };
        assert_eq!(e.exit_code(), 1);
    }

    #[test]
    fn no_path_is_exit_1() {
        let e = CliError::NoPath {
            from: "a".to_owned(),
            to: "island".to_owned(),
        };
        assert_eq!(e.exit_code(), 1);
    }

    #[test]
    fn cycle_detected_is_exit_1() {
        assert_eq!(CliError::CycleDetected.exit_code(), 1);
    }

    // ── message content ──────────────────────────────────────────────────────

    #[test]
    fn file_not_found_message_contains_path() {
        let e = CliError::FileNotFound {
            path: PathBuf::from("routes.json"),
        };
        let msg = e.message();
        assert!(msg.contains("routes.json"), "message: {msg}");
        assert!(msg.contains("not found"), "message: {msg}");
    }

    #[test]
    fn file_too_large_with_actual_mentions_sizes() {
        let e = CliError::FileTooLarge {
            source: "big.json".to_owned(),
            limit: 1_000_000,
            actual: Some(2_000_000),
        };
        let msg = e.message();
        assert!(msg.contains("2000000"), "message: {msg}");
        assert!(msg.contains("1000000"), "message: {msg}");
    }

    #[test]
    fn invalid_utf8_message_contains_offset() {
        let e = CliError::InvalidUtf8 {
            source: "corrupt.json".to_owned(),
            byte_offset: 99,
        };
        let msg = e.message();
        assert!(msg.contains("99"), "message: {msg}");
        assert!(msg.contains("corrupt.json"), "message: {msg}");
    }

    #[test]
    fn vertex_not_found_message_names_the_vertex() {
        let e = CliError::VertexNotFound {
            vertex: "warehouse-7".to_owned(),
        };
        assert!(e.message().contains("warehouse-7"));
    }

    #[test]
    fn no_path_message_names_both_endpoints() {
        let e = CliError::NoPath {
            from: "a".to_owned(),
            to: "b".to_owned(),
        };
        let msg = e.message();
        assert!(msg.contains('a') && msg.contains('b'), "message: {msg}");
    }

    #[test]
    fn display_matches_message() {
        let e = CliError::CycleDetected;
        assert_eq!(format!("{e}"), e.message());
    }

    #[test]
    fn error_trait_is_implemented() {
        let e: Box<dyn std::error::Error> = Box::new(CliError::CycleDetected);
        assert!(!e.to_string().is_empty());
    }
}
