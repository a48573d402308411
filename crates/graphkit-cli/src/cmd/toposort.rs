//! Implementation of `graphkit toposort <file>`.
//!
//! Topologically sorts a directed graph document. A document without
//! `"directed": true` stores every edge as a symmetric pair, which is
//! always cyclic; the command reports the cycle rather than guessing an
//! orientation.
//!
//! Exit codes: 0 = success, 1 = graph is cyclic, 2 = read/parse failure.
use std::io::Write as _;

use graphkit_core::topological_sort;

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Runs the `toposort` command.
///
/// # Errors
///
/// [`CliError::ParseFailed`] (exit 2) for malformed input;
/// [`CliError::CycleDetected`] (exit 1) when no topological order exists.
pub fn run(content: &str, format: &OutputFormat) -> Result<(), CliError> {
    let graph = super::parse_document(content)?.build();
    let order = topological_sort(&graph).map_err(|_| CliError::CycleDetected)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => writeln!(out, "{}", order.join(" -> ")),
        OutputFormat::Json => {
            let obj = serde_json::json!({ "order": order });
            serde_json::to_string_pretty(&obj)
                .map_err(std::io::Error::other)
                .and_then(|json| writeln!(out, "{json}"))
        }
    }
    .map_err(|e| super::stdout_error(&e))
}
