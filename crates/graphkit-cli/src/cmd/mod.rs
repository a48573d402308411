/// Command modules for the `graphkit` CLI.
///
/// Each submodule implements one subcommand. The `run` function in each
/// module takes the input content plus parsed arguments, writes its output
/// to stdout, and returns `Ok(())` on success or a
/// [`crate::error::CliError`] on failure.
use graphkit_core::GraphFile;

use crate::error::CliError;

pub mod distances;
pub mod inspect;
pub mod mst;
pub mod toposort;
pub mod traverse;

/// Parses `content` as a graph document, mapping parse failures to the
/// exit-code-2 [`CliError::ParseFailed`] variant.
pub(crate) fn parse_document(content: &str) -> Result<GraphFile, CliError> {
    graphkit_core::parse_graph(content).map_err(|e| CliError::ParseFailed {
        detail: e.to_string(),
    })
}

/// Wraps a stdout write failure in the generic I/O error variant.
pub(crate) fn stdout_error(e: &std::io::Error) -> CliError {
    CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    }
}
