//! Implementation of `graphkit traverse <file> <start>`.
//!
//! Parses a graph document and prints the visitation order of a breadth- or
//! depth-first walk from the start vertex.
//!
//! In human mode the order is a single `a -> b -> c` line; in `--format
//! json` mode a single object with the start vertex and the ordered list.
//!
//! Exit codes: 0 = success, 1 = unknown start vertex, 2 = read/parse failure.
use graphkit_core::{bfs, dfs_iterative, dfs_recursive};

use crate::cli::{OutputFormat, TraversalOrder};
use crate::error::CliError;

/// Runs the `traverse` command.
///
/// # Errors
///
/// [`CliError::ParseFailed`] (exit 2) for malformed input;
/// [`CliError::VertexNotFound`] (exit 1) when `start` is not in the graph.
pub fn run(
    content: &str,
    start: &str,
    order: TraversalOrder,
    format: &OutputFormat,
) -> Result<(), CliError> {
    let graph = super::parse_document(content)?.build();

    let start = start.to_owned();
    if !graph.contains_vertex(&start) {
        return Err(CliError::VertexNotFound { vertex: start });
    }

    let visited = match order {
        TraversalOrder::Bfs => bfs(&graph, &start),
        TraversalOrder::Dfs => dfs_recursive(&graph, &start),
        TraversalOrder::DfsIter => dfs_iterative(&graph, &start),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => print_human(&mut out, &visited),
        OutputFormat::Json => print_json(&mut out, &start, &visited),
    }
    .map_err(|e| super::stdout_error(&e))
}

/// Writes the order as a single `a -> b -> c` line.
fn print_human<W: std::io::Write>(w: &mut W, visited: &[String]) -> std::io::Result<()> {
    writeln!(w, "{}", visited.join(" -> "))
}

/// Writes a single JSON object with the start vertex and the order.
fn print_json<W: std::io::Write>(
    w: &mut W,
    start: &str,
    visited: &[String],
) -> std::io::Result<()> {
    let obj = serde_json::json!({
        "start": start,
        "visited": visited.len(),
        "order": visited,
    });
    let json = serde_json::to_string_pretty(&obj).map_err(std::io::Error::other)?;
    writeln!(w, "{json}")
}
