//! Implementation of `graphkit mst <file>`.
//!
//! Runs Kruskal's algorithm and prints the chosen edges plus the total
//! weight. On a disconnected graph the output is a minimum spanning
//! forest; that is reported, not an error.
//!
//! Exit codes: 0 = success, 2 = read/parse failure.
use std::io::Write as _;

use graphkit_core::{kruskal, total_weight};

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Runs the `mst` command.
///
/// # Errors
///
/// [`CliError::ParseFailed`] (exit 2) for malformed input.
pub fn run(content: &str, format: &OutputFormat) -> Result<(), CliError> {
    let graph = super::parse_document(content)?.build();
    let tree = kruskal(&graph);
    let total = total_weight(&tree);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => {
            tree.iter()
                .try_for_each(|edge| {
                    writeln!(out, "{} -- {}  {}", edge.from, edge.to, edge.weight)
                })
                .and_then(|()| writeln!(out, "total: {total}"))
        }
        OutputFormat::Json => {
            let edges: Vec<serde_json::Value> = tree
                .iter()
                .map(|edge| {
                    serde_json::json!({
                        "from": edge.from,
                        "to": edge.to,
                        "weight": edge.weight,
                    })
                })
                .collect();
            let obj = serde_json::json!({
                "edges": edges,
                "edge_count": tree.len(),
                "total_weight": total,
            });
            serde_json::to_string_pretty(&obj)
                .map_err(std::io::Error::other)
                .and_then(|json| writeln!(out, "{json}"))
        }
    }
    .map_err(|e| super::stdout_error(&e))
}
