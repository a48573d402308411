//! Implementation of `graphkit distances <file> <start> [--to <vertex>]`.
//!
//! Runs Dijkstra from the start vertex. Without `--to`, prints every
//! vertex's distance in document order, marking unreachable vertices.
//! With `--to`, prints just that vertex's distance and the reconstructed
//! path, failing with exit 1 when the target is unreachable.
//!
//! Exit codes: 0 = success, 1 = unknown vertex or unreachable `--to`
//! target, 2 = read/parse failure.
use graphkit_core::{Graph, ShortestPaths, dijkstra};

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Runs the `distances` command.
///
/// # Errors
///
/// [`CliError::ParseFailed`] (exit 2) for malformed input;
/// [`CliError::VertexNotFound`] (exit 1) when `start` or the `--to` target
/// is not in the graph; [`CliError::NoPath`] (exit 1) when the target
/// exists but is unreachable.
pub fn run(
    content: &str,
    start: &str,
    to: Option<&str>,
    format: &OutputFormat,
) -> Result<(), CliError> {
    let graph = super::parse_document(content)?.build();

    let start = start.to_owned();
    if !graph.contains_vertex(&start) {
        return Err(CliError::VertexNotFound { vertex: start });
    }

    let paths = dijkstra(&graph, &start);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match to {
        Some(target) => run_single(&mut out, &paths, &start, target, format),
        None => run_all(&mut out, &graph, &paths, &start, format),
    }
}

/// Reports the distance and path to one target vertex.
fn run_single<W: std::io::Write>(
    w: &mut W,
    paths: &ShortestPaths<String>,
    start: &str,
    target: &str,
    format: &OutputFormat,
) -> Result<(), CliError> {
    let target = target.to_owned();
    let distance = paths
        .distance(&target)
        .ok_or_else(|| CliError::VertexNotFound {
            vertex: target.clone(),
        })?;
    let path = paths.path_to(&target).ok_or_else(|| CliError::NoPath {
        from: start.to_owned(),
        to: target.clone(),
    })?;

    match format {
        OutputFormat::Human => writeln!(w, "{}  distance {}", path.join(" -> "), distance),
        OutputFormat::Json => {
            let obj = serde_json::json!({
                "start": start,
                "target": target,
                "distance": distance,
                "path": path,
            });
            serde_json::to_string_pretty(&obj)
                .map_err(std::io::Error::other)
                .and_then(|json| writeln!(w, "{json}"))
        }
    }
    .map_err(|e| super::stdout_error(&e))
}

/// Reports every vertex's distance, in document order.
fn run_all<W: std::io::Write>(
    w: &mut W,
    graph: &Graph<String>,
    paths: &ShortestPaths<String>,
    start: &str,
    format: &OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Human => {
            let width = graph
                .vertices()
                .iter()
                .map(String::len)
                .max()
                .unwrap_or(0);
            graph.vertices().iter().try_for_each(|vertex| {
                match paths.distance(vertex) {
                    Some(d) if d.is_finite() => writeln!(w, "{vertex:<width$}  {d}"),
                    Some(_) | None => writeln!(w, "{vertex:<width$}  unreachable"),
                }
            })
        }
        OutputFormat::Json => {
            let mut obj = serde_json::Map::new();
            for vertex in graph.vertices() {
                let value = match paths.distance(vertex) {
                    Some(d) if d.is_finite() => serde_json::json!(d),
                    Some(_) | None => serde_json::Value::Null,
                };
                obj.insert(vertex.clone(), value);
            }
            let root = serde_json::json!({
                "start": start,
                "distances": obj,
            });
            serde_json::to_string_pretty(&root)
                .map_err(std::io::Error::other)
                .and_then(|json| writeln!(w, "{json}"))
        }
    }
    .map_err(|e| super::stdout_error(&e))
}
