//! Implementation of `graphkit inspect <file>`.
//!
//! Parses a graph document and prints summary statistics to stdout:
//! - vertex and edge counts
//! - whether the document is directed
//! - connected component count (and sizes)
//! - bipartiteness
//! - for directed documents, whether the graph is acyclic
//!
//! In `--format json` mode a single JSON object is emitted; in human mode,
//! aligned key/value lines.
//!
//! Exit codes: 0 = success, 2 = read/parse failure.
use graphkit_core::{GraphFile, connected_components, has_cycle, is_bipartite};

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Statistics gathered from a parsed graph document.
pub struct InspectStats {
    /// Number of vertices in the built graph.
    pub vertex_count: usize,
    /// Number of edge entries in the document.
    pub edge_count: usize,
    /// Whether the document declared itself directed.
    pub directed: bool,
    /// Size of each connected component, largest first.
    pub component_sizes: Vec<usize>,
    /// Whether the graph is two-colorable.
    pub bipartite: bool,
    /// For directed documents, whether the graph has no cycle. `None` for
    /// undirected documents, where the question is vacuous.
    pub acyclic: Option<bool>,
}

impl InspectStats {
    /// Computes statistics from a parsed document.
    pub fn from_document(doc: &GraphFile) -> Self {
        let graph = doc.build();

        let mut component_sizes: Vec<usize> = connected_components(&graph)
            .iter()
            .map(Vec::len)
            .collect();
        component_sizes.sort_unstable_by(|a, b| b.cmp(a));

        Self {
            vertex_count: graph.vertex_count(),
            edge_count: doc.edges.len(),
            directed: doc.directed,
            component_sizes,
            bipartite: is_bipartite(&graph),
            acyclic: doc.directed.then(|| !has_cycle(&graph)),
        }
    }
}

/// Runs the `inspect` command.
///
/// # Errors
///
/// [`CliError::ParseFailed`] (exit 2) for malformed input.
pub fn run(content: &str, format: &OutputFormat) -> Result<(), CliError> {
    let doc = super::parse_document(content)?;
    let stats = InspectStats::from_document(&doc);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => print_human(&mut out, &stats),
        OutputFormat::Json => print_json(&mut out, &stats),
    }
    .map_err(|e| super::stdout_error(&e))
}

/// Writes statistics in human-readable aligned format.
fn print_human<W: std::io::Write>(w: &mut W, stats: &InspectStats) -> std::io::Result<()> {
    writeln!(w, "vertices:    {}", stats.vertex_count)?;
    writeln!(w, "edges:       {}", stats.edge_count)?;
    writeln!(
        w,
        "directed:    {}",
        if stats.directed { "yes" } else { "no" }
    )?;
    writeln!(w, "components:  {}", stats.component_sizes.len())?;
    for (index, size) in stats.component_sizes.iter().enumerate() {
        writeln!(w, "  component {index}: {size} vertices")?;
    }
    writeln!(
        w,
        "bipartite:   {}",
        if stats.bipartite { "yes" } else { "no" }
    )?;
    if let Some(acyclic) = stats.acyclic {
        writeln!(w, "acyclic:     {}", if acyclic { "yes" } else { "no" })?;
    }
    Ok(())
}

/// Writes statistics as a single JSON object.
fn print_json<W: std::io::Write>(w: &mut W, stats: &InspectStats) -> std::io::Result<()> {
    let mut obj = serde_json::Map::new();
    obj.insert("vertex_count".to_owned(), stats.vertex_count.into());
    obj.insert("edge_count".to_owned(), stats.edge_count.into());
    obj.insert("directed".to_owned(), stats.directed.into());
    obj.insert(
        "component_count".to_owned(),
        stats.component_sizes.len().into(),
    );
    obj.insert(
        "component_sizes".to_owned(),
        serde_json::json!(stats.component_sizes),
    );
    obj.insert("bipartite".to_owned(), stats.bipartite.into());
    if let Some(acyclic) = stats.acyclic {
        obj.insert("acyclic".to_owned(), acyclic.into());
    }

    let json = serde_json::to_string_pretty(&serde_json::Value::Object(obj))
        .map_err(std::io::Error::other)?;
    writeln!(w, "{json}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    fn doc(json: &str) -> GraphFile {
        graphkit_core::parse_graph(json).expect("valid fixture")
    }

    #[test]
    fn stats_for_two_component_graph() {
        let stats = InspectStats::from_document(&doc(
            r#"{
                "vertices": ["lone"],
                "edges": [
                    { "from": "a", "to": "b" },
                    { "from": "b", "to": "c" }
                ]
            }"#,
        ));
        assert_eq!(stats.vertex_count, 4);
        assert_eq!(stats.edge_count, 2);
        assert!(!stats.directed);
        assert_eq!(stats.component_sizes, [3, 1]);
        assert!(stats.bipartite);
        assert_eq!(stats.acyclic, None);
    }

    #[test]
    fn directed_dag_reports_acyclic() {
        let stats = InspectStats::from_document(&doc(
            r#"{
                "directed": true,
                "edges": [
                    { "from": "a", "to": "b" },
                    { "from": "b", "to": "c" }
                ]
            }"#,
        ));
        assert_eq!(stats.acyclic, Some(true));
    }

    #[test]
    fn directed_cycle_reports_cyclic_and_odd_cycle_breaks_bipartite() {
        let stats = InspectStats::from_document(&doc(
            r#"{
                "directed": true,
                "edges": [
                    { "from": "a", "to": "b" },
                    { "from": "b", "to": "c" },
                    { "from": "c", "to": "a" }
                ]
            }"#,
        ));
        assert_eq!(stats.acyclic, Some(false));
        assert_eq!(stats.component_sizes, [3]);
    }
}
