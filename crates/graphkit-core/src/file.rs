//! On-disk graph documents.
//!
//! [`GraphFile`] is the JSON representation consumed by the CLI and by any
//! caller that loads graphs from files. The format is a flat object:
//!
//! ```json
//! {
//!   "directed": false,
//!   "vertices": ["a", "b"],
//!   "edges": [{ "from": "a", "to": "b", "weight": 2.5 }]
//! }
//! ```
//!
//! `directed` and `vertices` may be omitted; edge endpoints are added as
//! vertices implicitly, so `vertices` only needs to list isolated ones.
//! `weight` defaults to 1.0 for unweighted inputs.
use serde::{Deserialize, Serialize};

use crate::graph::Graph;

/// A parsed graph document.
///
/// Deserialise with [`parse_graph`] (or [`serde_json::from_str`] directly);
/// convert to a live [`Graph`] with [`GraphFile::build`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphFile {
    /// When `true`, each edge entry adds a single directed edge; otherwise
    /// both directions are added.
    #[serde(default)]
    pub directed: bool,

    /// Vertices to register before any edges, in order. Endpoints named in
    /// `edges` need not be repeated here.
    #[serde(default)]
    pub vertices: Vec<String>,

    /// Edge list, applied in order after `vertices`.
    pub edges: Vec<EdgeSpec>,
}

/// One edge entry of a [`GraphFile`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    /// Edge weight; 1.0 when omitted.
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

impl GraphFile {
    /// Materialises the document into a [`Graph`], honouring `directed`.
    ///
    /// Vertex insertion order is the document order: explicit `vertices`
    /// first, then edge endpoints as they first appear. Algorithm output
    /// that depends on insertion order is therefore stable for a given
    /// document.
    pub fn build(&self) -> Graph<String> {
        let mut graph = Graph::new();
        for vertex in &self.vertices {
            graph.add_vertex(vertex.clone());
        }
        for edge in &self.edges {
            if self.directed {
                graph.add_directed_edge(edge.from.clone(), edge.to.clone(), edge.weight);
            } else {
                graph.add_edge(edge.from.clone(), edge.to.clone(), edge.weight);
            }
        }
        graph
    }
}

/// Error returned by [`parse_graph`] for malformed documents.
#[derive(Debug)]
pub struct ParseError(serde_json::Error);

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid graph document: {}", self.0)
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

/// Parses a JSON graph document.
///
/// # Errors
///
/// [`ParseError`] when the input is not valid JSON or does not match the
/// [`GraphFile`] shape.
pub fn parse_graph(input: &str) -> Result<GraphFile, ParseError> {
    serde_json::from_str(input).map_err(ParseError)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
