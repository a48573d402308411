//! Adjacency-list graph container with vertex/edge CRUD.
//!
//! [`Graph`] maps each vertex to an ordered sequence of weighted neighbor
//! entries. Undirected edges are stored symmetrically (both directions
//! inserted); directed edges store only the forward direction. Edge insertion
//! auto-creates missing endpoint vertices, so every vertex referenced by an
//! adjacency list is also a key — [`Graph::remove_vertex`] preserves the
//! invariant from the other side by purging all entries that reference the
//! removed vertex.
//!
//! Vertex iteration order is insertion order, tracked separately from the
//! backing map so traversals and matrix conversion are deterministic.
use std::collections::HashMap;
use std::hash::Hash;

pub mod components;
pub mod cycles;
pub mod dijkstra;
pub mod mst;
pub mod traversal;

// ---------------------------------------------------------------------------
// Edge records
// ---------------------------------------------------------------------------

/// One entry in a vertex's adjacency list: the neighbor and the edge weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor<V> {
    /// The vertex at the far end of the edge.
    pub vertex: V,
    /// Edge weight. Unweighted callers conventionally pass `1.0`.
    pub weight: f64,
}

/// A flattened `(from, to, weight)` edge triple, as returned by
/// [`Graph::edges`].
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<V> {
    /// Source vertex.
    pub from: V,
    /// Destination vertex.
    pub to: V,
    /// Edge weight.
    pub weight: f64,
}

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// An adjacency-list graph over vertices of type `V`.
///
/// Supports mixed directed/undirected edge insertion. Directionality is not
/// tracked per-edge: an undirected edge is simply a symmetric pair of
/// directed entries, and [`Graph::remove_edge`] removes both directions while
/// [`Graph::remove_directed_edge`] removes only the forward one.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    adjacency: HashMap<V, Vec<Neighbor<V>>>,
    order: Vec<V>,
}

impl<V: Eq + Hash + Clone> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Eq + Hash + Clone> Graph<V> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Adds a vertex with an empty adjacency list. Idempotent.
    pub fn add_vertex(&mut self, vertex: V) {
        if !self.adjacency.contains_key(&vertex) {
            self.order.push(vertex.clone());
            self.adjacency.insert(vertex, Vec::new());
        }
    }

    /// Adds an undirected edge between `u` and `v`, inserting both
    /// directions. Missing endpoint vertices are auto-created.
    pub fn add_edge(&mut self, u: V, v: V, weight: f64) {
        self.add_vertex(u.clone());
        self.add_vertex(v.clone());
        if let Some(list) = self.adjacency.get_mut(&u) {
            list.push(Neighbor {
                vertex: v.clone(),
                weight,
            });
        }
        if let Some(list) = self.adjacency.get_mut(&v) {
            list.push(Neighbor { vertex: u, weight });
        }
    }

    /// Adds a directed edge from `u` to `v`. Missing endpoint vertices are
    /// auto-created.
    pub fn add_directed_edge(&mut self, u: V, v: V, weight: f64) {
        self.add_vertex(u.clone());
        self.add_vertex(v.clone());
        if let Some(list) = self.adjacency.get_mut(&u) {
            list.push(Neighbor { vertex: v, weight });
        }
    }

    /// Removes a vertex and purges every adjacency entry referencing it.
    ///
    /// O(V + E): every other vertex's list is scanned. Removing an unknown
    /// vertex is a no-op.
    pub fn remove_vertex(&mut self, vertex: &V) {
        if self.adjacency.remove(vertex).is_some() {
            for list in self.adjacency.values_mut() {
                list.retain(|n| n.vertex != *vertex);
            }
            self.order.retain(|v| v != vertex);
        }
    }

    /// Removes the edge between `u` and `v` in both directions (undirected
    /// semantics). A direction that does not exist is silently skipped, so
    /// this is also safe on edges that were inserted directed.
    pub fn remove_edge(&mut self, u: &V, v: &V) {
        self.remove_directed_edge(u, v);
        self.remove_directed_edge(v, u);
    }

    /// Removes only the forward entry `u -> v`, leaving any reverse entry in
    /// place. No-op if the entry does not exist.
    pub fn remove_directed_edge(&mut self, u: &V, v: &V) {
        if let Some(list) = self.adjacency.get_mut(u) {
            list.retain(|n| n.vertex != *v);
        }
    }

    /// Returns the adjacency list of `vertex`, or an empty slice for an
    /// unknown vertex (lookups fail soft).
    pub fn neighbors(&self, vertex: &V) -> &[Neighbor<V>] {
        self.adjacency.get(vertex).map_or(&[], Vec::as_slice)
    }

    /// Returns all vertices in insertion order.
    pub fn vertices(&self) -> &[V] {
        &self.order
    }

    /// Returns `true` if `vertex` is present.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Flattens all adjacency entries into `(from, to, weight)` triples, in
    /// vertex insertion order.
    ///
    /// An undirected edge appears twice, once per direction; callers that
    /// need one entry per undirected edge must deduplicate.
    pub fn edges(&self) -> Vec<Edge<V>> {
        let mut out = Vec::new();
        for vertex in &self.order {
            if let Some(list) = self.adjacency.get(vertex) {
                for n in list {
                    out.push(Edge {
                        from: vertex.clone(),
                        to: n.vertex.clone(),
                        weight: n.weight,
                    });
                }
            }
        }
        out
    }

    /// Converts the graph to an adjacency matrix over vertex insertion order.
    ///
    /// `matrix[i][j]` is the weight of the edge from the i-th to the j-th
    /// vertex, or `0.0` when absent. Parallel edges collapse to the last
    /// inserted weight.
    pub fn to_matrix(&self) -> Vec<Vec<f64>> {
        let index: HashMap<&V, usize> = self
            .order
            .iter()
            .enumerate()
            .map(|(i, v)| (v, i))
            .collect();
        let n = self.order.len();
        let mut matrix = vec![vec![0.0; n]; n];
        for (i, vertex) in self.order.iter().enumerate() {
            if let Some(list) = self.adjacency.get(vertex) {
                for neighbor in list {
                    if let Some(&j) = index.get(&neighbor.vertex) {
                        matrix[i][j] = neighbor.weight;
                    }
                }
            }
        }
        matrix
    }
}

impl Graph<usize> {
    /// Builds a graph from an adjacency matrix; every strictly positive cell
    /// `matrix[i][j]` becomes the directed edge `i -> j` with that weight.
    ///
    /// A symmetric matrix therefore yields the same structure as inserting
    /// each undirected edge once.
    pub fn from_matrix(matrix: &[Vec<f64>]) -> Self {
        let mut graph = Self::new();
        for (i, row) in matrix.iter().enumerate() {
            graph.add_vertex(i);
            for (j, &weight) in row.iter().enumerate() {
                if weight > 0.0 {
                    graph.add_directed_edge(i, j, weight);
                }
            }
        }
        graph
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
