//! Minimum spanning tree via Kruskal's algorithm.
//!
//! Edges are sorted ascending by weight with a stable sort, so ties keep
//! their adjacency-list order. Each edge is admitted only if uniting its
//! endpoints actually merges two sets — the union-find rejection is the
//! cycle guard. Because [`Graph::edges`] lists each undirected edge twice,
//! the reverse copy always lands in an already-merged set and is skipped
//! without special handling.
//!
//! On a connected graph the result has `|V| - 1` edges; on a disconnected
//! one it is a minimum spanning forest with fewer.
use std::hash::Hash;

use crate::graph::{Edge, Graph};
use crate::union_find::DisjointSets;

/// Computes a minimum spanning tree (or forest) of `graph`.
///
/// Intended for graphs built with undirected edges; directed entries are
/// treated as undirected candidates.
pub fn kruskal<V: Eq + Hash + Clone>(graph: &Graph<V>) -> Vec<Edge<V>> {
    let mut edges = graph.edges();
    edges.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let mut sets: DisjointSets<V> = DisjointSets::new();
    for vertex in graph.vertices() {
        sets.insert(vertex.clone());
    }

    let mut tree = Vec::new();
    for edge in edges {
        if sets.union(&edge.from, &edge.to) {
            tree.push(edge);
        }
    }
    tree
}

/// Sums the weights of an edge set, e.g. a [`kruskal`] result.
pub fn total_weight<V>(edges: &[Edge<V>]) -> f64 {
    edges.iter().map(|e| e.weight).sum()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    fn sample_graph() -> Graph<u32> {
        let mut g = Graph::new();
        g.add_edge(0, 1, 4.0);
        g.add_edge(0, 2, 3.0);
        g.add_edge(1, 2, 1.0);
        g.add_edge(1, 3, 2.0);
        g.add_edge(2, 3, 4.0);
        g.add_edge(3, 4, 2.0);
        g.add_edge(2, 4, 3.0);
        g
    }

    #[test]
    fn connected_graph_yields_vertex_count_minus_one_edges() {
        let g = sample_graph();
        let tree = kruskal(&g);
        assert_eq!(tree.len(), g.vertex_count() - 1);
    }

    #[test]
    fn sample_graph_minimum_total_weight() {
        // Optimal: (1,2,1) + (1,3,2) + (3,4,2) + (0,2,3) = 8.
        let tree = kruskal(&sample_graph());
        assert_eq!(total_weight(&tree), 8.0);
    }

    #[test]
    fn tree_is_acyclic_and_spans_all_vertices() {
        let g = sample_graph();
        let tree = kruskal(&g);

        let mut sets = DisjointSets::new();
        for edge in &tree {
            assert!(
                sets.union(&edge.from, &edge.to),
                "tree edge ({}, {}) closed a cycle",
                edge.from,
                edge.to
            );
        }
        for vertex in g.vertices() {
            assert!(
                sets.same_set(&0, vertex),
                "vertex {vertex} not connected to the tree"
            );
        }
    }

    #[test]
    fn disconnected_graph_yields_spanning_forest() {
        let mut g = Graph::new();
        g.add_edge("a", "b", 1.0);
        g.add_edge("b", "c", 2.0);
        g.add_edge("x", "y", 5.0);

        let forest = kruskal(&g);
        // Two components with 3 and 2 vertices: 2 + 1 edges.
        assert_eq!(forest.len(), 3);
        assert_eq!(total_weight(&forest), 8.0);
    }

    #[test]
    fn heavier_parallel_edge_is_rejected() {
        let mut g = Graph::new();
        g.add_edge("a", "b", 5.0);
        g.add_edge("a", "b", 1.0);

        let tree = kruskal(&g);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].weight, 1.0);
    }

    #[test]
    fn empty_and_single_vertex_graphs_have_empty_trees() {
        let empty: Graph<u32> = Graph::new();
        assert!(kruskal(&empty).is_empty());

        let mut single = Graph::new();
        single.add_vertex("only");
        assert!(kruskal(&single).is_empty());
        assert_eq!(total_weight(&kruskal(&single)), 0.0);
    }
}
