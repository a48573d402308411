//! Topological ordering and cycle detection for directed graphs.
//!
//! Both entry points run the same three-state depth-first search: a vertex
//! is unvisited, in progress (on the current DFS path), or done. Meeting an
//! in-progress vertex again is a back edge and therefore a cycle.
//!
//! [`topological_sort`] collects postorder finish times and reverses them,
//! which is a valid linearization exactly when the graph is a DAG; a cycle
//! surfaces as [`CycleDetected`] rather than a bogus order. The DFS uses an
//! explicit stack of `(vertex, next-neighbor-index)` frames so deep graphs
//! cannot overflow the call stack.
use std::collections::HashSet;
use std::hash::Hash;

use crate::graph::Graph;

/// Error returned by [`topological_sort`] when the graph is not a DAG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleDetected;

impl std::fmt::Display for CycleDetected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("graph contains a cycle")
    }
}

impl std::error::Error for CycleDetected {}

/// Returns a topological ordering of the vertices: for every directed edge
/// `u -> v`, `u` precedes `v` in the output.
///
/// Roots are taken in vertex insertion order, so the ordering is
/// deterministic for a given construction sequence.
///
/// # Errors
///
/// [`CycleDetected`] if any cycle exists (including self-loops). Note that
/// an undirected edge is a symmetric pair of directed entries and thus
/// always a cycle; this function is meant for graphs built with
/// [`Graph::add_directed_edge`].
pub fn topological_sort<V: Eq + Hash + Clone>(graph: &Graph<V>) -> Result<Vec<V>, CycleDetected> {
    let mut done: HashSet<V> = HashSet::new();
    let mut in_progress: HashSet<V> = HashSet::new();
    let mut postorder: Vec<V> = Vec::new();

    for root in graph.vertices() {
        if done.contains(root) {
            continue;
        }

        let mut stack: Vec<(V, usize)> = vec![(root.clone(), 0)];
        in_progress.insert(root.clone());

        while let Some((vertex, next_index)) = stack.last_mut() {
            let vertex = vertex.clone();
            let index = *next_index;
            *next_index += 1;

            match graph.neighbors(&vertex).get(index) {
                Some(neighbor) => {
                    if in_progress.contains(&neighbor.vertex) {
                        // Back edge onto the current DFS path.
                        return Err(CycleDetected);
                    }
                    if !done.contains(&neighbor.vertex) {
                        in_progress.insert(neighbor.vertex.clone());
                        stack.push((neighbor.vertex.clone(), 0));
                    }
                }
                None => {
                    // All successors finished: the vertex is done.
                    stack.pop();
                    in_progress.remove(&vertex);
                    done.insert(vertex.clone());
                    postorder.push(vertex);
                }
            }
        }
    }

    postorder.reverse();
    Ok(postorder)
}

/// Returns `true` if the directed graph contains at least one cycle.
pub fn has_cycle<V: Eq + Hash + Clone>(graph: &Graph<V>) -> bool {
    topological_sort(graph).is_err()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
