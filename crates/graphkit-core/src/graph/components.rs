//! Connected components and bipartiteness.
//!
//! Both functions sweep the vertex list in insertion order and restart from
//! every vertex their previous passes did not reach, so disconnected graphs
//! are fully covered and the output order is deterministic.
use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;

use crate::graph::Graph;

/// Partitions the graph into connected components.
///
/// Each component lists its vertices in depth-first visitation order,
/// starting from the earliest-inserted vertex the component contains.
/// Intended for undirected graphs; on directed graphs it reports
/// forward-reachability islands, not weak connectivity.
pub fn connected_components<V: Eq + Hash + Clone>(graph: &Graph<V>) -> Vec<Vec<V>> {
    let mut visited: HashSet<V> = HashSet::new();
    let mut components: Vec<Vec<V>> = Vec::new();

    for root in graph.vertices() {
        if visited.contains(root) {
            continue;
        }

        let mut component: Vec<V> = Vec::new();
        let mut stack: Vec<V> = vec![root.clone()];
        while let Some(vertex) = stack.pop() {
            if visited.contains(&vertex) {
                continue;
            }
            visited.insert(vertex.clone());
            for neighbor in graph.neighbors(&vertex).iter().rev() {
                if !visited.contains(&neighbor.vertex) {
                    stack.push(neighbor.vertex.clone());
                }
            }
            component.push(vertex);
        }
        components.push(component);
    }

    components
}

/// Checks whether the graph is two-colorable.
///
/// Runs a BFS coloring from every uncolored vertex. A neighbor already
/// holding the current vertex's color is an odd cycle, and the check fails
/// immediately; if every component colors cleanly the graph is bipartite.
pub fn is_bipartite<V: Eq + Hash + Clone>(graph: &Graph<V>) -> bool {
    let mut colors: HashMap<V, u8> = HashMap::new();

    for root in graph.vertices() {
        if colors.contains_key(root) {
            continue;
        }

        colors.insert(root.clone(), 0);
        let mut queue: VecDeque<V> = VecDeque::new();
        queue.push_back(root.clone());

        while let Some(current) = queue.pop_front() {
            let current_color = colors.get(&current).copied().unwrap_or(0);
            for neighbor in graph.neighbors(&current) {
                match colors.get(&neighbor.vertex) {
                    None => {
                        colors.insert(neighbor.vertex.clone(), 1 - current_color);
                        queue.push_back(neighbor.vertex.clone());
                    }
                    Some(&color) if color == current_color => return false,
                    Some(_) => {}
                }
            }
        }
    }

    true
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
