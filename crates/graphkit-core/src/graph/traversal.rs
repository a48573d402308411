//! Depth-first and breadth-first traversal.
//!
//! All three functions return the visitation order as a `Vec` and have no
//! side effects; presentation is left to the caller. An unknown start vertex
//! yields an empty order (lookups fail soft).
//!
//! [`dfs_iterative`] pushes neighbors onto its stack in reverse so that its
//! output matches the left-to-right order of [`dfs_recursive`].
use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

use crate::graph::Graph;

/// Visits vertices depth-first by recursion, returning the visitation order.
pub fn dfs_recursive<V: Eq + Hash + Clone>(graph: &Graph<V>, start: &V) -> Vec<V> {
    let mut visited: HashSet<V> = HashSet::new();
    let mut order: Vec<V> = Vec::new();
    if graph.contains_vertex(start) {
        visit(graph, start, &mut visited, &mut order);
    }
    order
}

fn visit<V: Eq + Hash + Clone>(
    graph: &Graph<V>,
    vertex: &V,
    visited: &mut HashSet<V>,
    order: &mut Vec<V>,
) {
    visited.insert(vertex.clone());
    order.push(vertex.clone());
    for neighbor in graph.neighbors(vertex) {
        if !visited.contains(&neighbor.vertex) {
            visit(graph, &neighbor.vertex, visited, order);
        }
    }
}

/// Visits vertices depth-first with an explicit stack, returning the
/// visitation order.
///
/// Produces the same order as [`dfs_recursive`] on the same graph.
pub fn dfs_iterative<V: Eq + Hash + Clone>(graph: &Graph<V>, start: &V) -> Vec<V> {
    if !graph.contains_vertex(start) {
        return Vec::new();
    }

    let mut visited: HashSet<V> = HashSet::new();
    let mut order: Vec<V> = Vec::new();
    let mut stack: Vec<V> = vec![start.clone()];

    while let Some(vertex) = stack.pop() {
        if visited.contains(&vertex) {
            continue;
        }
        visited.insert(vertex.clone());

        // Reverse push so the first-listed neighbor is popped first.
        for neighbor in graph.neighbors(&vertex).iter().rev() {
            if !visited.contains(&neighbor.vertex) {
                stack.push(neighbor.vertex.clone());
            }
        }
        order.push(vertex);
    }

    order
}

/// Visits vertices breadth-first, returning the visitation order.
///
/// Vertices are marked visited at enqueue time, not dequeue time, so no
/// vertex is enqueued twice.
pub fn bfs<V: Eq + Hash + Clone>(graph: &Graph<V>, start: &V) -> Vec<V> {
    if !graph.contains_vertex(start) {
        return Vec::new();
    }

    let mut visited: HashSet<V> = HashSet::new();
    let mut order: Vec<V> = Vec::new();
    let mut queue: VecDeque<V> = VecDeque::new();

    visited.insert(start.clone());
    queue.push_back(start.clone());

    while let Some(vertex) = queue.pop_front() {
        for neighbor in graph.neighbors(&vertex) {
            if !visited.contains(&neighbor.vertex) {
                visited.insert(neighbor.vertex.clone());
                queue.push_back(neighbor.vertex.clone());
            }
        }
        order.push(vertex);
    }

    order
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
