//! Single-source shortest paths (Dijkstra).
//!
//! Weights are assumed non-negative; this is not validated, and negative
//! weights silently produce wrong answers, as with any Dijkstra variant.
//!
//! The frontier is a binary heap keyed on tentative distance. Once a vertex
//! is popped and marked visited its distance is final and later frontier
//! entries for it are discarded unexamined.
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::hash::Hash;

use crate::graph::Graph;

// ---------------------------------------------------------------------------
// ShortestPaths
// ---------------------------------------------------------------------------

/// The result of a [`dijkstra`] run: final distances plus the predecessor
/// map used for path reconstruction.
#[derive(Debug, Clone)]
pub struct ShortestPaths<V> {
    distances: HashMap<V, f64>,
    previous: HashMap<V, V>,
}

impl<V: Eq + Hash + Clone> ShortestPaths<V> {
    /// Returns the shortest-path distance to `vertex`.
    ///
    /// `Some(f64::INFINITY)` means the vertex exists but is unreachable from
    /// the start; `None` means the vertex was not in the graph when the run
    /// happened.
    pub fn distance(&self, vertex: &V) -> Option<f64> {
        self.distances.get(vertex).copied()
    }

    /// Returns the full vertex → distance map.
    pub fn distances(&self) -> &HashMap<V, f64> {
        &self.distances
    }

    /// Returns the predecessor map: for each reached vertex (other than the
    /// start), the vertex it was relaxed from on the shortest path.
    pub fn previous(&self) -> &HashMap<V, V> {
        &self.previous
    }

    /// Reconstructs the shortest path from the start to `vertex`, inclusive
    /// of both endpoints. Returns `None` for unreachable or unknown vertices.
    pub fn path_to(&self, vertex: &V) -> Option<Vec<V>> {
        let distance = self.distances.get(vertex)?;
        if !distance.is_finite() {
            return None;
        }

        let mut path = vec![vertex.clone()];
        let mut current = vertex;
        while let Some(prev) = self.previous.get(current) {
            path.push(prev.clone());
            current = prev;
        }
        path.reverse();
        Some(path)
    }
}

// ---------------------------------------------------------------------------
// Frontier ordering
// ---------------------------------------------------------------------------

/// Heap entry. The `Ord` impl compares distances *inverted* so that the std
/// max-heap pops the smallest tentative distance first, using `total_cmp`
/// to stay total over floats.
struct Frontier<V> {
    distance: f64,
    vertex: V,
}

impl<V> PartialEq for Frontier<V> {
    fn eq(&self, other: &Self) -> bool {
        self.distance.total_cmp(&other.distance) == Ordering::Equal
    }
}

impl<V> Eq for Frontier<V> {}

impl<V> PartialOrd for Frontier<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V> Ord for Frontier<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.distance.total_cmp(&self.distance)
    }
}

// ---------------------------------------------------------------------------
// dijkstra
// ---------------------------------------------------------------------------

/// Computes shortest-path distances from `start` to every vertex.
///
/// Every vertex present in the graph gets a distance entry; vertices
/// unreachable from `start` retain `f64::INFINITY`. An unknown start vertex
/// fails soft: the result marks every vertex unreachable.
pub fn dijkstra<V: Eq + Hash + Clone>(graph: &Graph<V>, start: &V) -> ShortestPaths<V> {
    let mut distances: HashMap<V, f64> = graph
        .vertices()
        .iter()
        .map(|v| (v.clone(), f64::INFINITY))
        .collect();
    let mut previous: HashMap<V, V> = HashMap::new();
    let mut visited: HashSet<V> = HashSet::new();
    let mut frontier: BinaryHeap<Frontier<V>> = BinaryHeap::new();

    if graph.contains_vertex(start) {
        distances.insert(start.clone(), 0.0);
        frontier.push(Frontier {
            distance: 0.0,
            vertex: start.clone(),
        });
    }

    while let Some(Frontier { distance, vertex }) = frontier.pop() {
        // Settle: the first pop of a vertex carries its final distance;
        // stale frontier entries are skipped here.
        if !visited.insert(vertex.clone()) {
            continue;
        }

        for neighbor in graph.neighbors(&vertex) {
            let candidate = distance + neighbor.weight;
            let best = distances
                .get(&neighbor.vertex)
                .copied()
                .unwrap_or(f64::INFINITY);
            if candidate < best {
                distances.insert(neighbor.vertex.clone(), candidate);
                previous.insert(neighbor.vertex.clone(), vertex.clone());
                frontier.push(Frontier {
                    distance: candidate,
                    vertex: neighbor.vertex.clone(),
                });
            }
        }
    }

    ShortestPaths {
        distances,
        previous,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
