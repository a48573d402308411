#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod file;
pub mod graph;
pub mod sort;
pub mod table;
pub mod union_find;

pub use file::{EdgeSpec, GraphFile, ParseError, parse_graph};
pub use graph::components::{connected_components, is_bipartite};
pub use graph::cycles::{CycleDetected, has_cycle, topological_sort};
pub use graph::dijkstra::{ShortestPaths, dijkstra};
pub use graph::mst::{kruskal, total_weight};
pub use graph::traversal::{bfs, dfs_iterative, dfs_recursive};
pub use graph::{Edge, Graph, Neighbor};
pub use sort::{
    binary_search, bubble_sort, heap_sort, insertion_sort, merge_sort, quick_sort, selection_sort,
};
pub use table::chained::{ChainedTable, ResizingTable};
pub use table::probed::ProbingTable;
pub use table::{BucketKey, DEFAULT_CAPACITY, MAX_LOAD_FACTOR};
pub use union_find::DisjointSets;

/// Returns the current version of the graphkit-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn version_is_semver() {
        let v = version();
        let parts: Vec<&str> = v.split('.').collect();
        assert_eq!(parts.len(), 3, "version should have 3 parts: {v}");
        for part in parts {
            part.parse::<u32>().expect("each part should be a number");
        }
    }
}
