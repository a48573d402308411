//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`].  This avoids stringly-typed handling of the stdin
/// sentinel throughout the codebase.
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain-text output (default).
    Human,
    /// A single structured JSON object.
    Json,
}

/// Traversal algorithm for the `traverse` subcommand.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum TraversalOrder {
    /// Breadth-first search (default).
    Bfs,
    /// Depth-first search, recursive formulation.
    Dfs,
    /// Depth-first search, explicit-stack formulation. Visits vertices in
    /// the same order as `dfs`; exists for exercising deep graphs.
    DfsIter,
}

/// All top-level subcommands exposed by the `graphkit` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Walk the graph from a start vertex and print the visitation order.
    Traverse {
        /// Path to a graph JSON file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// The vertex to start from.
        #[arg(value_name = "START")]
        start: String,
        /// Traversal algorithm: bfs (default), dfs, or dfs-iter.
        #[arg(long, default_value = "bfs")]
        order: TraversalOrder,
    },

    /// Compute single-source shortest-path distances (Dijkstra).
    Distances {
        /// Path to a graph JSON file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// The source vertex.
        #[arg(value_name = "START")]
        start: String,
        /// Report only the distance and path to this vertex.
        #[arg(long, value_name = "VERTEX")]
        to: Option<String>,
    },

    /// Compute a minimum spanning tree (Kruskal).
    Mst {
        /// Path to a graph JSON file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// Topologically sort a directed graph.
    Toposort {
        /// Path to a graph JSON file (should set "directed": true), or `-`
        /// for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// Print summary statistics for a graph.
    Inspect {
        /// Path to a graph JSON file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// Print the graphkit-core library version.
    Version,
}

/// Root CLI struct for the `graphkit` binary.
///
/// All global flags are defined here and marked `global = true` so that clap
/// propagates them to every subcommand.
#[derive(Parser)]
#[command(
    name = "graphkit",
    version,
    about = "Graph algorithms over JSON graph files",
    long_about = "Command-line front end for the graphkit graph engine.\n\
                  Traverses, measures, spans, and sorts graphs described by\n\
                  JSON documents with a vertex list and a weighted edge list."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Maximum input file size in bytes.
    ///
    /// Can also be set via the `GRAPHKIT_MAX_FILE_SIZE` environment
    /// variable. The CLI flag takes precedence. Default: 16777216 (16 MB).
    #[arg(
        long,
        global = true,
        env = "GRAPHKIT_MAX_FILE_SIZE",
        default_value = "16777216"
    )]
    pub max_file_size: u64,
}
