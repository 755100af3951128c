//! Pathkit - exact pathfinding on dense weighted graphs
//!
//! This library answers three kinds of questions about undirected graphs given
//! as distance matrices or adjacency maps:
//!
//! - is there a path between two nodes (breadth-first and depth-first search),
//! - what is the shortest distance from one node to every other (Dijkstra),
//! - what is the cheapest Hamiltonian path or cycle from a fixed start
//!   (exact Travelling Salesman solving with dynamic programming over subsets).
//!
//! A zero entry in a distance matrix always means "no edge". A zero-cost edge
//! cannot be expressed, and every algorithm here skips zero entries.

pub mod algorithm;
pub mod data_structures;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod graph;
#[cfg(feature = "python")]
mod python;
#[cfg(feature = "web")]
pub mod web;

pub use algorithm::{
    dijkstra::{shortest_distances, Dijkstra},
    traversal::{breadth_first_search, depth_first_search, BreadthFirst, DepthFirst},
    tsp::{solve_tsp, Tour, TspSolver},
    PathSearch, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::{AdjacencyMap, DistanceMatrix, Node, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid node ID: {0}")]
    InvalidNode(usize),

    #[error("Shape mismatch: expected dimension {expected}, found {found}")]
    ShapeMismatch { expected: usize, found: usize },

    #[error("No Hamiltonian path or cycle exists over the given edges")]
    NoFeasibleTour,

    #[error("Negative edge weight from {from} to {to}")]
    NegativeWeight { from: usize, to: usize },

    #[error("A tour needs at least 2 nodes, got {0}")]
    TooFewNodes(usize),

    #[error("Exact tour solving is limited to {limit} nodes, got {nodes}")]
    TooManyNodes { nodes: usize, limit: usize },

    #[error("Algorithm execution error: {0}")]
    AlgorithmError(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
