pub mod traits;
pub mod matrix;
pub mod adjacency;
pub mod generators;

pub use traits::{as_edge, Graph, Node, Weight};
pub use matrix::DistanceMatrix;
pub use adjacency::AdjacencyMap;
