pub mod traits;
pub mod traversal;
pub mod dijkstra;
pub mod tsp;

pub use traits::{PathSearch, ShortestPathAlgorithm, ShortestPathResult};
