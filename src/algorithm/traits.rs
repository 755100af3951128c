use log::warn;

use crate::graph::{AdjacencyMap, Graph, Node, Weight};
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathResult<W>
where
    W: Weight,
{
    /// Distances from source to each vertex, `None` for unreachable (infinite)
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<Node>>,

    /// Source vertex ID
    pub source: Node,
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: Node) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: Node) -> Option<Vec<Node>> {
        if target >= result.predecessors.len() || result.distances[target].is_none() {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;

        while current != result.source {
            match result.predecessors[current] {
                Some(pred) => current = pred,
                None => {
                    warn!("Vertex {} has a distance but no predecessor", current);
                    return None;
                }
            }
            path.push(current);

            // A tree path never revisits a vertex
            if path.len() > result.predecessors.len() {
                warn!("Path length exceeds graph size, predecessors contain a cycle");
                return None;
            }
        }

        path.reverse();
        Some(path)
    }
}

/// Trait for unweighted source-to-sink path searches
pub trait PathSearch {
    /// Finds a path from `source` to `sink`.
    ///
    /// An unreachable sink is not an error: the returned path is empty.
    fn find_path(&self, graph: &AdjacencyMap, source: Node, sink: Node) -> Result<Vec<Node>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
