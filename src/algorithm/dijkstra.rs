use log::debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::DistanceQueue;
use crate::graph::{DistanceMatrix, Graph, Node, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm for non-negative weights.
///
/// The next vertex settled is the unsettled one with the smallest tentative
/// distance, the lowest id winning ties. Zero matrix entries are not edges.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: Node) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidNode(source));
        }

        let n = graph.vertex_count();

        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<Node>> = vec![None; n];
        let mut settled = vec![false; n];

        distances[source] = Some(W::zero());

        let mut queue = DistanceQueue::with_capacity(n);
        queue.push(source, W::zero());

        let mut relaxations = 0usize;
        while let Some((u, dist_u)) = queue.pop_nearest() {
            // Stale entry, u was already settled at a smaller distance
            if settled[u] {
                continue;
            }
            settled[u] = true;

            for (v, weight) in graph.outgoing_edges(u) {
                if settled[v] {
                    continue;
                }
                let candidate = dist_u + weight;

                let improves = match distances[v] {
                    None => true,
                    Some(current) => candidate < current,
                };

                if improves {
                    distances[v] = Some(candidate);
                    predecessors[v] = Some(u);
                    queue.push(v, candidate);
                    relaxations += 1;
                }
            }
        }

        debug!(
            "Dijkstra from {}: {} of {} vertices reachable, {} relaxations",
            source,
            settled.iter().filter(|&&s| s).count(),
            n,
            relaxations
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}

/// Minimum distance from `start` to every node of the matrix, `None` where unreachable
pub fn shortest_distances<W>(matrix: &DistanceMatrix<W>, start: Node) -> Result<Vec<Option<W>>>
where
    W: Weight,
{
    <Dijkstra as ShortestPathAlgorithm<W, DistanceMatrix<W>>>::compute_shortest_paths(
        &Dijkstra, matrix, start,
    )
    .map(|result| result.distances)
}
