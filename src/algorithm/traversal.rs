use std::collections::{HashMap, HashSet, VecDeque};

use log::debug;

use crate::algorithm::PathSearch;
use crate::graph::{AdjacencyMap, Node};
use crate::{Error, Result};

/// Pending `(node, predecessor)` entries of a search
trait Frontier: Default {
    fn put(&mut self, entry: (Node, Option<Node>));
    fn take(&mut self) -> Option<(Node, Option<Node>)>;
}

/// FIFO frontier
impl Frontier for VecDeque<(Node, Option<Node>)> {
    fn put(&mut self, entry: (Node, Option<Node>)) {
        self.push_back(entry);
    }

    fn take(&mut self) -> Option<(Node, Option<Node>)> {
        self.pop_front()
    }
}

/// LIFO frontier
impl Frontier for Vec<(Node, Option<Node>)> {
    fn put(&mut self, entry: (Node, Option<Node>)) {
        self.push(entry);
    }

    fn take(&mut self) -> Option<(Node, Option<Node>)> {
        self.pop()
    }
}

/// Breadth-first search. Finds a path with the fewest hops.
#[derive(Debug, Default, Clone, Copy)]
pub struct BreadthFirst;

impl BreadthFirst {
    pub fn new() -> Self {
        BreadthFirst
    }
}

impl PathSearch for BreadthFirst {
    fn find_path(&self, graph: &AdjacencyMap, source: Node, sink: Node) -> Result<Vec<Node>> {
        search::<VecDeque<_>>(graph, source, sink)
    }

    fn name(&self) -> &'static str {
        "BFS"
    }
}

/// Depth-first search. Finds some path, not necessarily a short one.
#[derive(Debug, Default, Clone, Copy)]
pub struct DepthFirst;

impl DepthFirst {
    pub fn new() -> Self {
        DepthFirst
    }
}

impl PathSearch for DepthFirst {
    fn find_path(&self, graph: &AdjacencyMap, source: Node, sink: Node) -> Result<Vec<Node>> {
        search::<Vec<_>>(graph, source, sink)
    }

    fn name(&self) -> &'static str {
        "DFS"
    }
}

/// Path from `source` to `sink` by breadth-first search, empty if unreachable
pub fn breadth_first_search(graph: &AdjacencyMap, source: Node, sink: Node) -> Result<Vec<Node>> {
    BreadthFirst.find_path(graph, source, sink)
}

/// Path from `source` to `sink` by depth-first search, empty if unreachable
pub fn depth_first_search(graph: &AdjacencyMap, source: Node, sink: Node) -> Result<Vec<Node>> {
    DepthFirst.find_path(graph, source, sink)
}

/// Shared search loop.
///
/// The sink test runs before the visited test, so the first time the sink is
/// taken off the frontier ends the search, whatever entry carried it.
/// Neighbours are put on the frontier in descending id order. A stack therefore
/// explores them in ascending order, a queue in descending order.
fn search<F: Frontier>(graph: &AdjacencyMap, source: Node, sink: Node) -> Result<Vec<Node>> {
    for node in [source, sink] {
        if graph.max_node().map_or(true, |max| node > max) {
            return Err(Error::InvalidNode(node));
        }
    }

    // Keyed by node, ids may be sparse
    let mut predecessors: HashMap<Node, Option<Node>> = HashMap::new();
    let mut visited: HashSet<Node> = HashSet::new();
    let mut frontier = F::default();
    frontier.put((source, None));

    let mut found = false;
    let mut expanded = 0usize;
    while let Some((node, from)) = frontier.take() {
        if node == sink {
            predecessors.insert(sink, from);
            found = true;
            break;
        }
        if !visited.insert(node) {
            continue;
        }
        // Nodes that only appear as neighbours are dead ends
        let Some(neighbours) = graph.neighbours(node) else {
            continue;
        };

        predecessors.insert(node, from);
        expanded += 1;
        for &next in neighbours.iter().rev() {
            frontier.put((next, Some(node)));
        }
    }

    if !found {
        debug!("No path from {} to {} after expanding {} nodes", source, sink, expanded);
        return Ok(Vec::new());
    }

    let mut path = vec![sink];
    let mut current = sink;
    while current != source {
        match predecessors.get(&current).copied().flatten() {
            Some(prev) => {
                current = prev;
                path.push(current);
            }
            None => {
                return Err(Error::AlgorithmError(format!(
                    "predecessor chain broken at node {}",
                    current
                )))
            }
        }
    }
    path.reverse();

    debug!("Found {}-hop path from {} to {}", path.len() - 1, source, sink);
    Ok(path)
}
