use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::graph::traits::{Graph, Node, Weight};

/// Unweighted adjacency structure: node -> set of neighbours.
///
/// Ordered containers keep neighbour iteration deterministic, which the
/// traversal tie-break relies on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyMap {
    neighbours: BTreeMap<Node, BTreeSet<Node>>,
}

impl AdjacencyMap {
    /// Creates an empty map
    pub fn new() -> Self {
        AdjacencyMap::default()
    }

    /// Builds the unweighted view of a weighted graph (every non-zero entry is an edge)
    pub fn from_graph<W, G>(graph: &G) -> Self
    where
        W: Weight,
        G: Graph<W>,
    {
        let mut map = AdjacencyMap::new();
        for from in 0..graph.vertex_count() {
            map.insert_node(from);
            for (to, _) in graph.outgoing_edges(from) {
                map.add_edge(from, to);
            }
        }
        map
    }

    /// Registers a node without neighbours
    pub fn insert_node(&mut self, node: Node) {
        self.neighbours.entry(node).or_default();
    }

    /// Adds the directed edge `from -> to`
    pub fn add_edge(&mut self, from: Node, to: Node) {
        self.neighbours.entry(from).or_default().insert(to);
    }

    /// Adds `a -> b` and `b -> a`
    pub fn add_undirected_edge(&mut self, a: Node, b: Node) {
        self.add_edge(a, b);
        self.add_edge(b, a);
    }

    /// True if the node is a key of the map
    pub fn contains(&self, node: Node) -> bool {
        self.neighbours.contains_key(&node)
    }

    /// Neighbours of a node, `None` if the node is not a key
    pub fn neighbours(&self, node: Node) -> Option<&BTreeSet<Node>> {
        self.neighbours.get(&node)
    }

    /// Nodes that are keys of the map, ascending
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.neighbours.keys().copied()
    }

    /// True if the map has no keys
    pub fn is_empty(&self) -> bool {
        self.neighbours.is_empty()
    }

    /// Largest node id appearing anywhere in the map, as a key or as a
    /// neighbour. Valid node ids for a search are `0..=max_node()`.
    pub fn max_node(&self) -> Option<Node> {
        let largest_key = self.neighbours.keys().next_back().copied();
        let largest_neighbour = self
            .neighbours
            .values()
            .filter_map(|set| set.iter().next_back().copied())
            .max();
        largest_key.into_iter().chain(largest_neighbour).max()
    }

    /// One past `max_node()`, `Some(0)` for an empty map and `None` when the
    /// map holds `usize::MAX`
    pub fn node_bound(&self) -> Option<usize> {
        self.max_node().map_or(Some(0), |node| node.checked_add(1))
    }

    /// True if `b` is listed as a neighbour of `a`
    pub fn has_edge(&self, a: Node, b: Node) -> bool {
        self.neighbours.get(&a).is_some_and(|set| set.contains(&b))
    }
}

impl<I> FromIterator<(Node, I)> for AdjacencyMap
where
    I: IntoIterator<Item = Node>,
{
    fn from_iter<T: IntoIterator<Item = (Node, I)>>(iter: T) -> Self {
        let mut map = AdjacencyMap::new();
        for (node, neighbours) in iter {
            map.insert_node(node);
            for neighbour in neighbours {
                map.add_edge(node, neighbour);
            }
        }
        map
    }
}

impl From<HashMap<Node, Vec<Node>>> for AdjacencyMap {
    fn from(edges: HashMap<Node, Vec<Node>>) -> Self {
        edges.into_iter().collect()
    }
}
