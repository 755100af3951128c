use std::fmt::Debug;
use num_traits::Zero;

/// Dense node identifier in `[0, n)`
pub type Node = usize;

/// Edge weight usable by every algorithm in the crate.
///
/// Integers work as-is; floating point weights go through
/// `ordered_float::OrderedFloat<f64>` so they can be totally ordered.
/// `W::zero()` marks a missing edge.
pub trait Weight: Copy + Debug + Ord + Zero + Send + Sync {}

impl<T> Weight for T where T: Copy + Debug + Ord + Zero + Send + Sync {}

/// Returns the weight if it denotes an edge, `None` for the zero marker
#[inline]
pub fn as_edge<W: Weight>(weight: W) -> Option<W> {
    if weight.is_zero() {
        None
    } else {
        Some(weight)
    }
}

/// Trait representing a weighted graph over dense node ids
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of (directed) edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex, in ascending target order
    fn outgoing_edges(&self, vertex: Node) -> Box<dyn Iterator<Item = (Node, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: Node) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: Node, to: Node) -> bool {
        self.get_edge_weight(from, to).is_some()
    }

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: Node, to: Node) -> Option<W>;
}
