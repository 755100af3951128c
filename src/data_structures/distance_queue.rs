use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::graph::{Node, Weight};

/// Min-priority queue of `(node, tentative distance)` entries for Dijkstra.
///
/// Entries pop by smallest distance, then by smallest node id, so among equal
/// distances the lowest-indexed node always comes out first.
#[derive(Debug)]
pub struct DistanceQueue<W>
where
    W: Weight,
{
    heap: BinaryHeap<Reverse<(W, Node)>>,
}

impl<W> DistanceQueue<W>
where
    W: Weight,
{
    /// Creates a new empty queue
    pub fn new() -> Self {
        DistanceQueue {
            heap: BinaryHeap::new(),
        }
    }

    /// Creates a queue sized for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        DistanceQueue {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Queues a node at the given distance. Stale entries for the same node are
    /// left in place and must be skipped by the caller.
    pub fn push(&mut self, node: Node, distance: W) {
        self.heap.push(Reverse((distance, node)));
    }

    /// Removes the nearest entry
    pub fn pop_nearest(&mut self) -> Option<(Node, W)> {
        self.heap.pop().map(|Reverse((distance, node))| (node, distance))
    }

    /// Returns the nearest entry without removing it
    pub fn peek(&self) -> Option<(Node, W)> {
        self.heap.peek().map(|Reverse((distance, node))| (*node, *distance))
    }
}

impl<W> Default for DistanceQueue<W>
where
    W: Weight,
{
    fn default() -> Self {
        DistanceQueue::new()
    }
}
