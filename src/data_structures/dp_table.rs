use crate::data_structures::subsets::{bit, contains};
use crate::graph::{Node, Weight};

/// Memo table for subset DP keyed by `(end node, visited mask)`.
///
/// Every stored mask contains the start node, so the start bit is squeezed out
/// of the index and the table holds `n * 2^(n-1)` cells instead of `n * 2^n`.
/// Cells of one mask are contiguous. `None` marks a state that no sequence of
/// edges reaches.
#[derive(Debug, Clone)]
pub struct DpTable<W>
where
    W: Weight,
{
    nodes: usize,
    start: Node,
    cells: Vec<Option<W>>,
}

impl<W> DpTable<W>
where
    W: Weight,
{
    /// Allocates an all-unreachable table for `nodes` nodes anchored at `start`
    pub fn new(nodes: usize, start: Node) -> Self {
        let masks = 1usize << nodes.saturating_sub(1);
        DpTable {
            nodes,
            start,
            cells: vec![None; nodes * masks],
        }
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    fn offset(&self, end: Node, mask: usize) -> usize {
        debug_assert!(contains(mask, self.start), "mask {mask:#b} lacks the start bit");
        let low = mask & (bit(self.start) - 1);
        let high = (mask >> (self.start + 1)) << self.start;
        (high | low) * self.nodes + end
    }

    /// Cost of the cheapest walk from start through exactly `mask`, ending at `end`
    #[inline]
    pub fn get(&self, end: Node, mask: usize) -> Option<W> {
        self.cells[self.offset(end, mask)]
    }

    #[inline]
    pub fn set(&mut self, end: Node, mask: usize, cost: Option<W>) {
        let offset = self.offset(end, mask);
        self.cells[offset] = cost;
    }
}
