//! Bitmask helpers for subset dynamic programming.
//!
//! A subset of nodes is a `usize` whose bit `i` is set when node `i` belongs
//! to it.

use crate::graph::Node;

/// Mask with only `node` set
#[inline]
pub fn bit(node: Node) -> usize {
    1 << node
}

/// True if `node` belongs to `mask`
#[inline]
pub fn contains(mask: usize, node: Node) -> bool {
    mask & bit(node) != 0
}

/// Nodes of `mask`, ascending
pub fn members(mask: usize) -> impl Iterator<Item = Node> {
    let mut rest = mask;
    std::iter::from_fn(move || {
        if rest == 0 {
            return None;
        }
        let node = rest.trailing_zeros() as Node;
        rest &= rest - 1;
        Some(node)
    })
}

/// Iterates, in increasing numeric order, over every subset of `n` nodes that
/// has exactly `size` members and includes `anchor`.
///
/// Enumerates the `(size - 1)`-combinations of the other `n - 1` nodes with
/// Gosper's hack and splices the anchor bit back in. Splicing preserves order,
/// so the output is sorted without collecting or recursing.
#[derive(Debug, Clone)]
pub struct Subsets {
    anchor: Node,
    limit: usize,
    next: Option<usize>,
}

impl Subsets {
    pub fn new(n: usize, anchor: Node, size: usize) -> Self {
        let others = n.saturating_sub(1);
        let next = if anchor >= n || size == 0 || size > n {
            None
        } else {
            Some((1usize << (size - 1)) - 1)
        };
        Subsets {
            anchor,
            limit: 1usize << others,
            next,
        }
    }

    /// Inserts the anchor bit into a mask over the remaining nodes
    #[inline]
    fn splice(&self, compact: usize) -> usize {
        let low = compact & (bit(self.anchor) - 1);
        let high = (compact >> self.anchor) << (self.anchor + 1);
        high | bit(self.anchor) | low
    }
}

impl Iterator for Subsets {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.next?;
        if current >= self.limit {
            self.next = None;
            return None;
        }

        self.next = if current == 0 {
            None
        } else {
            // Gosper's hack: next larger integer with the same popcount
            let lowest = current & current.wrapping_neg();
            let ripple = current + lowest;
            Some((((ripple ^ current) >> 2) / lowest) | ripple)
        };

        Some(self.splice(current))
    }
}
