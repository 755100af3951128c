//! Exact Travelling Salesman solving by dynamic programming over subsets.
//!
//! `memo[end][mask]` holds the cheapest cost of leaving the start node,
//! visiting exactly the nodes of `mask` and standing at `end`. Every mask
//! contains the start bit. Masks are filled in order of increasing size, since a
//! mask of size `r` only reads masks of size `r - 1`. The optimal order is then
//! recovered by walking the table backwards from the full mask.
//!
//! Time is `O(n^2 * 2^n)` and memory `O(n * 2^n)`. Zero matrix entries are
//! missing edges, never zero-cost edges.

use log::{debug, trace};
use rayon::prelude::*;

use crate::data_structures::{bit, members, DpTable, Subsets};
use crate::graph::{DistanceMatrix, Node, Weight};
use crate::{Error, Result};

/// Node count accepted by a default solver
pub const DEFAULT_MAX_NODES: usize = 20;

/// Hard ceiling for `TspSolver::with_max_nodes`
pub const MAX_SUPPORTED_NODES: usize = 30;

/// An optimal Hamiltonian path or cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour<W>
where
    W: Weight,
{
    /// Sum of the edge weights along the tour, closing edge included when `closed`
    pub cost: W,

    /// Every node exactly once, beginning with the start node
    pub order: Vec<Node>,

    /// Whether the tour returns to its start
    pub closed: bool,
}

impl<W> Tour<W>
where
    W: Weight,
{
    /// The start node
    pub fn start(&self) -> Node {
        self.order[0]
    }

    /// Nodes in travel order, with the start repeated at the end for a cycle
    pub fn route(&self) -> Vec<Node> {
        let mut route = self.order.clone();
        if self.closed {
            route.push(self.start());
        }
        route
    }

    /// Re-sums the tour's edges on `matrix`. `None` if the tour uses a missing edge.
    pub fn edge_sum(&self, matrix: &DistanceMatrix<W>) -> Option<W> {
        self.route()
            .windows(2)
            .try_fold(W::zero(), |total, pair| {
                matrix.edge(pair[0], pair[1]).map(|w| total + w)
            })
    }
}

/// Exact TSP solver.
#[derive(Debug, Clone)]
pub struct TspSolver {
    /// Compute each subset-size layer with rayon
    parallel: bool,
    /// Largest node count accepted
    max_nodes: usize,
}

impl Default for TspSolver {
    fn default() -> Self {
        TspSolver::new()
    }
}

impl TspSolver {
    /// Create a serial solver accepting up to `DEFAULT_MAX_NODES` nodes
    pub fn new() -> Self {
        TspSolver {
            parallel: false,
            max_nodes: DEFAULT_MAX_NODES,
        }
    }

    /// Spread every subset-size layer across the rayon thread pool
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the largest node count accepted, clamped to `MAX_SUPPORTED_NODES`
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes.min(MAX_SUPPORTED_NODES);
        self
    }

    pub fn max_nodes(&self) -> usize {
        self.max_nodes
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Finds the cheapest tour from `start` through every node of `matrix`.
    ///
    /// With `closed` the tour must return to `start` over an existing edge.
    /// Among equally cheap tours the one found by preferring the lowest node id
    /// at each backward step is returned.
    pub fn solve<W>(&self, matrix: &DistanceMatrix<W>, start: Node, closed: bool) -> Result<Tour<W>>
    where
        W: Weight,
    {
        let n = matrix.size();
        if n < 2 {
            return Err(Error::TooFewNodes(n));
        }
        if n > self.max_nodes {
            return Err(Error::TooManyNodes {
                nodes: n,
                limit: self.max_nodes,
            });
        }
        if start >= n {
            return Err(Error::InvalidNode(start));
        }

        let mut memo = DpTable::new(n, start);
        debug!(
            "Solving {} tour over {} nodes from {} ({} DP cells, parallel: {})",
            if closed { "closed" } else { "open" },
            n,
            start,
            memo.len(),
            self.parallel
        );

        seed(matrix, &mut memo, start);
        for size in 3..=n {
            if self.parallel {
                self.expand_layer_parallel(matrix, &mut memo, start, size);
            } else {
                expand_layer(matrix, &mut memo, start, size);
            }
            trace!("Filled subsets of size {}", size);
        }

        let cost = cheapest_completion(matrix, &memo, start, closed).ok_or(Error::NoFeasibleTour)?;
        let order = reconstruct(matrix, &memo, start, closed, cost)?;

        debug!("Optimal tour cost {:?}, order {:?}", cost, order);
        Ok(Tour { cost, order, closed })
    }

    fn expand_layer_parallel<W>(&self, matrix: &DistanceMatrix<W>, memo: &mut DpTable<W>, start: Node, size: usize)
    where
        W: Weight,
    {
        let layer: Vec<usize> = Subsets::new(matrix.size(), start, size).collect();
        let table: &DpTable<W> = memo;
        let rows: Vec<(usize, Vec<(Node, Option<W>)>)> = layer
            .par_iter()
            .map(|&mask| (mask, relax_subset(matrix, table, start, mask)))
            .collect();

        for (mask, row) in rows {
            for (end, cost) in row {
                memo.set(end, mask, cost);
            }
        }
    }
}

/// Exact tour with default settings
pub fn solve_tsp<W>(matrix: &DistanceMatrix<W>, start: Node, closed: bool) -> Result<Tour<W>>
where
    W: Weight,
{
    TspSolver::new().solve(matrix, start, closed)
}

/// Two-node subsets: the direct edge from start, if any
fn seed<W: Weight>(matrix: &DistanceMatrix<W>, memo: &mut DpTable<W>, start: Node) {
    for node in (0..matrix.size()).filter(|&node| node != start) {
        memo.set(node, bit(start) | bit(node), matrix.edge(start, node));
    }
}

fn expand_layer<W: Weight>(matrix: &DistanceMatrix<W>, memo: &mut DpTable<W>, start: Node, size: usize) {
    for mask in Subsets::new(matrix.size(), start, size) {
        let row = relax_subset(matrix, memo, start, mask);
        for (end, cost) in row {
            memo.set(end, mask, cost);
        }
    }
}

/// Best cost of ending at each non-start member of `mask`, using only the
/// already filled subsets one node smaller
fn relax_subset<W: Weight>(
    matrix: &DistanceMatrix<W>,
    memo: &DpTable<W>,
    start: Node,
    mask: usize,
) -> Vec<(Node, Option<W>)> {
    members(mask)
        .filter(|&next| next != start)
        .map(|next| {
            let prior = mask ^ bit(next);
            let best = members(prior)
                .filter(|&end| end != start)
                .filter_map(|end| {
                    let step = matrix.edge(end, next)?;
                    memo.get(end, prior).map(|cost| cost + step)
                })
                .min();
            (next, best)
        })
        .collect()
}

/// Cheapest full-mask cost, plus the edge back to start for a cycle
fn cheapest_completion<W: Weight>(
    matrix: &DistanceMatrix<W>,
    memo: &DpTable<W>,
    start: Node,
    closed: bool,
) -> Option<W> {
    let full = (1usize << matrix.size()) - 1;
    (0..matrix.size())
        .filter(|&end| end != start)
        .filter_map(|end| {
            let reached = memo.get(end, full)?;
            if closed {
                matrix.edge(end, start).map(|back| reached + back)
            } else {
                Some(reached)
            }
        })
        .min()
}

/// Recovers the node order behind `cost` by walking the table backwards.
///
/// At each step the node `e` chosen is the lowest id in the mask for which
/// `memo[e][mask] + edge(e, following)` equals the remaining cost, where
/// `following` is the node placed after `e` (the start for a cycle's last hop,
/// nothing for an open path's last node). The remaining cost then becomes
/// `memo[e][mask]`, so no subtraction is needed.
fn reconstruct<W: Weight>(
    matrix: &DistanceMatrix<W>,
    memo: &DpTable<W>,
    start: Node,
    closed: bool,
    cost: W,
) -> Result<Vec<Node>> {
    let n = matrix.size();
    let mut mask = (1usize << n) - 1;
    let mut remaining = cost;
    let mut following = if closed { Some(start) } else { None };
    let mut reversed = Vec::with_capacity(n);

    while mask != bit(start) {
        let (node, reached) = members(mask)
            .filter(|&node| node != start)
            .find_map(|node| {
                let reached = memo.get(node, mask)?;
                let step = match following {
                    None => W::zero(),
                    Some(next) => matrix.edge(node, next)?,
                };
                (reached + step == remaining).then_some((node, reached))
            })
            .ok_or_else(|| {
                Error::AlgorithmError(format!(
                    "tour reconstruction found no predecessor for mask {:#b}",
                    mask
                ))
            })?;

        reversed.push(node);
        remaining = reached;
        mask ^= bit(node);
        following = Some(node);
    }

    reversed.push(start);
    reversed.reverse();
    Ok(reversed)
}
