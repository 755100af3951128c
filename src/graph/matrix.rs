use std::collections::HashMap;
use std::ops::Index;

use crate::graph::traits::{as_edge, Graph, Node, Weight};
use crate::{Error, Result};

/// A square distance matrix stored row-major in one flat buffer.
///
/// `matrix[(i, j)] == 0` means there is no edge from `i` to `j`. Symmetry is
/// not enforced; algorithms only read entries in the direction they traverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix<W>
where
    W: Weight,
{
    /// Number of nodes (rows and columns)
    size: usize,

    /// Entries, row * size + col
    weights: Vec<W>,
}

impl<W> DistanceMatrix<W>
where
    W: Weight,
{
    /// Creates an `n x n` matrix with no edges
    pub fn new(size: usize) -> Self {
        DistanceMatrix {
            size,
            weights: vec![W::zero(); size * size],
        }
    }

    /// Builds a matrix from nested rows, rejecting ragged or non-square input
    /// and negative weights.
    pub fn from_rows(rows: Vec<Vec<W>>) -> Result<Self> {
        let size = rows.len();
        let mut weights = Vec::with_capacity(size * size);

        for (from, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(Error::ShapeMismatch {
                    expected: size,
                    found: row.len(),
                });
            }
            for (to, weight) in row.into_iter().enumerate() {
                if weight < W::zero() {
                    return Err(Error::NegativeWeight { from, to });
                }
                weights.push(weight);
            }
        }

        Ok(DistanceMatrix { size, weights })
    }

    /// Converts a nested edge dictionary `{from: {to: weight}}` into a matrix of
    /// the given size. Only the listed directions are written.
    pub fn from_edge_map(edges: &HashMap<Node, HashMap<Node, W>>, size: usize) -> Result<Self> {
        let mut matrix = DistanceMatrix::new(size);
        for (&from, targets) in edges {
            for (&to, &weight) in targets {
                matrix.set(from, to, weight)?;
            }
        }
        Ok(matrix)
    }

    /// Builds a symmetric matrix from `(a, b, weight)` triples
    pub fn from_undirected_edges(size: usize, edges: &[(Node, Node, W)]) -> Result<Self> {
        let mut matrix = DistanceMatrix::new(size);
        for &(a, b, weight) in edges {
            matrix.set_undirected(a, b, weight)?;
        }
        Ok(matrix)
    }

    /// Number of nodes
    pub fn size(&self) -> usize {
        self.size
    }

    /// Raw entry, zero included
    pub fn get(&self, from: Node, to: Node) -> Option<W> {
        if from < self.size && to < self.size {
            Some(self.weights[from * self.size + to])
        } else {
            None
        }
    }

    /// Edge weight, `None` when the entry is zero or out of range
    #[inline]
    pub fn edge(&self, from: Node, to: Node) -> Option<W> {
        self.get(from, to).and_then(as_edge)
    }

    /// Writes a single directed entry
    pub fn set(&mut self, from: Node, to: Node, weight: W) -> Result<()> {
        for node in [from, to] {
            if node >= self.size {
                return Err(Error::InvalidNode(node));
            }
        }
        if weight < W::zero() {
            return Err(Error::NegativeWeight { from, to });
        }
        self.weights[from * self.size + to] = weight;
        Ok(())
    }

    /// Writes both directions of an undirected edge
    pub fn set_undirected(&mut self, a: Node, b: Node, weight: W) -> Result<()> {
        self.set(a, b, weight)?;
        self.set(b, a, weight)
    }

    /// Unchecked undirected write for builders whose ids and weights are
    /// valid by construction
    pub(crate) fn link(&mut self, a: Node, b: Node, weight: W) {
        debug_assert!(a < self.size && b < self.size && weight >= W::zero());
        self.weights[a * self.size + b] = weight;
        self.weights[b * self.size + a] = weight;
    }

    /// True when `matrix[(i, j)] == matrix[(j, i)]` everywhere
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| (i + 1..self.size).all(|j| self[(i, j)] == self[(j, i)]))
    }

    /// Iterates over the rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[W]> + '_ {
        // chunks(0) panics, an empty matrix simply has no rows
        self.weights.chunks(self.size.max(1)).take(self.size)
    }

    /// Largest edge weight, `None` when the matrix has no edges
    pub fn max_weight(&self) -> Option<W> {
        self.weights.iter().copied().filter_map(as_edge).max()
    }
}

impl<W> Index<(Node, Node)> for DistanceMatrix<W>
where
    W: Weight,
{
    type Output = W;

    fn index(&self, (from, to): (Node, Node)) -> &Self::Output {
        &self.weights[from * self.size + to]
    }
}

impl<W> Graph<W> for DistanceMatrix<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.size
    }

    fn edge_count(&self) -> usize {
        self.weights.iter().filter(|w| !w.is_zero()).count()
    }

    fn outgoing_edges(&self, vertex: Node) -> Box<dyn Iterator<Item = (Node, W)> + '_> {
        if vertex >= self.size {
            return Box::new(std::iter::empty());
        }
        let row = &self.weights[vertex * self.size..(vertex + 1) * self.size];
        Box::new(
            row.iter()
                .enumerate()
                .filter_map(|(to, &weight)| as_edge(weight).map(|w| (to, w))),
        )
    }

    fn get_edge_weight(&self, from: Node, to: Node) -> Option<W> {
        self.edge(from, to)
    }
}
