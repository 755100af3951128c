use crate::graph::DistanceMatrix;
use rand::prelude::*;

const LCG_MULTIPLIER: u64 = 445;
const LCG_INCREMENT: u64 = 700_001;
const LCG_MODULUS: u64 = 2_097_152;

/// Deterministic pseudo-random undirected graph.
///
/// Draws `4 * size` numbers from the recurrence `s = (445 * s + 700001) mod 2^21`,
/// reduced to `1..=size`. Node `i` reads the quadruple `(v1, d1, v2, d2)` and
/// connects to node `v1 - 1` with weight `d1` and to `v2 - 1` with weight `d2`,
/// skipping self-loops and pairs that already have an edge.
pub fn lcg_distances(size: usize, seed: u64) -> DistanceMatrix<u64> {
    let mut graph = DistanceMatrix::new(size);
    if size == 0 {
        return graph;
    }

    let mut state = seed % LCG_MODULUS;
    let draws: Vec<u64> = (0..4 * size)
        .map(|_| {
            state = (LCG_MULTIPLIER * state + LCG_INCREMENT) % LCG_MODULUS;
            state % size as u64 + 1
        })
        .collect();

    for (node, quad) in draws.chunks_exact(4).enumerate() {
        for (target, weight) in [(quad[0], quad[1]), (quad[2], quad[3])] {
            let target = target as usize - 1;
            if target != node && graph.edge(node, target).is_none() {
                graph.link(node, target, weight);
            }
        }
    }

    graph
}

/// Generates a complete symmetric graph with integer weights in `1..=max_weight`
pub fn random_complete(size: usize, max_weight: u64) -> DistanceMatrix<u64> {
    let mut graph = DistanceMatrix::new(size);
    let mut rng = rand::thread_rng();
    let max_weight = max_weight.max(1);

    for i in 0..size {
        for j in (i + 1)..size {
            let weight = rng.gen_range(1..=max_weight);
            graph.link(i, j, weight);
        }
    }

    graph
}

/// Generates a sparse symmetric graph that always admits a Hamiltonian cycle:
/// a ring `0 - 1 - ... - (size-1) - 0` plus `extra_edges` random chords.
pub fn random_connected(size: usize, extra_edges: usize, max_weight: u64) -> DistanceMatrix<u64> {
    let mut graph = DistanceMatrix::new(size);
    let mut rng = rand::thread_rng();
    let max_weight = max_weight.max(1);

    if size < 2 {
        return graph;
    }

    // Ring
    for i in 0..size {
        let weight = rng.gen_range(1..=max_weight);
        graph.link(i, (i + 1) % size, weight);
    }

    // Chords; a complete graph caps how many can be added
    let capacity = size * (size - 1) / 2;
    let mut remaining = extra_edges.min(capacity.saturating_sub(size));
    let mut nodes: Vec<usize> = (0..size).collect();
    while remaining > 0 {
        nodes.shuffle(&mut rng);
        let (a, b) = (nodes[0], nodes[1]);
        if graph.edge(a, b).is_none() {
            let weight = rng.gen_range(1..=max_weight);
            graph.link(a, b, weight);
            remaining -= 1;
        }
    }

    graph
}
