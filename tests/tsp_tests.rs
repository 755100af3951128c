use ordered_float::OrderedFloat;
use pathkit::algorithm::tsp::{solve_tsp, Tour, TspSolver, MAX_SUPPORTED_NODES};
use pathkit::graph::generators::{random_complete, random_connected};
use pathkit::graph::DistanceMatrix;
use pathkit::Error;
use rand::Rng;

// Seven-node network, symmetric, zero meaning no road
fn create_test_network() -> DistanceMatrix<u64> {
    DistanceMatrix::from_undirected_edges(
        7,
        &[
            (0, 1, 90), (0, 2, 42), (0, 3, 90), (0, 5, 29),
            (1, 2, 70), (1, 3, 98), (1, 4, 65),
            (2, 3, 36), (2, 4, 97), (2, 5, 30), (2, 6, 46),
            (3, 5, 77),
            (4, 6, 68),
            (5, 6, 90),
        ],
    )
    .unwrap()
}

// Path graph 0 - 1 - 2 - 3
fn create_line() -> DistanceMatrix<u64> {
    DistanceMatrix::from_undirected_edges(4, &[(0, 1, 1), (1, 2, 1), (2, 3, 1)]).unwrap()
}

fn permutations(items: &[usize]) -> Vec<Vec<usize>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut all = Vec::new();
    for i in 0..items.len() {
        let mut rest = items.to_vec();
        let head = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, head);
            all.push(tail);
        }
    }
    all
}

// Cheapest tour by trying every order
fn brute_force(graph: &DistanceMatrix<u64>, start: usize, closed: bool) -> Option<u64> {
    let others: Vec<usize> = (0..graph.size()).filter(|&v| v != start).collect();
    permutations(&others)
        .into_iter()
        .filter_map(|rest| {
            let mut order = vec![start];
            order.extend(rest);
            Tour { cost: 0, order, closed }.edge_sum(graph)
        })
        .min()
}

fn assert_consistent(graph: &DistanceMatrix<u64>, tour: &Tour<u64>, start: usize) {
    assert_eq!(tour.order[0], start, "Tour should begin at start");
    let mut sorted = tour.order.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..graph.size()).collect::<Vec<_>>(), "Tour should visit every node once");
    assert_eq!(tour.edge_sum(graph), Some(tour.cost), "Reported cost should match re-summed edges");
}

#[test]
fn test_open_paths_from_every_start() {
    let graph = create_test_network();
    let expected = [
        (321, vec![0, 5, 3, 2, 6, 4, 1]),
        (321, vec![1, 4, 6, 2, 3, 5, 0]),
        (365, vec![2, 3, 5, 0, 1, 4, 6]),
        (318, vec![3, 2, 5, 0, 1, 4, 6]),
        (343, vec![4, 1, 0, 5, 3, 2, 6]),
        (334, vec![5, 0, 3, 2, 6, 4, 1]),
        (318, vec![6, 4, 1, 0, 5, 2, 3]),
    ];

    for (start, (cost, order)) in expected.into_iter().enumerate() {
        let tour = solve_tsp(&graph, start, false).unwrap();
        assert_eq!(tour.cost, cost, "open cost from {}", start);
        assert_eq!(tour.order, order, "open order from {}", start);
        assert_consistent(&graph, &tour, start);
        assert_eq!(brute_force(&graph, start, false), Some(cost));
    }
}

#[test]
fn test_closed_tours_from_every_start() {
    let graph = create_test_network();
    let expected = [
        vec![0, 5, 3, 2, 6, 4, 1],
        vec![1, 4, 6, 2, 3, 5, 0],
        vec![2, 6, 4, 1, 0, 5, 3],
        vec![3, 5, 0, 1, 4, 6, 2],
        vec![4, 6, 2, 3, 5, 0, 1],
        vec![5, 3, 2, 6, 4, 1, 0],
        vec![6, 4, 1, 0, 5, 3, 2],
    ];

    for (start, order) in expected.into_iter().enumerate() {
        let tour = solve_tsp(&graph, start, true).unwrap();
        assert_eq!(tour.cost, 411, "closed cost from {}", start);
        assert_eq!(tour.order, order, "closed order from {}", start);
        assert_eq!(tour.route().last(), Some(&start));
        assert_consistent(&graph, &tour, start);
    }
}

#[test]
fn test_dense_five_nodes() {
    let graph = DistanceMatrix::from_rows(vec![
        vec![0, 3, 4, 2, 7],
        vec![3, 0, 4, 6, 3],
        vec![4, 4, 0, 5, 8],
        vec![2, 6, 5, 0, 6],
        vec![7, 3, 8, 6, 0],
    ])
    .unwrap();

    let open = solve_tsp(&graph, 0, false).unwrap();
    assert_eq!((open.cost, open.order.clone()), (14, vec![0, 3, 2, 1, 4]));

    let closed = solve_tsp(&graph, 0, true).unwrap();
    assert_eq!((closed.cost, closed.order.clone()), (19, vec![0, 3, 4, 1, 2]));
    assert_eq!(closed.route(), vec![0, 3, 4, 1, 2, 0]);

    let closed = solve_tsp(&graph, 2, true).unwrap();
    assert_eq!((closed.cost, closed.order), (19, vec![2, 1, 4, 3, 0]));
}

#[test]
fn test_infeasible_tours() {
    let line = create_line();

    let open = solve_tsp(&line, 0, false).unwrap();
    assert_eq!((open.cost, open.order), (3, vec![0, 1, 2, 3]));
    let open = solve_tsp(&line, 3, false).unwrap();
    assert_eq!(open.order, vec![3, 2, 1, 0]);

    // No closing edge back to 0
    assert_eq!(solve_tsp(&line, 0, true), Err(Error::NoFeasibleTour));
    // Starting mid-line cannot cover both ends
    assert_eq!(solve_tsp(&line, 1, false), Err(Error::NoFeasibleTour));

    let disconnected = DistanceMatrix::<u64>::new(3);
    assert_eq!(solve_tsp(&disconnected, 0, false), Err(Error::NoFeasibleTour));
}

#[test]
fn test_two_nodes() {
    let graph = DistanceMatrix::from_undirected_edges(2, &[(0, 1, 5u64)]).unwrap();

    let open = solve_tsp(&graph, 0, false).unwrap();
    assert_eq!((open.cost, open.order), (5, vec![0, 1]));

    let closed = solve_tsp(&graph, 1, true).unwrap();
    assert_eq!(closed.cost, 10);
    assert_eq!(closed.route(), vec![1, 0, 1]);
}

#[test]
fn test_rejected_inputs() {
    assert_eq!(solve_tsp(&DistanceMatrix::<u64>::new(1), 0, false), Err(Error::TooFewNodes(1)));
    assert_eq!(solve_tsp(&DistanceMatrix::<u64>::new(0), 0, false), Err(Error::TooFewNodes(0)));
    assert_eq!(solve_tsp(&create_test_network(), 7, false), Err(Error::InvalidNode(7)));

    let solver = TspSolver::new().with_max_nodes(5);
    assert_eq!(
        solver.solve(&create_test_network(), 0, false),
        Err(Error::TooManyNodes { nodes: 7, limit: 5 })
    );
    assert_eq!(TspSolver::new().with_max_nodes(1000).max_nodes(), MAX_SUPPORTED_NODES);
}

#[test]
fn test_float_weights() {
    let halves = create_test_network();
    let rows = (0..7)
        .map(|i| (0..7).map(|j| OrderedFloat(halves[(i, j)] as f64 / 2.0)).collect())
        .collect();
    let graph = DistanceMatrix::from_rows(rows).unwrap();

    let tour = solve_tsp(&graph, 0, false).unwrap();
    assert_eq!(tour.cost, OrderedFloat(160.5));
    assert_eq!(tour.order, vec![0, 5, 3, 2, 6, 4, 1]);
    assert_eq!(tour.edge_sum(&graph), Some(tour.cost));
}

#[test]
fn test_random_graphs_match_brute_force() {
    let mut rng = rand::thread_rng();

    for _ in 0..30 {
        let n = rng.gen_range(2..=7);
        let graph = if rng.gen_bool(0.5) {
            random_complete(n, 50)
        } else {
            random_connected(n, rng.gen_range(0..n), 50)
        };
        let start = rng.gen_range(0..n);

        for closed in [false, true] {
            let expected = brute_force(&graph, start, closed);
            match solve_tsp(&graph, start, closed) {
                Ok(tour) => {
                    assert_eq!(Some(tour.cost), expected);
                    assert_consistent(&graph, &tour, start);
                }
                Err(e) => {
                    assert_eq!(e, Error::NoFeasibleTour);
                    assert_eq!(expected, None);
                }
            }
        }
    }
}

#[test]
fn test_cycle_never_cheaper_than_path() {
    for size in 3..=9 {
        let graph = random_connected(size, size, 100);
        for start in 0..size {
            let open = solve_tsp(&graph, start, false).unwrap();
            let closed = solve_tsp(&graph, start, true).unwrap();
            assert!(closed.cost >= open.cost);
        }
    }
}

#[test]
fn test_parallel_matches_serial() {
    let serial = TspSolver::new();
    let parallel = TspSolver::new().with_parallel(true);
    assert!(parallel.is_parallel());

    for size in [4, 8, 11] {
        let graph = random_connected(size, 2 * size, 100);
        for closed in [false, true] {
            assert_eq!(serial.solve(&graph, 1, closed), parallel.solve(&graph, 1, closed));
        }
    }
}

#[test]
#[ignore = "allocates the full 20-node table"]
fn test_twenty_nodes() {
    let edges: &[(usize, &[(usize, u64)])] = &[
        (0, &[(11, 50), (1, 68), (3, 24), (7, 49), (8, 35), (12, 67), (16, 35)]),
        (1, &[(10, 99), (12, 67), (11, 34), (2, 30), (3, 14), (4, 52), (7, 90)]),
        (2, &[(5, 10), (15, 78), (7, 45), (8, 81), (9, 61), (11, 85), (17, 85), (18, 45)]),
        (3, &[(7, 16), (15, 52), (13, 62), (14, 16)]),
        (4, &[(15, 92), (6, 17), (8, 27), (9, 13), (10, 15), (18, 45)]),
        (5, &[(16, 99), (15, 44), (13, 80)]),
        (6, &[(11, 40), (13, 36), (7, 18), (12, 47), (14, 29), (16, 15), (18, 13)]),
        (8, &[(11, 35), (15, 99), (19, 53)]),
        (9, &[(18, 47), (12, 76), (13, 52)]),
        (10, &[(18, 33), (12, 19)]),
        (11, &[(18, 71)]),
        (12, &[(15, 49), (17, 27)]),
        (13, &[(15, 48), (14, 82)]),
        (14, &[(15, 25), (19, 77)]),
        (16, &[(18, 33), (17, 85), (19, 23)]),
    ];
    let triples: Vec<(usize, usize, u64)> = edges
        .iter()
        .flat_map(|&(a, targets)| targets.iter().map(move |&(b, w)| (a, b, w)))
        .collect();
    let graph = DistanceMatrix::from_undirected_edges(20, &triples).unwrap();
    assert!(graph.is_symmetric());

    let tour = TspSolver::new().with_parallel(true).solve(&graph, 0, false).unwrap();
    assert_consistent(&graph, &tour, 0);
}
