use std::time::{Duration, Instant};
use pathkit::algorithm::tsp::TspSolver;
use pathkit::graph::generators::random_connected;
use pathkit::graph::DistanceMatrix;

// Function to benchmark a solver on a graph
fn benchmark_solver(name: &str, solver: &TspSolver, graph: &DistanceMatrix<u64>, closed: bool) -> Duration {
    println!("Running {} on graph with {} nodes...", name, graph.size());

    let start = Instant::now();
    let result = solver.solve(graph, 0, closed);
    let duration = start.elapsed();

    match result {
        Ok(tour) => println!("  - Cost {} in {:?}", tour.cost, duration),
        Err(e) => println!("  - {} after {:?}", e, duration),
    }

    duration
}

fn main() {
    env_logger::init();

    // Define graph sizes to test
    let graph_sizes = vec![8, 10, 12, 14, 16, 18];

    // Chords added on top of the Hamiltonian ring
    let chord_factor = 2;

    println!("=====================================================");
    println!("Benchmark: exact TSP, serial vs parallel layers");
    println!("Chords: {} per node (on average)", chord_factor);
    println!("=====================================================");

    let serial = TspSolver::new();
    let parallel = TspSolver::new().with_parallel(true);

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} nodes...", size);
        let graph = random_connected(size, chord_factor * size, 100);

        let serial_time = benchmark_solver("Serial", &serial, &graph, true);
        let parallel_time = benchmark_solver("Parallel", &parallel, &graph, true);

        results.push((size, serial_time, parallel_time));

        let speedup = serial_time.as_secs_f64() / parallel_time.as_secs_f64();
        println!("Speedup - parallel vs serial: {:.2}x", speedup);
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<15} | {:<10}", "Nodes", "Serial (ms)", "Parallel (ms)", "SpeedUp");
    println!("-----------------------------------------------------");

    for (size, serial_time, parallel_time) in &results {
        let speedup = serial_time.as_secs_f64() / parallel_time.as_secs_f64();
        println!(
            "{:<10} | {:<15.2} | {:<15.2} | {:<10.2}",
            size,
            serial_time.as_secs_f64() * 1000.0,
            parallel_time.as_secs_f64() * 1000.0,
            speedup
        );
    }
}
