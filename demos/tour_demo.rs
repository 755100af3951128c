use colored::*;
use pathkit::algorithm::tsp::TspSolver;
use pathkit::graph::generators::lcg_distances;
use pathkit::{breadth_first_search, depth_first_search, shortest_distances, AdjacencyMap, DistanceMatrix};

// Seven towns joined by roads, distances in km
const TOWNS: [&str; 7] = ["Avila", "Burgos", "Cuenca", "Daroca", "Elche", "Ferrol", "Gijon"];

fn create_road_network() -> pathkit::Result<DistanceMatrix<u64>> {
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
}

fn names(route: &[usize]) -> String {
    route.iter().map(|&i| TOWNS[i]).collect::<Vec<_>>().join(" -> ")
}

fn main() -> pathkit::Result<()> {
    env_logger::init();

    let roads = create_road_network()?;
    let adjacency = AdjacencyMap::from_graph(&roads);

    println!("{}", "🗺️  PATHKIT ROAD NETWORK DEMO  🗺️".bright_cyan().bold());
    println!("{} towns, longest road {} km\n", roads.size(), roads.max_weight().unwrap_or(0));

    let (from, to) = (0, 6);
    println!("{}", format!("Getting from {} to {}", TOWNS[from], TOWNS[to]).bright_white().bold());
    println!("  {} {}", "BFS:".bright_green(), names(&breadth_first_search(&adjacency, from, to)?));
    println!("  {} {}", "DFS:".bright_yellow(), names(&depth_first_search(&adjacency, from, to)?));

    println!("\n{}", format!("Distances from {}", TOWNS[from]).bright_white().bold());
    for (town, distance) in shortest_distances(&roads, from)?.iter().enumerate() {
        match distance {
            Some(km) => println!("  {:<8} {:>4} km", TOWNS[town], km),
            None => println!("  {:<8} {}", TOWNS[town], "unreachable".red()),
        }
    }

    let solver = TspSolver::new().with_parallel(true);
    println!("\n{}", "Visiting every town once".bright_white().bold());
    for closed in [false, true] {
        let label = if closed { "Round trip" } else { "One way" };
        match solver.solve(&roads, from, closed) {
            Ok(tour) => println!(
                "  {} {} km: {}",
                format!("{}:", label).bright_green(),
                tour.cost,
                names(&tour.route())
            ),
            Err(e) => println!("  {} {}", format!("{}:", label).red(), e),
        }
    }

    // A sparse generated graph often has no Hamiltonian cycle at all
    let sparse = lcg_distances(10, 7);
    println!("\n{}", "Generated 10-node graph".bright_white().bold());
    match solver.solve(&sparse, 0, true) {
        Ok(tour) => println!("  {} cost {} via {:?}", "✅".bright_green(), tour.cost, tour.route()),
        Err(e) => println!("  {} {}", "❌".red(), e),
    }

    Ok(())
}
