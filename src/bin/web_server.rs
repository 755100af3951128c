use pathkit::web::{start_server, ServerConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments: [port] [max tour nodes]
    let args: Vec<String> = env::args().collect();
    let defaults = ServerConfig::default();
    let config = ServerConfig {
        port: args.get(1).and_then(|a| a.parse().ok()).unwrap_or(defaults.port),
        max_tour_nodes: args
            .get(2)
            .and_then(|a| a.parse().ok())
            .unwrap_or(defaults.max_tour_nodes),
        ..defaults
    };

    println!("🔧 Starting Pathkit Web Server...");
    println!("⚙️  Configuration:");
    println!("   📡 Port: {}", config.port);
    println!("   🌐 CORS enabled: {}", config.enable_cors);
    println!("   🧭 Max tour nodes: {}", config.max_tour_nodes);
    println!();

    start_server(config).await?;

    Ok(())
}
