use std::net::SocketAddr;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use route_planner::cache::{CacheConfig, CachedPlanner};
use route_planner::cli::{Cli, Command, QueryArgs};
use route_planner::network::{Network, RailwayData};
use route_planner::planner::{PlanRequest, Planner, PlannerConfig};
use route_planner::report;
use route_planner::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Address to serve on when `ROUTE_PLANNER_ADDR` is not set.
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let command = match Cli::parse().into_command() {
        Ok(command) => command,
        Err(e) => e.exit(),
    };

    match command {
        Command::Query(query) => run_query(&query),
        Command::Serve { data } => serve(&data).await,
    }
}

/// Load a network and print the best routes between two stations.
fn run_query(query: &QueryArgs) -> ExitCode {
    let data = match RailwayData::load(&query.data) {
        Ok(data) => data,
        Err(e) => {
            println!("\nERROR! \t{e}");
            return ExitCode::FAILURE;
        }
    };
    let network = Network::from_data(&data);

    // The command line asks for an exact number of routes
    let config = PlannerConfig::new(query.max_results, query.max_results);
    let request = PlanRequest::new(&query.origin, &query.destination, None);

    match Planner::new(&network, &config).plan(&request) {
        Ok(result) => {
            print!("{}", report::routes_found(&result.itineraries));
            ExitCode::SUCCESS
        }
        Err(e) => {
            print!("{}", report::plan_failure(&e));
            ExitCode::FAILURE
        }
    }
}

/// Serve the HTTP API over a loaded network.
async fn serve(data_path: &Path) -> ExitCode {
    let data = match RailwayData::load(data_path) {
        Ok(data) => data,
        Err(e) => {
            error!(error = %e, "failed to load network");
            return ExitCode::FAILURE;
        }
    };

    let addr_text = std::env::var("ROUTE_PLANNER_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.into());
    let addr: SocketAddr = match addr_text.parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!(addr = %addr_text, error = %e, "invalid ROUTE_PLANNER_ADDR");
            return ExitCode::FAILURE;
        }
    };

    // Build app state
    let network = Arc::new(Network::from_data(&data));
    let planner = CachedPlanner::new(network, &CacheConfig::default());
    let state = AppState::new(planner, data, PlannerConfig::default());

    // Create router
    let app = create_router(state);

    // Bind and serve
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%addr, error = %e, "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!(%addr, "route planner listening");
    println!("Route Planner listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health          - Health check");
    println!("  GET  /stations        - Station names");
    println!("  GET  /routes          - Route summaries");
    println!("  GET  /journey/plan    - Plan a journey");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server stopped");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
