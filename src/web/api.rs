use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::Utc;
use log::{info, warn};
use ordered_float::OrderedFloat;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::traversal::{BreadthFirst, DepthFirst};
use crate::algorithm::tsp::TspSolver;
use crate::algorithm::{PathSearch, ShortestPathAlgorithm};
use crate::graph::{AdjacencyMap, DistanceMatrix};
use crate::web::models::*;
use crate::web::server::ServerConfig;
use crate::Error;

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/path", post(find_path))
        .route("/api/distances", post(shortest_distances))
        .route("/api/tour", post(solve_tour))
        .route("/api/health", get(health_check))
}

/// Find a path between two nodes with BFS or DFS
pub async fn find_path(
    State(_state): State<AppState>,
    Json(request): Json<PathRequest>,
) -> Result<Json<PathResponse>, ApiError> {
    let search: Box<dyn PathSearch + Send> = match request.algorithm.as_str() {
        "bfs" => Box::new(BreadthFirst),
        "dfs" => Box::new(DepthFirst),
        other => {
            return Err(bad_request(
                "invalid_algorithm",
                format!("Unknown search algorithm: {}", other),
            ))
        }
    };

    let graph = AdjacencyMap::from(request.adjacency);
    let start_time = Instant::now();
    let path = search
        .find_path(&graph, request.source, request.sink)
        .map_err(|e| error_response(&e))?;
    let execution_time = start_time.elapsed();

    info!(
        "{} {} -> {}: {} nodes in {:?}",
        search.name(),
        request.source,
        request.sink,
        path.len(),
        execution_time
    );

    Ok(Json(PathResponse {
        execution_id: Uuid::new_v4(),
        algorithm: request.algorithm,
        source: request.source,
        sink: request.sink,
        found: !path.is_empty(),
        path,
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
        computed_at: Utc::now(),
    }))
}

/// Dijkstra distances from one node to every other
pub async fn shortest_distances(
    State(_state): State<AppState>,
    Json(request): Json<DistancesRequest>,
) -> Result<Json<DistancesResponse>, ApiError> {
    let matrix = convert_matrix(request.matrix)?;

    let start_time = Instant::now();
    let result = <Dijkstra as ShortestPathAlgorithm<OrderedFloat<f64>, DistanceMatrix<OrderedFloat<f64>>>>::compute_shortest_paths(
        &Dijkstra,
        &matrix,
        request.start,
    )
    .map_err(|e| error_response(&e))?;
    let execution_time = start_time.elapsed();

    let distances: Vec<Option<f64>> = result
        .distances
        .iter()
        .map(|d| d.map(OrderedFloat::into_inner))
        .collect();
    let reachable = distances.iter().filter(|d| d.is_some()).count();

    Ok(Json(DistancesResponse {
        execution_id: Uuid::new_v4(),
        start: request.start,
        distances,
        predecessors: result.predecessors,
        reachable,
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
        computed_at: Utc::now(),
    }))
}

/// Exact minimum-cost Hamiltonian path or cycle
pub async fn solve_tour(
    State(state): State<AppState>,
    Json(request): Json<TourRequest>,
) -> Result<Json<TourResponse>, ApiError> {
    let matrix = convert_matrix(request.matrix)?;
    let solver = TspSolver::new()
        .with_max_nodes(state.config.max_tour_nodes)
        .with_parallel(request.parallel);
    let (start, closed) = (request.start, request.closed);

    // Exponential work, keep it off the async workers
    let start_time = Instant::now();
    let outcome = tokio::task::spawn_blocking(move || solver.solve(&matrix, start, closed))
        .await
        .map_err(|e| {
            warn!("Tour solver task failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "solver_task_failed".to_string(),
                    message: e.to_string(),
                    details: None,
                }),
            )
        })?;
    let tour = outcome.map_err(|e| error_response(&e))?;
    let execution_time = start_time.elapsed();

    info!(
        "Tour over {} nodes from {} (loop: {}) cost {} in {:?}",
        tour.order.len(),
        start,
        closed,
        tour.cost,
        execution_time
    );

    Ok(Json(TourResponse {
        execution_id: Uuid::new_v4(),
        start,
        closed,
        cost: tour.cost.into_inner(),
        route: tour.route(),
        order: tour.order,
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
        computed_at: Utc::now(),
    }))
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })
}

/// Convert a JSON matrix into a distance matrix
fn convert_matrix(rows: Vec<Vec<f64>>) -> Result<DistanceMatrix<OrderedFloat<f64>>, ApiError> {
    let rows = rows
        .into_iter()
        .map(|row| row.into_iter().map(OrderedFloat).collect())
        .collect();
    DistanceMatrix::from_rows(rows).map_err(|e| error_response(&e))
}

fn bad_request(error: &str, message: String) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: error.to_string(),
            message,
            details: None,
        }),
    )
}

/// Map library errors onto HTTP statuses
pub fn error_response(err: &Error) -> ApiError {
    let (status, code, details) = match err {
        Error::InvalidNode(node) => (
            StatusCode::BAD_REQUEST,
            "invalid_node",
            Some(serde_json::json!({ "node": node })),
        ),
        Error::ShapeMismatch { expected, found } => (
            StatusCode::BAD_REQUEST,
            "shape_mismatch",
            Some(serde_json::json!({ "expected": expected, "found": found })),
        ),
        Error::NegativeWeight { from, to } => (
            StatusCode::BAD_REQUEST,
            "negative_weight",
            Some(serde_json::json!({ "from": from, "to": to })),
        ),
        Error::TooFewNodes(_) => (StatusCode::BAD_REQUEST, "too_few_nodes", None),
        Error::TooManyNodes { nodes, limit } => (
            StatusCode::PAYLOAD_TOO_LARGE,
            "too_many_nodes",
            Some(serde_json::json!({ "nodes": nodes, "limit": limit })),
        ),
        Error::NoFeasibleTour => (StatusCode::UNPROCESSABLE_ENTITY, "no_feasible_tour", None),
        Error::AlgorithmError(_) => (StatusCode::INTERNAL_SERVER_ERROR, "algorithm_execution_failed", None),
    };

    (
        status,
        Json(ErrorResponse {
            error: code.to_string(),
            message: err.to_string(),
            details,
        }),
    )
}
