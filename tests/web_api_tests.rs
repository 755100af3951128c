#![cfg(feature = "web")]

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use pathkit::web::api::{find_path, health_check, shortest_distances, solve_tour, AppState};
use pathkit::web::models::{DistancesRequest, PathRequest, TourRequest};
use pathkit::web::ServerConfig;
use std::collections::HashMap;

fn state() -> AppState {
    let _ = env_logger::builder().is_test(true).try_init();
    AppState::new(ServerConfig::default())
}

fn triangle() -> Vec<Vec<f64>> {
    vec![
        vec![0.0, 1.5, 4.0],
        vec![1.5, 0.0, 2.0],
        vec![4.0, 2.0, 0.0],
    ]
}

#[tokio::test]
async fn test_path_endpoint() {
    let request: PathRequest = serde_json::from_value(serde_json::json!({
        "adjacency": {"0": [1, 2, 3], "1": [0, 4], "2": [0, 3, 5], "3": [0, 2, 4, 6],
                      "4": [1, 3, 6], "5": [2, 6], "6": [3, 4, 5]},
        "source": 0,
        "sink": 6
    }))
    .unwrap();
    assert_eq!(request.algorithm, "bfs");

    let Json(response) = find_path(State(state()), Json(request)).await.unwrap();
    assert!(response.found);
    assert_eq!(response.path, vec![0, 3, 6]);
}

#[tokio::test]
async fn test_path_endpoint_rejects_unknown_algorithm() {
    let request = PathRequest {
        algorithm: "astar".to_string(),
        adjacency: HashMap::from([(0, vec![1])]),
        source: 0,
        sink: 1,
    };

    let (status, Json(body)) = find_path(State(state()), Json(request)).await.unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.error, "invalid_algorithm");
}

#[tokio::test]
async fn test_distances_endpoint() {
    let request = DistancesRequest {
        matrix: triangle(),
        start: 0,
    };

    let Json(response) = shortest_distances(State(state()), Json(request)).await.unwrap();
    assert_eq!(response.distances, vec![Some(0.0), Some(1.5), Some(3.5)]);
    assert_eq!(response.predecessors, vec![None, Some(0), Some(1)]);
    assert_eq!(response.reachable, 3);
}

#[tokio::test]
async fn test_distances_endpoint_rejects_ragged_matrix() {
    let request = DistancesRequest {
        matrix: vec![vec![0.0, 1.0], vec![1.0]],
        start: 0,
    };

    let (status, Json(body)) = shortest_distances(State(state()), Json(request)).await.unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.error, "shape_mismatch");
}

#[tokio::test]
async fn test_tour_endpoint() {
    let request: TourRequest = serde_json::from_value(serde_json::json!({
        "matrix": triangle(),
        "start": 0,
        "loop": true
    }))
    .unwrap();

    let Json(response) = solve_tour(State(state()), Json(request)).await.unwrap();
    assert!(response.closed);
    assert_eq!(response.cost, 7.5);
    assert_eq!(response.order, vec![0, 2, 1]);
    assert_eq!(response.route, vec![0, 2, 1, 0]);
}

#[tokio::test]
async fn test_tour_endpoint_reports_infeasible() {
    let request = TourRequest {
        matrix: vec![
            vec![0.0, 1.0, 0.0],
            vec![1.0, 0.0, 1.0],
            vec![0.0, 1.0, 0.0],
        ],
        start: 0,
        closed: true,
        parallel: false,
    };

    let (status, Json(body)) = solve_tour(State(state()), Json(request)).await.unwrap_err();
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body.error, "no_feasible_tour");
}

#[tokio::test]
async fn test_tour_endpoint_enforces_node_limit() {
    let config = ServerConfig {
        max_tour_nodes: 2,
        ..ServerConfig::default()
    };
    let request = TourRequest {
        matrix: triangle(),
        start: 0,
        closed: false,
        parallel: true,
    };

    let (status, Json(body)) = solve_tour(State(AppState::new(config)), Json(request)).await.unwrap_err();
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body.error, "too_many_nodes");
}

#[tokio::test]
async fn test_health() {
    let Json(body) = health_check().await;
    assert_eq!(body.status, "ok");
}
