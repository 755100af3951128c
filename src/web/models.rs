use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Parameters for an unweighted path search
#[derive(Debug, Deserialize)]
pub struct PathRequest {
    /// "bfs" or "dfs"
    #[serde(default = "default_search")]
    pub algorithm: String,
    /// node -> neighbours
    pub adjacency: HashMap<usize, Vec<usize>>,
    pub source: usize,
    pub sink: usize,
}

fn default_search() -> String {
    "bfs".to_string()
}

/// Result of a path search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathResponse {
    pub execution_id: Uuid,
    pub algorithm: String,
    pub source: usize,
    pub sink: usize,
    pub found: bool,
    pub path: Vec<usize>,
    pub execution_time_ms: f64,
    pub computed_at: DateTime<Utc>,
}

/// Parameters for single-source shortest distances
#[derive(Debug, Deserialize)]
pub struct DistancesRequest {
    /// Square distance matrix, 0 meaning no edge
    pub matrix: Vec<Vec<f64>>,
    pub start: usize,
}

/// Shortest distances from one node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistancesResponse {
    pub execution_id: Uuid,
    pub start: usize,
    /// `null` for unreachable nodes
    pub distances: Vec<Option<f64>>,
    pub predecessors: Vec<Option<usize>>,
    pub reachable: usize,
    pub execution_time_ms: f64,
    pub computed_at: DateTime<Utc>,
}

/// Parameters for exact tour solving
#[derive(Debug, Deserialize)]
pub struct TourRequest {
    /// Square distance matrix, 0 meaning no edge
    pub matrix: Vec<Vec<f64>>,
    #[serde(default)]
    pub start: usize,
    /// Return to the start node
    #[serde(rename = "loop", default)]
    pub closed: bool,
    #[serde(default)]
    pub parallel: bool,
}

/// Optimal tour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourResponse {
    pub execution_id: Uuid,
    pub start: usize,
    #[serde(rename = "loop")]
    pub closed: bool,
    pub cost: f64,
    /// Every node once, start first
    pub order: Vec<usize>,
    /// `order`, plus the start again for a loop
    pub route: Vec<usize>,
    pub execution_time_ms: f64,
    pub computed_at: DateTime<Utc>,
}

/// Health check body
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

/// Error response for API
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}
