//! JSON HTTP surface over the path search, shortest distance and tour operations

pub mod api;
pub mod models;
pub mod server;

pub use server::{build_app, start_server, ServerConfig};
