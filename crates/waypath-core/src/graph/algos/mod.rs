//! Graph algorithm implementations
//!
//! - `dijkstra`: weighted shortest paths, single-source costs, k-nearest

pub mod dijkstra;

pub use dijkstra::{
    compute_shortest_path, costs_from, k_nearest, shortest_path_cost, shortest_path_data,
    SearchTree, DEFAULT_NEAREST_LIMIT,
};
