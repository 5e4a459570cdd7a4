//! Weighted directed graph and path-finding operations
//!
//! - `store`: the mutable graph, nodes indexed through [`crate::table::HashTable`]
//! - `traversal`: read-only provider trait consumed by the algorithms
//! - `algos`: Dijkstra shortest path and k-nearest queries

pub mod algos;
pub mod store;
pub mod traversal;
pub mod types;

pub use algos::{
    compute_shortest_path, costs_from, k_nearest, shortest_path_cost, shortest_path_data,
    SearchTree, DEFAULT_NEAREST_LIMIT,
};
pub use store::Graph;
pub use traversal::GraphProvider;
pub use types::{path_weight, EdgeWeight};
