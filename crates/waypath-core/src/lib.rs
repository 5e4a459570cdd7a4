//! Waypath Core Library
//!
//! Directed weighted graph with Dijkstra shortest-path queries, indexed by
//! a chained hash table, plus the edge-list loader and route planner built
//! on top of it.

pub mod config;
pub mod error;
pub mod graph;
pub mod load;
pub mod logging;
pub mod planner;
pub mod table;
