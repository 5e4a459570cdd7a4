//! Route planning over a loaded campus map
//!
//! [`Planner`] owns a `Graph<String, f64>` whose weights are walking times
//! in seconds and answers the questions a route display needs: which
//! locations exist, which stops lie on the quickest route, how long each
//! leg takes, and which destinations are closest.

use std::path::Path;

use serde::Serialize;

use crate::config::Config;
use crate::error::{Result, WaypathError};
use crate::graph::{self, Graph, DEFAULT_NEAREST_LIMIT};
use crate::load::{self, LoadStats};

/// Quickest route between two locations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// Locations from start to destination, both included
    pub stops: Vec<String>,
    /// Walking time of each consecutive pair of stops
    pub legs: Vec<f64>,
    pub total_seconds: f64,
}

#[derive(Debug, Clone)]
pub struct Planner {
    graph: Graph<String, f64>,
    nearest_limit: usize,
}

impl Default for Planner {
    fn default() -> Self {
        Self::new()
    }
}

impl Planner {
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            nearest_limit: DEFAULT_NEAREST_LIMIT,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            graph: Graph::with_capacity(config.index_capacity),
            nearest_limit: config.nearest_limit,
        }
    }

    pub fn with_nearest_limit(mut self, limit: usize) -> Self {
        self.nearest_limit = limit;
        self
    }

    pub fn graph(&self) -> &Graph<String, f64> {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut Graph<String, f64> {
        &mut self.graph
    }

    /// Replace the current map with the edge list at `path`
    pub fn load_graph_data(&mut self, path: &Path) -> Result<LoadStats> {
        load::load_edge_list_file(&mut self.graph, path)
    }

    /// Every known location, sorted by name
    pub fn locations(&self) -> Vec<String> {
        let mut locations: Vec<String> = self.graph.all_nodes().cloned().collect();
        locations.sort();
        locations
    }

    /// Stops on the quickest route; empty when the destination is unreachable
    pub fn locations_on_shortest_path(&self, start: &str, end: &str) -> Result<Vec<String>> {
        let (start, end) = self.endpoints(start, end)?;
        match graph::shortest_path_data(&self.graph, &start, &end) {
            Ok(stops) => Ok(stops),
            Err(e) if e.is_path_not_found() => Ok(Vec::new()),
            Err(e) => Err(e),
        }
    }

    /// Walking time of each leg of the quickest route; empty when unreachable
    pub fn times_on_shortest_path(&self, start: &str, end: &str) -> Result<Vec<f64>> {
        let stops = self.locations_on_shortest_path(start, end)?;
        stops
            .windows(2)
            .map(|pair| self.graph.get_edge(&pair[0], &pair[1]))
            .collect()
    }

    /// Quickest route from `start` to `end`, or `None` when unreachable
    pub fn route(&self, start: &str, end: &str) -> Result<Option<Route>> {
        let stops = self.locations_on_shortest_path(start, end)?;
        if stops.is_empty() {
            return Ok(None);
        }

        let legs = stops
            .windows(2)
            .map(|pair| self.graph.get_edge(&pair[0], &pair[1]))
            .collect::<Result<Vec<f64>>>()?;
        let total_seconds = graph::path_weight(&legs);
        Ok(Some(Route {
            stops,
            legs,
            total_seconds,
        }))
    }

    /// The closest reachable destinations from `start`, quickest first
    pub fn closest_destinations(&self, start: &str) -> Result<Vec<String>> {
        graph::k_nearest(&self.graph, &start.to_string(), self.nearest_limit)
    }

    fn endpoints(&self, start: &str, end: &str) -> Result<(String, String)> {
        let start = start.to_string();
        let end = end.to_string();
        for location in [&start, &end] {
            if !self.graph.contains_node(location) {
                return Err(WaypathError::node_not_found(location));
            }
        }
        Ok((start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAP: &str = r#"digraph campus {
    "Union South" -> "Computer Sciences" [seconds=176.0];
    "Computer Sciences" -> "Union South" [seconds=176.0];
    "Computer Sciences" -> "Chamberlin Hall" [seconds=95.5];
    "Chamberlin Hall" -> "Van Vleck" [seconds=120.0];
    "Union South" -> "Van Vleck" [seconds=500.0];
    "Lakeshore Path" -> "Union South" [seconds=300.0];
}"#;

    fn planner() -> Planner {
        let mut planner = Planner::new();
        load::load_edge_list(planner.graph_mut(), MAP).unwrap();
        planner
    }

    #[test]
    fn test_locations_sorted() {
        assert_eq!(
            planner().locations(),
            vec![
                "Chamberlin Hall",
                "Computer Sciences",
                "Lakeshore Path",
                "Union South",
                "Van Vleck"
            ]
        );
    }

    #[test]
    fn test_route_prefers_quicker_legs() {
        let route = planner()
            .route("Union South", "Van Vleck")
            .unwrap()
            .unwrap();
        assert_eq!(
            route.stops,
            vec![
                "Union South",
                "Computer Sciences",
                "Chamberlin Hall",
                "Van Vleck"
            ]
        );
        assert_eq!(route.legs, vec![176.0, 95.5, 120.0]);
        assert_eq!(route.total_seconds, 391.5);
    }

    #[test]
    fn test_unreachable_is_empty_not_error() {
        let planner = planner();
        assert!(planner
            .locations_on_shortest_path("Van Vleck", "Lakeshore Path")
            .unwrap()
            .is_empty());
        assert!(planner
            .times_on_shortest_path("Van Vleck", "Lakeshore Path")
            .unwrap()
            .is_empty());
        assert_eq!(planner.route("Van Vleck", "Lakeshore Path").unwrap(), None);
    }

    #[test]
    fn test_unknown_location_is_error() {
        let err = planner().route("Union South", "Bascom Hill").unwrap_err();
        assert!(matches!(err, WaypathError::NodeNotFound { .. }));
    }

    #[test]
    fn test_closest_destinations() {
        let planner = planner().with_nearest_limit(2);
        assert_eq!(
            planner.closest_destinations("Union South").unwrap(),
            vec!["Computer Sciences", "Chamberlin Hall"]
        );

        let err = planner.closest_destinations("Van Vleck").unwrap_err();
        assert!(matches!(err, WaypathError::NoReachableNodes { .. }));
    }
}
