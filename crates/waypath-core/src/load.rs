//! Edge-list loader
//!
//! Reads graph descriptions made of lines shaped like
//! `"Memorial Union" -> "Science Hall" [seconds=105.8];`. Every matching
//! line adds both endpoints and one directed edge weighted by the
//! `seconds` attribute. Lines of any other shape (graph headers, braces,
//! comments) are skipped.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use std::time::Instant;

use regex::Regex;
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{Result, WaypathError};
use crate::graph::Graph;
use crate::trace_time;

const EDGE_LINE_PATTERN: &str =
    r#"^"([^"]*)"\s*->\s*"([^"]*)"\s*\[\s*seconds\s*=\s*([^\];]*?)\s*\]\s*;?$"#;

static EDGE_LINE: OnceLock<Regex> = OnceLock::new();

fn edge_line_regex() -> Result<&'static Regex> {
    if let Some(re) = EDGE_LINE.get() {
        return Ok(re);
    }
    let re = Regex::new(EDGE_LINE_PATTERN)
        .map_err(|e| WaypathError::Other(format!("invalid edge-line pattern: {}", e)))?;
    Ok(EDGE_LINE.get_or_init(|| re))
}

/// One parsed edge-list line
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec {
    pub source: String,
    pub target: String,
    pub weight: f64,
}

/// Summary of one load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    /// Lines read
    pub lines: usize,
    /// Lines that produced an edge
    pub edges: usize,
    /// Lines that did not match the edge shape
    pub skipped: usize,
}

/// Parse a single line.
///
/// Returns `Ok(None)` for lines that are not edge declarations and an
/// [`WaypathError::InvalidValue`] when an edge declaration carries a
/// travel time that is not a finite number.
pub fn parse_edge_line(line: &str) -> Result<Option<EdgeSpec>> {
    let line = line.trim();
    let Some(caps) = edge_line_regex()?.captures(line) else {
        return Ok(None);
    };

    let seconds = &caps[3];
    let weight = seconds
        .parse::<f64>()
        .ok()
        .filter(|w| w.is_finite())
        .ok_or_else(|| {
            WaypathError::invalid_value("travel time", format!("{:?} in line {:?}", seconds, line))
        })?;

    Ok(Some(EdgeSpec {
        source: caps[1].to_string(),
        target: caps[2].to_string(),
        weight,
    }))
}

/// Replace the contents of `graph` with the edges described by `text`
pub fn load_edge_list(graph: &mut Graph<String, f64>, text: &str) -> Result<LoadStats> {
    let start = Instant::now();
    graph.clear();

    let mut stats = LoadStats::default();
    for (number, line) in text.lines().enumerate() {
        stats.lines += 1;
        let Some(edge) = parse_edge_line(line)? else {
            trace!(line = number + 1, "skip_line");
            stats.skipped += 1;
            continue;
        };

        graph.insert_node(edge.source.clone())?;
        graph.insert_node(edge.target.clone())?;
        graph.insert_edge(&edge.source, &edge.target, edge.weight)?;
        stats.edges += 1;
    }

    debug!(
        lines = stats.lines,
        edges = stats.edges,
        skipped = stats.skipped,
        nodes = graph.node_count(),
        "load_edge_list"
    );
    trace_time!(start, "load_edge_list");
    Ok(stats)
}

/// Read `path` and load it with [`load_edge_list`]
pub fn load_edge_list_file(graph: &mut Graph<String, f64>, path: &Path) -> Result<LoadStats> {
    let text = fs::read_to_string(path)
        .map_err(|e| WaypathError::io_operation("read graph data from", path.display(), e))?;
    load_edge_list(graph, &text)
}
