//! Mutable directed weighted graph
//!
//! Node records live in an arena of slots addressed by index; a
//! [`HashTable`] maps each node key to its slot. Edges are stored under
//! their source record as `(target slot, weight)` in insertion order.
//! Removing a node frees its slot and filters every adjacency list, so no
//! edge ever points at a dead slot.

use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{Result, WaypathError};
use crate::graph::types::EdgeWeight;
use crate::table::{HashTable, DEFAULT_CAPACITY};

#[derive(Debug, Clone)]
struct EdgeRecord<W> {
    target: usize,
    weight: W,
}

#[derive(Debug, Clone)]
struct NodeRecord<N, W> {
    key: N,
    edges: Vec<EdgeRecord<W>>,
}

/// Directed graph keyed by `N` with edge weights of type `W`
#[derive(Debug, Clone)]
pub struct Graph<N, W> {
    index: HashTable<N, usize>,
    slots: Vec<Option<NodeRecord<N, W>>>,
    free: Vec<usize>,
    edge_count: usize,
}

impl<N, W> Graph<N, W>
where
    N: Hash + Eq + Clone + Debug,
    W: EdgeWeight,
{
    /// Create an empty graph
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty graph whose node index starts with `capacity` buckets
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: HashTable::with_capacity(capacity),
            slots: Vec::new(),
            free: Vec::new(),
            edge_count: 0,
        }
    }

    pub fn node_count(&self) -> usize {
        self.index.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Add a node with no edges.
    ///
    /// Inserting a key that already exists is a no-op; returns whether a
    /// new node was created.
    pub fn insert_node(&mut self, key: N) -> Result<bool> {
        if self.index.contains_key(&key) {
            return Ok(false);
        }

        let record = NodeRecord {
            key: key.clone(),
            edges: Vec::new(),
        };
        let slot = match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(record);
                slot
            }
            None => {
                self.slots.push(Some(record));
                self.slots.len() - 1
            }
        };
        self.index.put(key, slot)?;
        Ok(true)
    }

    /// Remove a node together with every edge leaving or entering it
    pub fn remove_node(&mut self, key: &N) -> Result<()> {
        let slot = self.slot_of(key)?;
        self.index.remove(key)?;

        let outgoing = self.slots[slot].take().map_or(0, |record| record.edges.len());
        let mut incoming = 0;
        for record in self.slots.iter_mut().flatten() {
            let before = record.edges.len();
            record.edges.retain(|edge| edge.target != slot);
            incoming += before - record.edges.len();
        }

        self.edge_count -= outgoing + incoming;
        self.free.push(slot);
        Ok(())
    }

    /// Add a directed edge, or replace the weight of an existing one.
    ///
    /// Returns the previous weight when the edge already existed.
    pub fn insert_edge(&mut self, source: &N, target: &N, weight: W) -> Result<Option<W>> {
        let from = self.slot_of(source)?;
        let to = self.slot_of(target)?;
        let record = self.record_mut(from, source)?;

        if let Some(edge) = record.edges.iter_mut().find(|edge| edge.target == to) {
            let previous = std::mem::replace(&mut edge.weight, weight);
            return Ok(Some(previous));
        }

        record.edges.push(EdgeRecord { target: to, weight });
        self.edge_count += 1;
        Ok(None)
    }

    /// Remove a directed edge and return its weight
    pub fn remove_edge(&mut self, source: &N, target: &N) -> Result<W> {
        let (from, to) = self.edge_endpoints(source, target)?;
        let record = self.record_mut(from, source)?;
        let position = record
            .edges
            .iter()
            .position(|edge| edge.target == to)
            .ok_or_else(|| WaypathError::edge_not_found(source, target))?;

        let edge = record.edges.remove(position);
        self.edge_count -= 1;
        Ok(edge.weight)
    }

    /// The graph's stored copy of `key`
    pub fn get_node(&self, key: &N) -> Option<&N> {
        let slot = self.slot_of(key).ok()?;
        self.slots[slot].as_ref().map(|record| &record.key)
    }

    pub fn contains_node(&self, key: &N) -> bool {
        self.index.contains_key(key)
    }

    pub fn contains_edge(&self, source: &N, target: &N) -> bool {
        self.get_edge(source, target).is_ok()
    }

    /// Weight of the directed edge `source -> target`
    pub fn get_edge(&self, source: &N, target: &N) -> Result<W> {
        let (from, to) = self.edge_endpoints(source, target)?;
        self.slots[from]
            .as_ref()
            .and_then(|record| record.edges.iter().find(|edge| edge.target == to))
            .map(|edge| edge.weight)
            .ok_or_else(|| WaypathError::edge_not_found(source, target))
    }

    /// Every node key, in index order
    pub fn all_nodes(&self) -> impl Iterator<Item = &N> {
        self.index.keys()
    }

    /// Outgoing edges of `key` as `(target, weight)`, in insertion order
    pub fn outgoing(&self, key: &N) -> Result<Vec<(&N, W)>> {
        let slot = self.slot_of(key)?;
        let record = self.slots[slot]
            .as_ref()
            .ok_or_else(|| WaypathError::node_not_found(key))?;

        Ok(record
            .edges
            .iter()
            .filter_map(|edge| {
                self.slots[edge.target]
                    .as_ref()
                    .map(|target| (&target.key, edge.weight))
            })
            .collect())
    }

    /// Remove every node and edge
    pub fn clear(&mut self) {
        self.index.clear();
        self.slots.clear();
        self.free.clear();
        self.edge_count = 0;
    }

    fn slot_of(&self, key: &N) -> Result<usize> {
        self.index
            .get(key)
            .copied()
            .map_err(|_| WaypathError::node_not_found(key))
    }

    fn edge_endpoints(&self, source: &N, target: &N) -> Result<(usize, usize)> {
        match (self.slot_of(source), self.slot_of(target)) {
            (Ok(from), Ok(to)) => Ok((from, to)),
            _ => Err(WaypathError::edge_not_found(source, target)),
        }
    }

    fn record_mut(&mut self, slot: usize, key: &N) -> Result<&mut NodeRecord<N, W>> {
        self.slots[slot]
            .as_mut()
            .ok_or_else(|| WaypathError::node_not_found(key))
    }
}

impl<N, W> Default for Graph<N, W>
where
    N: Hash + Eq + Clone + Debug,
    W: EdgeWeight,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph<&'static str, u32> {
        let mut graph = Graph::new();
        for key in ["A", "B", "C"] {
            graph.insert_node(key).unwrap();
        }
        graph.insert_edge(&"A", &"B", 1).unwrap();
        graph.insert_edge(&"B", &"C", 2).unwrap();
        graph.insert_edge(&"C", &"A", 3).unwrap();
        graph.insert_edge(&"A", &"C", 4).unwrap();
        graph
    }

    #[test]
    fn test_insert_node_is_idempotent() {
        let mut graph: Graph<String, f64> = Graph::new();
        assert!(graph.insert_node("A".to_string()).unwrap());
        assert!(!graph.insert_node("A".to_string()).unwrap());
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_round_trip_nodes_and_edges() {
        let graph = triangle();
        let mut nodes: Vec<&str> = graph.all_nodes().copied().collect();
        nodes.sort();
        assert_eq!(nodes, vec!["A", "B", "C"]);

        assert_eq!(graph.get_edge(&"A", &"B").unwrap(), 1);
        assert_eq!(graph.get_edge(&"C", &"A").unwrap(), 3);
        assert!(graph.contains_edge(&"A", &"C"));
        assert!(!graph.contains_edge(&"C", &"B"));
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_insert_edge_replaces_weight() {
        let mut graph = triangle();
        let previous = graph.insert_edge(&"A", &"B", 9).unwrap();
        assert_eq!(previous, Some(1));
        assert_eq!(graph.get_edge(&"A", &"B").unwrap(), 9);
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_insert_edge_requires_endpoints() {
        let mut graph = triangle();
        let err = graph.insert_edge(&"A", &"Z", 1).unwrap_err();
        assert!(matches!(err, WaypathError::NodeNotFound { .. }));
        let err = graph.insert_edge(&"Z", &"A", 1).unwrap_err();
        assert!(matches!(err, WaypathError::NodeNotFound { .. }));
    }

    #[test]
    fn test_outgoing_keeps_insertion_order() {
        let graph = triangle();
        let outgoing = graph.outgoing(&"A").unwrap();
        assert_eq!(outgoing, vec![(&"B", 1), (&"C", 4)]);
        assert!(graph.outgoing(&"Z").is_err());
    }

    #[test]
    fn test_remove_edge() {
        let mut graph = triangle();
        assert_eq!(graph.remove_edge(&"B", &"C").unwrap(), 2);
        assert!(!graph.contains_edge(&"B", &"C"));
        assert_eq!(graph.edge_count(), 3);

        let err = graph.remove_edge(&"B", &"C").unwrap_err();
        assert!(matches!(err, WaypathError::EdgeNotFound { .. }));
        let err = graph.remove_edge(&"B", &"Z").unwrap_err();
        assert!(matches!(err, WaypathError::EdgeNotFound { .. }));
    }

    #[test]
    fn test_remove_node_cascades() {
        let mut graph = triangle();
        graph.remove_node(&"C").unwrap();

        assert!(!graph.contains_node(&"C"));
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(matches!(
            graph.get_edge(&"A", &"C"),
            Err(WaypathError::EdgeNotFound { .. })
        ));
        assert!(matches!(
            graph.get_edge(&"C", &"A"),
            Err(WaypathError::EdgeNotFound { .. })
        ));
        assert_eq!(graph.outgoing(&"A").unwrap(), vec![(&"B", 1)]);
        assert!(graph.outgoing(&"B").unwrap().is_empty());

        let err = graph.remove_node(&"C").unwrap_err();
        assert!(matches!(err, WaypathError::NodeNotFound { .. }));
    }

    #[test]
    fn test_reused_slot_has_no_stale_edges() {
        let mut graph = triangle();
        graph.remove_node(&"B").unwrap();
        graph.insert_node("D").unwrap();

        assert!(!graph.contains_edge(&"A", &"D"));
        assert!(graph.outgoing(&"D").unwrap().is_empty());
        graph.insert_edge(&"D", &"A", 5).unwrap();
        assert_eq!(graph.get_edge(&"D", &"A").unwrap(), 5);
    }

    #[test]
    fn test_self_loop_removed_with_node() {
        let mut graph = triangle();
        graph.insert_edge(&"A", &"A", 0).unwrap();
        assert_eq!(graph.edge_count(), 5);
        graph.remove_node(&"A").unwrap();
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_graph_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Graph<String, f64>>();
    }

    #[test]
    fn test_clear() {
        let mut graph = triangle();
        graph.clear();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert!(!graph.contains_node(&"A"));
    }
}
