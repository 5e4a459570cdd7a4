use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::store::Graph;
use crate::graph::types::EdgeWeight;

/// Read-only view of a graph consumed by the path-finding algorithms
pub trait GraphProvider<N> {
    /// The provider's own copy of `key`, if such a node exists
    fn node_key(&self, key: &N) -> Option<&N>;

    /// Outgoing edges of `key` as `(target, cost)`; empty for unknown nodes
    fn outbound_edges(&self, key: &N) -> Vec<(&N, f64)>;

    fn node_keys(&self) -> Vec<&N>;
}

impl<N, W> GraphProvider<N> for Graph<N, W>
where
    N: Hash + Eq + Clone + Debug,
    W: EdgeWeight,
{
    fn node_key(&self, key: &N) -> Option<&N> {
        self.get_node(key)
    }

    fn outbound_edges(&self, key: &N) -> Vec<(&N, f64)> {
        self.outgoing(key)
            .map(|edges| {
                edges
                    .into_iter()
                    .map(|(target, weight)| (target, weight.cost()))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn node_keys(&self) -> Vec<&N> {
        self.all_nodes().collect()
    }
}
