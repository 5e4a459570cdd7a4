use crate::error::{Result, WaypathError};
use crate::graph::GraphProvider;
use crate::table::HashTable;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;
use std::hash::Hash;

/// Number of destinations returned by `k_nearest` when no limit is configured
pub const DEFAULT_NEAREST_LIMIT: usize = 10;

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated cost)
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeapEntry {
    pub(crate) slot: usize,
    pub(crate) accumulated_cost: f64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.accumulated_cost.total_cmp(&other.accumulated_cost)
    }
}

/// One explored path: the node it ends at, its total cost from the start,
/// and the arena slot of the path it extends.
#[derive(Debug)]
pub struct SearchNode<'g, N> {
    pub key: &'g N,
    pub cost: f64,
    pub predecessor: Option<usize>,
}

/// Search nodes created by one query plus the slot of the one that reached
/// the destination
#[derive(Debug)]
pub struct SearchTree<'g, N> {
    nodes: Vec<SearchNode<'g, N>>,
    terminal: usize,
}

impl<'g, N> SearchTree<'g, N> {
    /// Total cost of the shortest path
    pub fn cost(&self) -> f64 {
        self.nodes[self.terminal].cost
    }

    /// Keys along the shortest path, start first
    pub fn keys(&self) -> Vec<&'g N> {
        let mut keys = Vec::new();
        let mut current = Some(self.terminal);
        while let Some(slot) = current {
            let node = &self.nodes[slot];
            keys.push(node.key);
            current = node.predecessor;
        }
        keys.reverse();
        keys
    }

    /// Number of nodes on the shortest path, endpoints included
    pub fn len(&self) -> usize {
        self.keys().len()
    }

    /// Always false for a found path; it holds at least the start
    pub fn is_empty(&self) -> bool {
        self.keys().is_empty()
    }
}

impl<N: Clone> SearchTree<'_, N> {
    /// Owned keys along the shortest path, start first
    pub fn path(&self) -> Vec<N> {
        self.keys().into_iter().cloned().collect()
    }
}

/// State tracked during one Dijkstra run
struct DijkstraState<'g, N> {
    nodes: Vec<SearchNode<'g, N>>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    visited: HashTable<&'g N, usize>,
}

impl<'g, N: Hash + Eq + Debug> DijkstraState<'g, N> {
    fn new(start: &'g N) -> Self {
        let mut state = Self {
            nodes: Vec::new(),
            heap: BinaryHeap::new(),
            visited: HashTable::new(),
        };
        state.push(start, 0.0, None);
        state
    }

    fn push(&mut self, key: &'g N, cost: f64, predecessor: Option<usize>) {
        let slot = self.nodes.len();
        self.nodes.push(SearchNode {
            key,
            cost,
            predecessor,
        });
        self.heap.push(Reverse(HeapEntry {
            slot,
            accumulated_cost: cost,
        }));
    }

    /// Pop the cheapest search node whose key has not been finalized yet
    fn pop_unvisited(&mut self) -> Option<usize> {
        while let Some(Reverse(HeapEntry { slot, .. })) = self.heap.pop() {
            if !self.visited.contains_key(&self.nodes[slot].key) {
                return Some(slot);
            }
        }
        None
    }

    /// Mark `slot` as final and queue every unvisited neighbour
    fn expand<P>(&mut self, provider: &'g P, slot: usize) -> Result<()>
    where
        P: GraphProvider<N> + ?Sized,
    {
        let key = self.nodes[slot].key;
        let cost = self.nodes[slot].cost;
        self.visited.put(key, slot)?;

        for (target, weight) in provider.outbound_edges(key) {
            if !self.visited.contains_key(&target) {
                self.push(target, cost + weight, Some(slot));
            }
        }
        Ok(())
    }
}

fn resolve<'g, N, P>(provider: &'g P, key: &N) -> Result<&'g N>
where
    N: Debug,
    P: GraphProvider<N> + ?Sized,
{
    provider
        .node_key(key)
        .ok_or_else(|| WaypathError::node_not_found(key))
}

/// Run Dijkstra from `start` until `end` is finalized.
///
/// Stale heap entries for nodes that were already finalized are skipped
/// when popped rather than removed eagerly.
#[tracing::instrument(skip_all, fields(start = ?start, end = ?end))]
pub fn compute_shortest_path<'g, N, P>(
    provider: &'g P,
    start: &N,
    end: &N,
) -> Result<SearchTree<'g, N>>
where
    N: Hash + Eq + Debug,
    P: GraphProvider<N> + ?Sized,
{
    let start_key = resolve(provider, start)?;
    resolve(provider, end)?;

    let mut state = DijkstraState::new(start_key);
    while let Some(slot) = state.pop_unvisited() {
        if state.nodes[slot].key == end {
            tracing::trace!(explored = state.nodes.len(), "path_found");
            return Ok(SearchTree {
                nodes: state.nodes,
                terminal: slot,
            });
        }
        state.expand(provider, slot)?;
    }

    Err(WaypathError::path_not_found(start, end))
}

/// Total cost of the cheapest path from `start` to `end`
pub fn shortest_path_cost<N, P>(provider: &P, start: &N, end: &N) -> Result<f64>
where
    N: Hash + Eq + Debug,
    P: GraphProvider<N> + ?Sized,
{
    compute_shortest_path(provider, start, end).map(|tree| tree.cost())
}

/// Keys along the cheapest path from `start` to `end`, both included
pub fn shortest_path_data<N, P>(provider: &P, start: &N, end: &N) -> Result<Vec<N>>
where
    N: Hash + Eq + Clone + Debug,
    P: GraphProvider<N> + ?Sized,
{
    compute_shortest_path(provider, start, end).map(|tree| tree.path())
}

/// Cost of the cheapest path from `start` to every reachable node,
/// `start` itself included at cost 0, in order of finalization
#[tracing::instrument(skip_all, fields(start = ?start))]
pub fn costs_from<'g, N, P>(provider: &'g P, start: &N) -> Result<Vec<(&'g N, f64)>>
where
    N: Hash + Eq + Debug,
    P: GraphProvider<N> + ?Sized,
{
    let start_key = resolve(provider, start)?;

    let mut state = DijkstraState::new(start_key);
    let mut finalized = Vec::new();
    while let Some(slot) = state.pop_unvisited() {
        finalized.push((state.nodes[slot].key, state.nodes[slot].cost));
        state.expand(provider, slot)?;
    }
    Ok(finalized)
}

/// The `k` nodes closest to `start` by path cost, cheapest first.
///
/// Unreachable nodes are left out. Equal costs are ordered by key.
/// Fails with [`WaypathError::NoReachableNodes`] when nothing besides
/// `start` can be reached.
pub fn k_nearest<N, P>(provider: &P, start: &N, k: usize) -> Result<Vec<N>>
where
    N: Hash + Eq + Ord + Clone + Debug,
    P: GraphProvider<N> + ?Sized,
{
    let mut reachable: Vec<(&N, f64)> = costs_from(provider, start)?
        .into_iter()
        .filter(|(key, _)| *key != start)
        .collect();

    if reachable.is_empty() {
        return Err(WaypathError::no_reachable_nodes(start));
    }

    reachable.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(b.0)));
    Ok(reachable
        .into_iter()
        .take(k)
        .map(|(key, _)| key.clone())
        .collect())
}
