//! Dijkstra single-pair shortest path over the graph store

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::{CampusError, Result};
use crate::graph::key_index::KeyIndex;
use crate::graph::store::{Graph, NodeKey};
use crate::graph::weight::EdgeWeight;

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated cost)
#[derive(Debug, Clone)]
struct HeapEntry<W> {
    record: usize,
    accumulated_cost: W,
}

impl<W: EdgeWeight> PartialEq for HeapEntry<W> {
    fn eq(&self, other: &Self) -> bool {
        self.record == other.record && self.accumulated_cost == other.accumulated_cost
    }
}

impl<W: EdgeWeight> Eq for HeapEntry<W> {}

impl<W: EdgeWeight> PartialOrd for HeapEntry<W> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: EdgeWeight> Ord for HeapEntry<W> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Weights are validated finite at insertion, so the comparison
        // is total.
        self.accumulated_cost
            .partial_cmp(&other.accumulated_cost)
            .unwrap()
    }
}

/// One candidate partial path: the node it reaches, the cumulative cost
/// from the start, and the arena index of its predecessor record (none
/// for the start record).
#[derive(Debug, Clone)]
struct SearchRecord<N, W> {
    node: N,
    cost: W,
    predecessor: Option<usize>,
}

/// Result of one Dijkstra run: the arena of search records plus the
/// index of the terminal record for the requested end node.
///
/// The records form a write-once tree with index-based predecessor
/// links; it lives only as long as the views derived from it.
#[derive(Debug, Clone)]
pub struct SearchTree<N, W> {
    records: Vec<SearchRecord<N, W>>,
    terminal: usize,
}

impl<N: NodeKey, W: EdgeWeight> SearchTree<N, W> {
    /// Cumulative cost recorded at the terminal record.
    pub fn total_cost(&self) -> W {
        self.records[self.terminal].cost
    }

    /// Node keys from start to end, both inclusive.
    pub fn path(&self) -> Vec<N> {
        let mut keys = Vec::new();
        let mut current = Some(self.terminal);
        while let Some(index) = current {
            let record = &self.records[index];
            keys.push(record.node.clone());
            current = record.predecessor;
        }
        keys.reverse();
        keys
    }

    /// Per-segment costs in start → end order, derived as successive
    /// cost differences along the predecessor chain. Empty for a
    /// single-node path.
    pub fn segment_costs(&self) -> Vec<W> {
        let mut costs = Vec::new();
        let mut index = self.terminal;
        while let Some(pred) = self.records[index].predecessor {
            costs.push(self.records[index].cost - self.records[pred].cost);
            index = pred;
        }
        costs.reverse();
        costs
    }
}

/// Run Dijkstra's algorithm from `start`, stopping once `end` is
/// finalized, and return the search tree restricted to the path found.
///
/// The frontier allows duplicate entries per node instead of a
/// decrease-key operation; stale entries are discarded on pop.
/// Equal-cost entries pop in an order the heap leaves unspecified, so
/// any one of several equal-cost shortest paths may be returned.
///
/// Fails with `UnknownLocation` when either endpoint is absent from the
/// store (checked before the search) and `NoPathExists` when the
/// frontier drains without reaching `end`.
#[tracing::instrument(skip(graph), fields(start = %start, end = %end))]
pub fn shortest_path_tree<N: NodeKey, W: EdgeWeight>(
    graph: &Graph<N, W>,
    start: &N,
    end: &N,
) -> Result<SearchTree<N, W>> {
    if !graph.contains_node(start) {
        return Err(CampusError::unknown_location(start));
    }
    if !graph.contains_node(end) {
        return Err(CampusError::unknown_location(end));
    }

    let mut finalized: KeyIndex<N, ()> = KeyIndex::new();
    let mut records = vec![SearchRecord {
        node: start.clone(),
        cost: W::ZERO,
        predecessor: None,
    }];
    let mut frontier = BinaryHeap::new();
    frontier.push(Reverse(HeapEntry {
        record: 0,
        accumulated_cost: W::ZERO,
    }));

    while let Some(Reverse(HeapEntry {
        record,
        accumulated_cost,
    })) = frontier.pop()
    {
        let node = records[record].node.clone();

        // Stale duplicate from a later relaxation of the same node
        if finalized.contains_key(&node) {
            continue;
        }
        finalized.insert(node.clone(), ());

        if node == *end {
            tracing::debug!(cost = %accumulated_cost, expanded = finalized.len(), "path_found");
            return Ok(SearchTree { records, terminal: record });
        }

        for (next, weight) in graph.neighbors(&node)? {
            if finalized.contains_key(next) {
                continue;
            }
            let index = records.len();
            records.push(SearchRecord {
                node: next.clone(),
                cost: accumulated_cost + weight,
                predecessor: Some(record),
            });
            frontier.push(Reverse(HeapEntry {
                record: index,
                accumulated_cost: records[index].cost,
            }));
        }
    }

    Err(CampusError::no_path(start, end))
}

/// Node keys along the shortest path from `start` to `end`, both
/// inclusive. Re-runs the search on every call.
pub fn shortest_path<N: NodeKey, W: EdgeWeight>(
    graph: &Graph<N, W>,
    start: &N,
    end: &N,
) -> Result<Vec<N>> {
    Ok(shortest_path_tree(graph, start, end)?.path())
}

/// Total cost of the shortest path from `start` to `end`. Re-runs the
/// search on every call.
pub fn shortest_path_cost<N: NodeKey, W: EdgeWeight>(
    graph: &Graph<N, W>,
    start: &N,
    end: &N,
) -> Result<W> {
    Ok(shortest_path_tree(graph, start, end)?.total_cost())
}
