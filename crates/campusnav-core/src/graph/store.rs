//! Graph store: owns the nodes and the directed weighted edges between them
//!
//! An undirected walking path between two buildings is represented as
//! two directed edges carrying the same weight; the loader inserts both
//! directions. The store itself does not enforce that symmetry.

use std::fmt;
use std::hash::Hash;

use crate::error::{CampusError, Result};
use crate::graph::key_index::KeyIndex;
use crate::graph::weight::EdgeWeight;

/// Node identity: comparable, hashable, printable.
pub trait NodeKey: Clone + Eq + Hash + fmt::Display {}

impl<T: Clone + Eq + Hash + fmt::Display> NodeKey for T {}

/// One stored node and the directed edges leaving it.
#[derive(Debug, Clone)]
struct NodeEntry<N, W> {
    edges_leaving: Vec<(N, W)>,
}

/// Weighted directed graph keyed by node identity.
#[derive(Debug, Clone)]
pub struct Graph<N, W> {
    nodes: KeyIndex<N, NodeEntry<N, W>>,
    edge_count: usize,
}

impl<N: NodeKey, W: EdgeWeight> Default for Graph<N, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeKey, W: EdgeWeight> Graph<N, W> {
    pub fn new() -> Self {
        Self {
            nodes: KeyIndex::new(),
            edge_count: 0,
        }
    }

    /// Insert a node with no outgoing edges.
    ///
    /// Idempotent: returns `true` when a node was created, `false` when
    /// the key was already present (the existing node is untouched).
    pub fn insert_node(&mut self, key: N) -> bool {
        if self.nodes.contains_key(&key) {
            return false;
        }
        self.nodes.insert(
            key,
            NodeEntry {
                edges_leaving: Vec::new(),
            },
        );
        true
    }

    /// Insert or overwrite the directed edge from → to.
    ///
    /// Fails with `UnknownLocation` when either endpoint is absent and
    /// with `InvalidWeight` when the weight is negative or non-finite;
    /// in both cases the store is left unchanged. Re-inserting an
    /// existing pair updates its weight instead of duplicating.
    pub fn insert_edge(&mut self, from: &N, to: &N, weight: W) -> Result<()> {
        if !self.nodes.contains_key(to) {
            return Err(CampusError::unknown_location(to));
        }
        if !weight.is_valid() {
            return Err(CampusError::invalid_weight(weight));
        }

        let entry = self.nodes.get_mut(from)?;
        if let Some(existing) = entry.edges_leaving.iter_mut().find(|(dest, _)| dest == to) {
            existing.1 = weight;
        } else {
            entry.edges_leaving.push((to.clone(), weight));
            self.edge_count += 1;
        }
        Ok(())
    }

    pub fn contains_node(&self, key: &N) -> bool {
        self.nodes.contains_key(key)
    }

    /// Number of stored nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of stored directed edges. Under the two-edges-per-path
    /// convention the undirected path count is `edge_count() / 2`.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// `(destination, weight)` pairs for all directed edges leaving
    /// `key`, in insertion order. Re-enumerable; fails with
    /// `UnknownLocation` when the key is absent.
    pub fn neighbors(&self, key: &N) -> Result<impl Iterator<Item = (&N, W)>> {
        let entry = self.nodes.get(key)?;
        Ok(entry.edges_leaving.iter().map(|(dest, weight)| (dest, *weight)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_with_nodes(keys: &[&str]) -> Graph<String, f64> {
        let mut graph = Graph::new();
        for key in keys {
            graph.insert_node((*key).to_string());
        }
        graph
    }

    #[test]
    fn test_insert_node_idempotent() {
        let mut graph: Graph<String, f64> = Graph::new();
        assert!(graph.insert_node("A".to_string()));
        assert!(!graph.insert_node("A".to_string()));
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_insert_edge_and_counts() {
        let mut graph = graph_with_nodes(&["A", "B"]);
        graph
            .insert_edge(&"A".to_string(), &"B".to_string(), 2.5)
            .unwrap();
        graph
            .insert_edge(&"B".to_string(), &"A".to_string(), 2.5)
            .unwrap();

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_insert_edge_overwrites_weight() {
        let mut graph = graph_with_nodes(&["A", "B"]);
        graph
            .insert_edge(&"A".to_string(), &"B".to_string(), 2.5)
            .unwrap();
        graph
            .insert_edge(&"A".to_string(), &"B".to_string(), 4.0)
            .unwrap();

        assert_eq!(graph.edge_count(), 1);
        let neighbors: Vec<_> = graph
            .neighbors(&"A".to_string())
            .unwrap()
            .map(|(dest, weight)| (dest.clone(), weight))
            .collect();
        assert_eq!(neighbors, vec![("B".to_string(), 4.0)]);
    }

    #[test]
    fn test_insert_edge_missing_endpoint() {
        let mut graph = graph_with_nodes(&["A"]);
        let err = graph
            .insert_edge(&"A".to_string(), &"B".to_string(), 1.0)
            .unwrap_err();
        assert!(matches!(err, CampusError::UnknownLocation { name } if name == "B"));
        assert_eq!(graph.edge_count(), 0);

        let err = graph
            .insert_edge(&"C".to_string(), &"A".to_string(), 1.0)
            .unwrap_err();
        assert!(matches!(err, CampusError::UnknownLocation { name } if name == "C"));
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_insert_edge_invalid_weight_leaves_store_unchanged() {
        let mut graph = graph_with_nodes(&["A", "B"]);
        for bad in [-1.0, f64::NAN, f64::INFINITY] {
            let err = graph
                .insert_edge(&"A".to_string(), &"B".to_string(), bad)
                .unwrap_err();
            assert!(matches!(err, CampusError::InvalidWeight { .. }));
        }
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.neighbors(&"A".to_string()).unwrap().count(), 0);
    }

    #[test]
    fn test_neighbors_missing_node() {
        let graph: Graph<String, f64> = Graph::new();
        assert!(graph.neighbors(&"A".to_string()).is_err());
    }

    #[test]
    fn test_neighbors_re_enumerable() {
        let mut graph = graph_with_nodes(&["A", "B", "C"]);
        graph
            .insert_edge(&"A".to_string(), &"B".to_string(), 1.0)
            .unwrap();
        graph
            .insert_edge(&"A".to_string(), &"C".to_string(), 2.0)
            .unwrap();

        for _ in 0..2 {
            assert_eq!(graph.neighbors(&"A".to_string()).unwrap().count(), 2);
        }
    }
}
