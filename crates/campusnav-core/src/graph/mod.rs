//! Generic weighted graph with shortest-path search
//!
//! Provides the pieces the campus session is built from:
//! - a keyed node index
//! - a directed weighted graph store (two directed edges per
//!   undirected path, inserted by the caller)
//! - Dijkstra single-pair shortest path

pub mod algos;
pub mod key_index;
pub mod store;
pub mod weight;

pub use algos::{shortest_path, shortest_path_cost, shortest_path_tree, SearchTree};
pub use key_index::KeyIndex;
pub use store::{Graph, NodeKey};
pub use weight::EdgeWeight;
