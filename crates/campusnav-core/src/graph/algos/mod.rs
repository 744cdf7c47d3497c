//! Graph search algorithms

pub mod dijkstra;

pub use dijkstra::{shortest_path, shortest_path_cost, shortest_path_tree, SearchTree};
