//! Campusnav Core Library
//!
//! Core domain logic for campusnav: the generic weighted graph with
//! Dijkstra shortest-path search, the route view over one query, and
//! the campus session that loads DOT-style datasets.

pub mod campus;
pub mod error;
pub mod graph;
pub mod logging;
pub mod route;
