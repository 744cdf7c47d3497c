//! Campus session: one loaded dataset and the queries against it
//!
//! A `Campus` owns the building graph parsed from a DOT-style dataset
//! plus the running total of all path weights, accumulated at load
//! time. Loading a new dataset builds a fresh session; nothing is
//! mutated in place.

use std::fs;
use std::path::Path;

use regex::Regex;
use serde::Serialize;

use crate::error::{CampusError, Result};
use crate::graph::Graph;
use crate::route::Route;

/// One undirected record per line: `"A" -- "B" [seconds=W];`
const RECORD_PATTERN: &str = r#"^"([^"]+)"\s*--\s*"([^"]+)"\s*\[seconds=([0-9]*\.?[0-9]+)\];$"#;

/// Dataset statistics snapshot
#[derive(Debug, Clone, Serialize)]
pub struct Statistics {
    /// Number of buildings (nodes)
    pub buildings: usize,
    /// Number of undirected paths connecting buildings
    pub paths: usize,
    /// Sum of all path weights, counted once per undirected record
    pub total_walking_time: f64,
}

/// A loaded campus dataset
#[derive(Debug, Clone)]
pub struct Campus {
    graph: Graph<String, f64>,
    total_walking_time: f64,
}

impl Campus {
    /// Load a campus dataset from a `.dot` file.
    ///
    /// Each record inserts both endpoint buildings and both directed
    /// edges, and adds its weight once to the running total. Structural
    /// lines (`graph … {`, `}`) and blank lines are skipped; anything
    /// else that does not match the record syntax fails the load.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.extension().and_then(|ext| ext.to_str()) != Some("dot") {
            return Err(CampusError::invalid_dataset(path, "not a .dot file"));
        }

        let record_re =
            Regex::new(RECORD_PATTERN).map_err(|e| CampusError::Other(e.to_string()))?;
        let contents = fs::read_to_string(path)?;

        let mut campus = Campus {
            graph: Graph::new(),
            total_walking_time: 0.0,
        };
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.ends_with('{') || line.ends_with('}') {
                continue;
            }
            let captures = record_re.captures(line).ok_or_else(|| {
                CampusError::invalid_dataset(path, format!("malformed record: {line}"))
            })?;

            let from = captures[1].to_string();
            let to = captures[2].to_string();
            let weight: f64 = captures[3].parse().map_err(|_| {
                CampusError::invalid_dataset(path, format!("bad weight in record: {line}"))
            })?;

            campus.graph.insert_node(from.clone());
            campus.graph.insert_node(to.clone());
            // Undirected path: one directed edge each way
            campus.graph.insert_edge(&from, &to, weight)?;
            campus.graph.insert_edge(&to, &from, weight)?;
            campus.total_walking_time += weight;
        }

        tracing::debug!(
            buildings = campus.building_count(),
            paths = campus.path_count(),
            total = campus.total_walking_time,
            "dataset_loaded"
        );
        Ok(campus)
    }

    pub fn graph(&self) -> &Graph<String, f64> {
        &self.graph
    }

    pub fn building_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Undirected path count (two directed edges per path).
    pub fn path_count(&self) -> usize {
        self.graph.edge_count() / 2
    }

    pub fn total_walking_time(&self) -> f64 {
        self.total_walking_time
    }

    pub fn statistics(&self) -> Statistics {
        Statistics {
            buildings: self.building_count(),
            paths: self.path_count(),
            total_walking_time: self.total_walking_time,
        }
    }

    /// Shortest route between two buildings; fails with
    /// `UnknownLocation` when either name is not in the dataset.
    pub fn route(&self, start: &str, end: &str) -> Result<Route<'_, String, f64>> {
        Route::new(&self.graph, start.to_string(), end.to_string())
    }
}
