//! Path result for one (start, end) shortest-route query

use crate::error::{CampusError, Result};
use crate::graph::{shortest_path_tree, EdgeWeight, Graph, NodeKey};

/// Read-only view over the shortest route between two locations.
///
/// Construction validates both endpoints eagerly, so building a
/// `Route` alone confirms the locations exist even before any search
/// runs. Each accessor re-runs the search against the borrowed graph;
/// nothing is cached, and an accessor fails with `NoPathExists` when
/// the endpoints are not connected.
#[derive(Debug)]
pub struct Route<'g, N, W> {
    graph: &'g Graph<N, W>,
    start: N,
    end: N,
}

impl<'g, N: NodeKey, W: EdgeWeight> Route<'g, N, W> {
    pub fn new(graph: &'g Graph<N, W>, start: N, end: N) -> Result<Self> {
        if !graph.contains_node(&start) {
            return Err(CampusError::unknown_location(&start));
        }
        if !graph.contains_node(&end) {
            return Err(CampusError::unknown_location(&end));
        }
        Ok(Self { graph, start, end })
    }

    pub fn start(&self) -> &N {
        &self.start
    }

    pub fn end(&self) -> &N {
        &self.end
    }

    /// Ordered key sequence from start to end, both inclusive.
    pub fn path(&self) -> Result<Vec<N>> {
        Ok(shortest_path_tree(self.graph, &self.start, &self.end)?.path())
    }

    /// Per-segment costs along the path, start → end order; length is
    /// always `path().len() - 1`.
    pub fn segment_times(&self) -> Result<Vec<W>> {
        Ok(shortest_path_tree(self.graph, &self.start, &self.end)?.segment_costs())
    }

    /// Total cost of the route, equal to the sum of the segment times.
    pub fn total_cost(&self) -> Result<W> {
        Ok(shortest_path_tree(self.graph, &self.start, &self.end)?.total_cost())
    }
}
