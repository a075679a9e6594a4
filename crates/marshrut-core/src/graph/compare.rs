//! Side-by-side comparison of the unweighted searches

use serde::Serialize;

use crate::graph::algos::bfs::find_path_bfs;
use crate::graph::algos::dfs::find_path_dfs;
use crate::graph::types::Graph;

/// DFS and BFS routes for the same station pair
#[derive(Debug, Clone, Serialize)]
pub struct RouteComparison {
    pub start: String,
    pub goal: String,
    pub dfs_path: Option<Vec<String>>,
    pub bfs_path: Option<Vec<String>>,
    /// Station count of the DFS route, 0 when none was found
    pub dfs_length: usize,
    /// Station count of the BFS route, 0 when none was found
    pub bfs_length: usize,
}

/// Run both unweighted searches on the same pair
///
/// The backtracking DFS variant is the one compared. Lengths count
/// stations, with 0 standing in for "no route".
pub fn compare_paths(graph: &Graph, start: &str, goal: &str) -> RouteComparison {
    let dfs_path = find_path_dfs(graph, start, goal);
    let bfs_path = find_path_bfs(graph, start, goal);

    RouteComparison {
        start: start.to_string(),
        goal: goal.to_string(),
        dfs_length: dfs_path.as_ref().map_or(0, Vec::len),
        bfs_length: bfs_path.as_ref().map_or(0, Vec::len),
        dfs_path,
        bfs_path,
    }
}
