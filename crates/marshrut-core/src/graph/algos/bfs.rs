//! Breadth-first path finding

use std::collections::{HashSet, VecDeque};

use crate::graph::types::Graph;

#[cfg(test)]
mod tests;

/// Find a path with the fewest connections between two stations
///
/// Stations are explored level by level and marked visited when first
/// enqueued, so the first path to reach the goal has the minimum number
/// of connections. Neighbors are expanded in ascending lexicographic
/// order, which fixes the choice among equally short paths. Returns
/// `None` when either endpoint is unknown or no path exists.
#[tracing::instrument(skip(graph))]
pub fn find_path_bfs(graph: &Graph, start: &str, goal: &str) -> Option<Vec<String>> {
    if !graph.contains(start) || !graph.contains(goal) {
        return None;
    }

    if start == goal {
        return Some(vec![start.to_string()]);
    }

    let mut queue: VecDeque<(String, Vec<String>)> = VecDeque::new();
    queue.push_back((start.to_string(), vec![start.to_string()]));
    let mut visited: HashSet<String> = HashSet::new();
    visited.insert(start.to_string());

    while let Some((current, path)) = queue.pop_front() {
        for (neighbor, _) in graph.neighbors(&current) {
            if visited.contains(neighbor) {
                continue;
            }

            let mut next_path = path.clone();
            next_path.push(neighbor.to_string());

            // Goal test on enqueue saves one level of expansion
            if neighbor == goal {
                tracing::debug!(stations = next_path.len(), "bfs_path_found");
                return Some(next_path);
            }

            visited.insert(neighbor.to_string());
            queue.push_back((neighbor.to_string(), next_path));
        }
    }

    None
}
