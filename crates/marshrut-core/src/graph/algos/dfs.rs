//! Depth-first path finding
//!
//! Two variants with deliberately different revisit rules:
//!
//! - [`find_path_dfs`] backtracks and only excludes stations on the
//!   current path, so a station rejected on one branch may still be used
//!   by another.
//! - [`find_path_dfs_iterative`] keeps a global visited set and never
//!   expands a station twice.
//!
//! Both return a simple path when one exists, not necessarily a shortest
//! one, and `None` when either endpoint is unknown or no path exists.

use std::collections::HashSet;

use crate::graph::types::Graph;


/// Find a path by depth-first exploration with backtracking
///
/// Neighbors are tried in ascending lexicographic order and the first
/// branch to reach the goal wins. The recursion is expressed as an
/// explicit stack of neighbor iterators, so path depth is bounded by
/// available memory rather than the call stack.
#[tracing::instrument(skip(graph))]
pub fn find_path_dfs(graph: &Graph, start: &str, goal: &str) -> Option<Vec<String>> {
    if !graph.contains(start) || !graph.contains(goal) {
        return None;
    }

    let mut path = vec![start.to_string()];
    if start == goal {
        return Some(path);
    }

    let mut on_path: HashSet<String> = HashSet::new();
    on_path.insert(start.to_string());

    // One frame per station on the current path
    let mut frames = vec![graph.neighbors(start)];

    while let Some(frame) = frames.last_mut() {
        let Some((neighbor, _)) = frame.next() else {
            // Branch exhausted, back up one station
            frames.pop();
            if let Some(dead_end) = path.pop() {
                on_path.remove(&dead_end);
            }
            continue;
        };

        if on_path.contains(neighbor) {
            continue;
        }

        path.push(neighbor.to_string());
        if neighbor == goal {
            tracing::debug!(stations = path.len(), "dfs_path_found");
            return Some(path);
        }

        on_path.insert(neighbor.to_string());
        frames.push(graph.neighbors(neighbor));
    }

    None
}

/// Find a path with an explicit stack and a global visited set
///
/// Unlike [`find_path_dfs`] a station is never expanded twice, even when a
/// different branch could reach it on a new path, so the two variants may
/// return different (both valid) routes. Neighbors are pushed in
/// descending order so the lexicographically first one pops first.
#[tracing::instrument(skip(graph))]
pub fn find_path_dfs_iterative(graph: &Graph, start: &str, goal: &str) -> Option<Vec<String>> {
    if !graph.contains(start) || !graph.contains(goal) {
        return None;
    }

    let mut stack = vec![(start.to_string(), vec![start.to_string()])];
    let mut visited: HashSet<String> = HashSet::new();

    while let Some((current, path)) = stack.pop() {
        if current == goal {
            tracing::debug!(stations = path.len(), "dfs_iterative_path_found");
            return Some(path);
        }

        if visited.contains(&current) {
            continue;
        }
        visited.insert(current.clone());

        let neighbors: Vec<&str> = graph.neighbors(&current).map(|(name, _)| name).collect();
        for neighbor in neighbors.into_iter().rev() {
            if !visited.contains(neighbor) {
                let mut next_path = path.clone();
                next_path.push(neighbor.to_string());
                stack.push((neighbor.to_string(), next_path));
            }
        }
    }

    None
}
