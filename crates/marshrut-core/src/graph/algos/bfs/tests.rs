use super::*;
use crate::graph::algos::dfs::find_path_dfs;
use crate::graph::types::Line;

fn chain() -> Graph {
    let mut graph = Graph::new();
    graph.add_connection("A", "B", Line::Red).unwrap();
    graph.add_connection("B", "C", Line::Red).unwrap();
    graph.add_connection("C", "D", Line::Red).unwrap();
    graph
}

fn path_of(stations: &[&str]) -> Vec<String> {
    stations.iter().map(|s| s.to_string()).collect()
}

/// Test BFS walks a simple chain end to end
#[test]
fn test_bfs_on_chain() {
    let graph = chain();
    assert_eq!(
        find_path_bfs(&graph, "A", "D"),
        Some(path_of(&["A", "B", "C", "D"]))
    );
    assert_eq!(
        find_path_bfs(&graph, "D", "A"),
        Some(path_of(&["D", "C", "B", "A"]))
    );
}

/// Test BFS routes through a hub station
#[test]
fn test_bfs_through_hub() {
    let mut graph = Graph::new();
    graph.add_connection("P", "X", Line::Red).unwrap();
    graph.add_connection("X", "Q", Line::Blue).unwrap();
    graph.add_connection("X", "R", Line::Green).unwrap();

    assert_eq!(
        find_path_bfs(&graph, "P", "Q"),
        Some(path_of(&["P", "X", "Q"]))
    );
}

/// Test BFS finds the short way around a cycle where DFS takes the long one
#[test]
fn test_bfs_takes_the_short_side_of_a_cycle() {
    // A-B-C-D-E plus a direct A-E connection
    let mut graph = Graph::new();
    graph.add_connection("A", "B", Line::Red).unwrap();
    graph.add_connection("B", "C", Line::Red).unwrap();
    graph.add_connection("C", "D", Line::Red).unwrap();
    graph.add_connection("D", "E", Line::Red).unwrap();
    graph.add_connection("A", "E", Line::Blue).unwrap();

    assert_eq!(find_path_bfs(&graph, "A", "E"), Some(path_of(&["A", "E"])));
    // The backtracking search commits to the B branch first
    assert_eq!(
        find_path_dfs(&graph, "A", "E"),
        Some(path_of(&["A", "B", "C", "D", "E"]))
    );
}

/// Test BFS breaks length ties toward the lexicographically first branch
#[test]
fn test_bfs_tie_break_is_lexicographic() {
    // Two routes of equal length from S to G, through M and through T
    let mut graph = Graph::new();
    graph.add_connection("S", "M", Line::Red).unwrap();
    graph.add_connection("S", "T", Line::Blue).unwrap();
    graph.add_connection("M", "G", Line::Red).unwrap();
    graph.add_connection("T", "G", Line::Blue).unwrap();

    assert_eq!(
        find_path_bfs(&graph, "S", "G"),
        Some(path_of(&["S", "M", "G"]))
    );
}

/// Test BFS returns the singleton path when start equals goal
#[test]
fn test_bfs_start_equals_goal() {
    let graph = chain();
    assert_eq!(find_path_bfs(&graph, "C", "C"), Some(path_of(&["C"])));
}

/// Test BFS returns None for unknown endpoints
#[test]
fn test_bfs_unknown_endpoints() {
    let graph = chain();
    assert_eq!(find_path_bfs(&graph, "A", "Nowhere"), None);
    assert_eq!(find_path_bfs(&graph, "Nowhere", "D"), None);
}

/// Test BFS returns None when the goal is in another component
#[test]
fn test_bfs_disconnected_goal() {
    let mut graph = chain();
    graph.add_station("Alone");
    assert_eq!(find_path_bfs(&graph, "A", "Alone"), None);
    assert_eq!(find_path_bfs(&graph, "Alone", "A"), None);
}

/// Test BFS paths are never longer than DFS paths for the same pair
#[test]
fn test_bfs_is_never_longer_than_dfs() {
    let mut graph = Graph::new();
    graph.add_connection("A", "B", Line::Red).unwrap();
    graph.add_connection("B", "C", Line::Red).unwrap();
    graph.add_connection("C", "D", Line::Red).unwrap();
    graph.add_connection("A", "D", Line::Blue).unwrap();
    graph.add_connection("B", "D", Line::Green).unwrap();

    for goal in ["B", "C", "D"] {
        let bfs = find_path_bfs(&graph, "A", goal).unwrap();
        let dfs = find_path_dfs(&graph, "A", goal).unwrap();
        assert!(bfs.len() <= dfs.len());
    }
}
