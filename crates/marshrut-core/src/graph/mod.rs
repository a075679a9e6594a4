//! Station graph model and path finding
//!
//! The metro network is an undirected graph with stations as nodes.
//! Three searches operate on it:
//!
//! - DFS ([`find_path_dfs`], [`find_path_dfs_iterative`]) finds some
//!   simple path
//! - BFS ([`find_path_bfs`]) finds a path with the fewest connections
//! - Dijkstra ([`shortest_paths_from`]) finds the fastest paths over
//!   assigned travel times

pub mod algos;
pub mod compare;
pub mod types;
pub mod weights;

pub use algos::bfs::find_path_bfs;
pub use algos::dfs::{find_path_dfs, find_path_dfs_iterative};
pub use algos::dijkstra::{reconstruct_path, shortest_paths_from, ShortestPaths};
pub use compare::{compare_paths, RouteComparison};
pub use types::{Connection, Graph, Line, Minutes, WeightedGraph};
pub use weights::{with_travel_times, TravelTimeConfig};
