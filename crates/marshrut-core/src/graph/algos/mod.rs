//! Path-finding algorithms over the station graph

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
