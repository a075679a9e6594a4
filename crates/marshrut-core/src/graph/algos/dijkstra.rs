//! Dijkstra shortest paths over travel times

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::graph::types::{Minutes, WeightedGraph};


/// Wrapper for BinaryHeap to use as min-heap, ordered by accumulated
/// minutes with the station name as tie-breaker
#[derive(Debug, Clone)]
struct HeapEntry {
    station: String,
    accumulated: Minutes,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Accumulated minutes are sums of finite connection times, never NaN
        self.accumulated
            .value()
            .partial_cmp(&other.accumulated.value())
            .unwrap()
            .then_with(|| self.station.cmp(&other.station))
    }
}

/// Single-source shortest-path tree produced by [`shortest_paths_from`]
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    /// Station the search started from
    pub source: String,
    /// Minimal travel minutes to every station, infinite when unreachable
    pub distances: HashMap<String, Minutes>,
    /// Previous station on one minimal route, for every reached station
    /// except the source
    pub predecessors: HashMap<String, String>,
}

impl ShortestPaths {
    /// Minutes to reach a station, infinite when unreachable or unknown
    pub fn distance_to(&self, station: &str) -> Minutes {
        self.distances
            .get(station)
            .copied()
            .unwrap_or(Minutes::INFINITY)
    }

    /// Route from the source to a station, empty when unreachable
    pub fn path_to(&self, target: &str) -> Vec<String> {
        reconstruct_path(&self.predecessors, &self.source, target)
    }
}

/// Compute minimal travel minutes from `source` to every station
///
/// Classic Dijkstra over a binary min-heap. Stale heap entries are
/// skipped on pop instead of being re-keyed, and a station is final
/// the first time it leaves the heap. Relaxation is strict, so the
/// predecessor of a station is the first minimal route that reached
/// it. Runs in O((V + E) log V).
///
/// An unknown source yields all-infinite distances and an empty
/// predecessor map.
#[tracing::instrument(skip(graph))]
pub fn shortest_paths_from(graph: &WeightedGraph, source: &str) -> ShortestPaths {
    let mut distances: HashMap<String, Minutes> = graph
        .stations()
        .map(|station| (station.to_string(), Minutes::INFINITY))
        .collect();
    let mut predecessors: HashMap<String, String> = HashMap::new();
    let mut finalized: HashSet<String> = HashSet::new();
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();

    if graph.contains(source) {
        distances.insert(source.to_string(), Minutes::ZERO);
        heap.push(Reverse(HeapEntry {
            station: source.to_string(),
            accumulated: Minutes::ZERO,
        }));
    }

    while let Some(Reverse(HeapEntry {
        station: current,
        accumulated,
    })) = heap.pop()
    {
        if !finalized.insert(current.clone()) {
            continue;
        }

        // Stale entry, a shorter route was already recorded
        if accumulated > distances[&current] {
            continue;
        }

        for (neighbor, connection) in graph.neighbors(&current) {
            if finalized.contains(neighbor) {
                continue;
            }

            let candidate = accumulated + connection.minutes;
            if candidate < distances[neighbor] {
                distances.insert(neighbor.to_string(), candidate);
                predecessors.insert(neighbor.to_string(), current.clone());
                heap.push(Reverse(HeapEntry {
                    station: neighbor.to_string(),
                    accumulated: candidate,
                }));
            }
        }
    }

    tracing::debug!(
        stations = distances.len(),
        reached = finalized.len(),
        "dijkstra_complete"
    );

    ShortestPaths {
        source: source.to_string(),
        distances,
        predecessors,
    }
}

/// Walk predecessor links backward from `target` and reverse the result
///
/// Expects a predecessor map from [`shortest_paths_from`]. Returns an
/// empty vector when the walk does not end at `source`, which callers
/// treat as "no route". A target equal to the source yields the
/// singleton path.
pub fn reconstruct_path(
    predecessors: &HashMap<String, String>,
    source: &str,
    target: &str,
) -> Vec<String> {
    let mut path = Vec::new();
    let mut current = Some(target);

    while let Some(station) = current {
        path.push(station.to_string());
        current = predecessors.get(station).map(String::as_str);
    }

    path.reverse();

    if path.first().map(String::as_str) == Some(source) {
        path
    } else {
        Vec::new()
    }
}
