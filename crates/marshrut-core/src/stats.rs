//! Network analysis over the metro graph

use std::collections::{BTreeMap, HashMap, VecDeque};

use serde::Serialize;

use crate::graph::algos::dijkstra::shortest_paths_from;
use crate::graph::types::{Graph, Minutes, WeightedGraph};

/// Structural summary of the network
#[derive(Debug, Clone, Serialize)]
pub struct NetworkReport {
    pub stations: usize,
    pub connections: usize,
    /// 2m / (n * (n - 1)) for n stations and m connections
    pub density: f64,
    pub connected: bool,
    /// Longest shortest path in connections, `None` when disconnected
    pub diameter: Option<usize>,
    /// Mean shortest path length in connections, `None` when disconnected
    pub avg_path_length: Option<f64>,
    pub min_degree: usize,
    pub max_degree: usize,
    pub avg_degree: f64,
    /// Station count per degree
    pub degree_distribution: BTreeMap<usize, usize>,
    /// Stations serving more than one line
    pub interchanges: Vec<String>,
    /// Connection count per line
    pub line_connections: BTreeMap<String, usize>,
}

/// Analyze the structure of the network
#[tracing::instrument(skip(graph))]
pub fn analyze(graph: &Graph) -> NetworkReport {
    let stations = graph.station_count();
    let connections = graph.connection_count();

    let density = if stations > 1 {
        (2 * connections) as f64 / (stations * (stations - 1)) as f64
    } else {
        0.0
    };

    let degrees: Vec<usize> = graph.stations().map(|s| graph.degree(s)).collect();
    let min_degree = degrees.iter().copied().min().unwrap_or(0);
    let max_degree = degrees.iter().copied().max().unwrap_or(0);
    let avg_degree = if stations > 0 {
        degrees.iter().sum::<usize>() as f64 / stations as f64
    } else {
        0.0
    };

    let mut degree_distribution: BTreeMap<usize, usize> = BTreeMap::new();
    for degree in &degrees {
        *degree_distribution.entry(*degree).or_default() += 1;
    }

    let interchanges: Vec<String> = graph
        .stations()
        .filter(|s| graph.degree(s) > 2)
        .map(str::to_string)
        .collect();

    let mut line_connections: BTreeMap<String, usize> = BTreeMap::new();
    for a in graph.stations() {
        for (b, line) in graph.neighbors(a) {
            if a < b {
                *line_connections.entry(line.to_string()).or_default() += 1;
            }
        }
    }

    let (connected, diameter, avg_path_length) = path_metrics(graph);

    NetworkReport {
        stations,
        connections,
        density,
        connected,
        diameter,
        avg_path_length,
        min_degree,
        max_degree,
        avg_degree,
        degree_distribution,
        interchanges,
        line_connections,
    }
}

/// Connectivity, diameter and mean path length via all-pairs BFS
fn path_metrics(graph: &Graph) -> (bool, Option<usize>, Option<f64>) {
    let station_count = graph.station_count();
    if station_count == 0 {
        return (false, None, None);
    }
    if station_count == 1 {
        return (true, Some(0), Some(0.0));
    }

    let mut diameter = 0usize;
    let mut total_hops = 0usize;

    for source in graph.stations() {
        let reached = hop_distances(graph, source);
        if reached.len() != station_count {
            return (false, None, None);
        }
        for hops in reached.values() {
            diameter = diameter.max(*hops);
            total_hops += hops;
        }
    }

    let ordered_pairs = station_count * (station_count - 1);
    let avg = total_hops as f64 / ordered_pairs as f64;
    (true, Some(diameter), Some(avg))
}

/// Connections needed to reach every station visible from `source`
fn hop_distances(graph: &Graph, source: &str) -> HashMap<String, usize> {
    let mut distances = HashMap::new();
    distances.insert(source.to_string(), 0);
    let mut queue = VecDeque::new();
    queue.push_back(source.to_string());

    while let Some(current) = queue.pop_front() {
        let current_hops = distances[&current];
        for (neighbor, _) in graph.neighbors(&current) {
            if !distances.contains_key(neighbor) {
                distances.insert(neighbor.to_string(), current_hops + 1);
                queue.push_back(neighbor.to_string());
            }
        }
    }

    distances
}

/// One journey with its travel time and route
#[derive(Debug, Clone, Serialize)]
pub struct Journey {
    pub from: String,
    pub to: String,
    pub minutes: Minutes,
    pub path: Vec<String>,
}

/// Travel time statistics over every reachable station pair
#[derive(Debug, Clone, Serialize)]
pub struct JourneySummary {
    /// Ordered station pairs with a finite travel time
    pub pairs: usize,
    pub avg_minutes: f64,
    pub min_minutes: f64,
    pub max_minutes: f64,
    pub longest: Journey,
    pub shortest: Journey,
}

/// All-pairs travel time summary
///
/// `None` when no ordered pair of distinct stations is reachable.
#[tracing::instrument(skip(graph))]
pub fn journey_summary(graph: &WeightedGraph) -> Option<JourneySummary> {
    let mut pairs = 0usize;
    let mut total = 0.0f64;
    let mut longest: Option<Journey> = None;
    let mut shortest: Option<Journey> = None;

    for source in graph.stations() {
        let tree = shortest_paths_from(graph, source);
        for target in graph.stations() {
            if source == target {
                continue;
            }
            let minutes = tree.distance_to(target);
            if !minutes.is_finite() {
                continue;
            }

            pairs += 1;
            total += minutes.value();

            if longest
                .as_ref()
                .is_none_or(|journey| minutes.value() > journey.minutes.value())
            {
                longest = Some(Journey {
                    from: source.to_string(),
                    to: target.to_string(),
                    minutes,
                    path: tree.path_to(target),
                });
            }
            if shortest
                .as_ref()
                .is_none_or(|journey| minutes.value() < journey.minutes.value())
            {
                shortest = Some(Journey {
                    from: source.to_string(),
                    to: target.to_string(),
                    minutes,
                    path: tree.path_to(target),
                });
            }
        }
    }

    let longest = longest?;
    let shortest = shortest?;
    Some(JourneySummary {
        pairs,
        avg_minutes: total / pairs as f64,
        min_minutes: shortest.minutes.value(),
        max_minutes: longest.minutes.value(),
        longest,
        shortest,
    })
}
