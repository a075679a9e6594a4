//! Route command: find a path between two stations

mod human;
mod json;

use serde::Serialize;

use crate::cli::{Algorithm, Cli};
use marshrut_core::error::Result;
use marshrut_core::format::OutputFormat;
use marshrut_core::graph::{
    find_path_bfs, find_path_dfs, find_path_dfs_iterative, shortest_paths_from, with_travel_times,
    Graph, Minutes, TravelTimeConfig,
};
use marshrut_core::network::resolve_station;

/// One traversed connection of a reported route
#[derive(Debug, Clone, Serialize)]
pub struct RouteLeg {
    pub from: String,
    pub to: String,
    pub line: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes: Option<Minutes>,
}

/// Route lookup result, shared by both output formats
#[derive(Debug, Clone, Serialize)]
pub struct RouteReport {
    pub from: String,
    pub to: String,
    pub algorithm: String,
    pub found: bool,
    pub stations: Vec<String>,
    pub legs: Vec<RouteLeg>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_minutes: Option<Minutes>,
}

/// Execute the route command
pub fn execute(
    cli: &Cli,
    graph: &Graph,
    from: &str,
    to: &str,
    algo: Algorithm,
    config: TravelTimeConfig,
) -> Result<()> {
    let from = resolve_station(graph, from)?;
    let to = resolve_station(graph, to)?;

    let report = match algo {
        Algorithm::Dijkstra => dijkstra_report(graph, &from, &to, &config)?,
        Algorithm::Bfs => unweighted_report(graph, &from, &to, algo, find_path_bfs),
        Algorithm::Dfs => unweighted_report(graph, &from, &to, algo, find_path_dfs),
        Algorithm::DfsIterative => {
            unweighted_report(graph, &from, &to, algo, find_path_dfs_iterative)
        }
    };

    match cli.format {
        OutputFormat::Json => json::output_route_json(&report)?,
        OutputFormat::Human => human::output_route_human(cli, &report),
    }

    Ok(())
}

fn unweighted_report(
    graph: &Graph,
    from: &str,
    to: &str,
    algo: Algorithm,
    search: fn(&Graph, &str, &str) -> Option<Vec<String>>,
) -> RouteReport {
    let stations = search(graph, from, to).unwrap_or_default();
    let found = !stations.is_empty();
    let legs = unweighted_legs(graph, &stations);

    RouteReport {
        from: from.to_string(),
        to: to.to_string(),
        algorithm: algo.as_str().to_string(),
        found,
        stations,
        legs,
        total_minutes: None,
    }
}

fn unweighted_legs(graph: &Graph, stations: &[String]) -> Vec<RouteLeg> {
    stations
        .windows(2)
        .map(|pair| RouteLeg {
            from: pair[0].clone(),
            to: pair[1].clone(),
            line: graph
                .connection_line(&pair[0], &pair[1])
                .map_or_else(|| "unknown".to_string(), |line| line.to_string()),
            minutes: None,
        })
        .collect()
}

fn dijkstra_report(
    graph: &Graph,
    from: &str,
    to: &str,
    config: &TravelTimeConfig,
) -> Result<RouteReport> {
    let weighted = with_travel_times(graph, config)?;
    let tree = shortest_paths_from(&weighted, from);
    let stations = tree.path_to(to);
    let found = !stations.is_empty();

    let legs: Vec<RouteLeg> = stations
        .windows(2)
        .map(|pair| {
            let connection = weighted.connection(&pair[0], &pair[1]);
            RouteLeg {
                from: pair[0].clone(),
                to: pair[1].clone(),
                line: connection.map_or_else(|| "unknown".to_string(), |c| c.line.to_string()),
                minutes: connection.map(|c| c.minutes),
            }
        })
        .collect();

    let total_minutes = found.then(|| tree.distance_to(to));

    Ok(RouteReport {
        from: from.to_string(),
        to: to.to_string(),
        algorithm: Algorithm::Dijkstra.as_str().to_string(),
        found,
        stations,
        legs,
        total_minutes,
    })
}
