//! Compare command: DFS and BFS side by side

use crate::cli::Cli;
use marshrut_core::error::Result;
use marshrut_core::format::OutputFormat;
use marshrut_core::graph::{compare_paths, Graph, RouteComparison};
use marshrut_core::network::resolve_station;

/// Execute the compare command
pub fn execute(cli: &Cli, graph: &Graph, from: &str, to: &str) -> Result<()> {
    let from = resolve_station(graph, from)?;
    let to = resolve_station(graph, to)?;

    let comparison = compare_paths(graph, &from, &to);

    match cli.format {
        OutputFormat::Json => output_json(&comparison)?,
        OutputFormat::Human => output_human(cli, &comparison),
    }

    Ok(())
}

fn output_json(comparison: &RouteComparison) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(comparison)?);
    Ok(())
}

fn output_human(cli: &Cli, comparison: &RouteComparison) {
    println!("{} -> {}", comparison.start, comparison.goal);

    print_route("BFS", comparison.bfs_length, comparison.bfs_path.as_deref());
    print_route("DFS", comparison.dfs_length, comparison.dfs_path.as_deref());

    if cli.quiet {
        return;
    }

    println!();
    if comparison.bfs_path.is_none() && comparison.dfs_path.is_none() {
        println!("No route found by either search");
    } else if comparison.bfs_length < comparison.dfs_length {
        println!(
            "BFS found a route {} stations shorter; DFS commits to a branch too early",
            comparison.dfs_length - comparison.bfs_length
        );
    } else if comparison.bfs_length > comparison.dfs_length {
        println!("DFS found the shorter route, which is unusual for this network");
    } else if comparison.bfs_path != comparison.dfs_path {
        println!("Both routes have the same length but pass through different stations");
    } else {
        println!("Both searches found the same route");
    }
}

fn print_route(label: &str, length: usize, path: Option<&[String]>) {
    println!();
    match path {
        Some(stations) => {
            println!("{} ({} stations):", label, length);
            println!("  {}", stations.join(" -> "));
        }
        None => println!("{}: no route", label),
    }
}
