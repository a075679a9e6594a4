//! Stations command: list the network line by line

use crate::cli::Cli;
use marshrut_core::error::Result;
use marshrut_core::format::OutputFormat;
use marshrut_core::graph::{Graph, Line};
use marshrut_core::network::line_stations;

/// Execute the stations command
pub fn execute(cli: &Cli, graph: &Graph, line: Option<Line>) -> Result<()> {
    let lines: Vec<Line> = match line {
        Some(line) => vec![line],
        None => vec![Line::Red, Line::Blue, Line::Green],
    };

    match cli.format {
        OutputFormat::Json => output_json(graph, &lines)?,
        OutputFormat::Human => output_human(graph, &lines),
    }

    Ok(())
}

fn output_json(graph: &Graph, lines: &[Line]) -> Result<()> {
    let output: Vec<serde_json::Value> = lines
        .iter()
        .map(|line| {
            let stations: Vec<serde_json::Value> = line_stations(*line)
                .iter()
                .map(|station| {
                    serde_json::json!({
                        "name": station,
                        "interchange": graph.degree(station) > 2,
                    })
                })
                .collect();
            serde_json::json!({
                "line": line.as_str(),
                "stations": stations,
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_human(graph: &Graph, lines: &[Line]) {
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{} line:", line);
        for station in line_stations(*line) {
            if graph.degree(station) > 2 {
                println!("  {} (interchange)", station);
            } else {
                println!("  {}", station);
            }
        }
    }
}
