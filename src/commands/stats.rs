//! Stats command: network analysis

use crate::cli::Cli;
use marshrut_core::error::Result;
use marshrut_core::format::OutputFormat;
use marshrut_core::graph::{with_travel_times, Graph, TravelTimeConfig};
use marshrut_core::stats::{analyze, journey_summary, JourneySummary, NetworkReport};

/// Execute the stats command
pub fn execute(cli: &Cli, graph: &Graph, travel_times: bool) -> Result<()> {
    let report = analyze(graph);

    let journeys = if travel_times {
        let weighted = with_travel_times(graph, &TravelTimeConfig::default())?;
        journey_summary(&weighted)
    } else {
        None
    };

    match cli.format {
        OutputFormat::Json => output_json(&report, journeys.as_ref())?,
        OutputFormat::Human => output_human(&report, journeys.as_ref()),
    }

    Ok(())
}

fn output_json(report: &NetworkReport, journeys: Option<&JourneySummary>) -> Result<()> {
    let mut value = serde_json::to_value(report)?;
    if let Some(journeys) = journeys {
        if let Some(object) = value.as_object_mut() {
            object.insert("journeys".to_string(), serde_json::to_value(journeys)?);
        }
    }
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn output_human(report: &NetworkReport, journeys: Option<&JourneySummary>) {
    println!("Stations:    {}", report.stations);
    println!("Connections: {}", report.connections);
    println!("Density:     {:.4}", report.density);
    println!("Connected:   {}", if report.connected { "yes" } else { "no" });
    if let Some(diameter) = report.diameter {
        println!("Diameter:    {} connections", diameter);
    }
    if let Some(avg) = report.avg_path_length {
        println!("Avg path:    {:.2} connections", avg);
    }

    println!();
    println!(
        "Degrees: min {}, max {}, avg {:.2}",
        report.min_degree, report.max_degree, report.avg_degree
    );
    for (degree, count) in &report.degree_distribution {
        println!("  degree {}: {} station(s)", degree, count);
    }

    if !report.interchanges.is_empty() {
        println!();
        println!("Interchanges:");
        for station in &report.interchanges {
            println!("  {}", station);
        }
    }

    println!();
    println!("Connections per line:");
    for (line, count) in &report.line_connections {
        println!("  {}: {}", line, count);
    }

    if let Some(journeys) = journeys {
        println!();
        println!(
            "Journeys: {} pairs, avg {:.1} min, min {:.1} min, max {:.1} min",
            journeys.pairs, journeys.avg_minutes, journeys.min_minutes, journeys.max_minutes
        );
        println!(
            "Longest:  {} -> {} ({} min, {} stations)",
            journeys.longest.from,
            journeys.longest.to,
            journeys.longest.minutes,
            journeys.longest.path.len()
        );
        println!(
            "Shortest: {} -> {} ({} min)",
            journeys.shortest.from, journeys.shortest.to, journeys.shortest.minutes
        );
    }
}
