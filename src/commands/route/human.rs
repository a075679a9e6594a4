//! Human-readable output for the route command

use crate::cli::Cli;

use super::RouteReport;

/// Output in human-readable format
pub fn output_route_human(cli: &Cli, report: &RouteReport) {
    if !report.found {
        if !cli.quiet {
            println!("No route from {} to {}", report.from, report.to);
        }
        return;
    }

    println!("{} -> {} ({})", report.from, report.to, report.algorithm);
    match report.total_minutes {
        Some(minutes) => println!("{} stations, about {} min", report.stations.len(), minutes),
        None => println!("{} stations", report.stations.len()),
    }
    println!();

    for (i, station) in report.stations.iter().enumerate() {
        if i == 0 {
            println!("  {:>8}  {}", "start", station);
        } else {
            // Label each station with the line of the connection reaching it
            let leg = &report.legs[i - 1];
            match leg.minutes {
                Some(minutes) => println!("  {:>8}  {}  (+{} min)", leg.line, station, minutes),
                None => println!("  {:>8}  {}", leg.line, station),
            }
        }
    }
}
