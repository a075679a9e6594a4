//! Command dispatch logic for marshrut

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use marshrut_core::error::Result;
use marshrut_core::graph::TravelTimeConfig;
use marshrut_core::network;

/// Run the parsed command
pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let graph = network::kyiv_metro()?;

    if cli.verbose {
        eprintln!("build_network: {:?}", start.elapsed());
    }

    match &cli.command {
        None => handle_no_command(),

        Some(Commands::Route {
            from,
            to,
            algo,
            base_minutes,
            transfer_minutes,
        }) => commands::route::execute(
            cli,
            &graph,
            from,
            to,
            *algo,
            TravelTimeConfig {
                base_minutes: *base_minutes,
                transfer_minutes: *transfer_minutes,
            },
        ),

        Some(Commands::Compare { from, to }) => commands::compare::execute(cli, &graph, from, to),

        Some(Commands::Stats { travel_times }) => {
            commands::stats::execute(cli, &graph, *travel_times)
        }

        Some(Commands::Stations { line }) => commands::stations::execute(cli, &graph, *line),

        Some(Commands::Map { output }) => commands::map::execute(cli, &graph, output.as_deref()),
    }
}

// ============================================================================
// Command Handlers
// ============================================================================

fn handle_no_command() -> Result<()> {
    println!("marshrut {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("A Kyiv Metro route planner for terminals and scripts.");
    println!();
    println!("Run `marshrut --help` for usage information.");
    Ok(())
}
