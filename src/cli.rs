//! CLI argument parsing for marshrut
//!
//! Uses clap for argument parsing. Supports global flags:
//! --format, --quiet, --verbose, --log-level, --log-json

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use marshrut_core::format::OutputFormat;
use marshrut_core::graph::Line;

/// Marshrut - Kyiv Metro route planner
#[derive(Parser, Debug)]
#[command(name = "marshrut")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human or json
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter: trace, debug, info, warn, error, or a full directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Search algorithm for the route command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Algorithm {
    /// Fastest route over travel times
    #[default]
    Dijkstra,
    /// Fewest stations
    Bfs,
    /// Depth-first with backtracking
    Dfs,
    /// Depth-first with a global visited set
    DfsIterative,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::DfsIterative => "dfs-iterative",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find a route between two stations
    Route {
        /// Departure station
        from: String,

        /// Destination station
        to: String,

        /// Search algorithm
        #[arg(long, value_enum, default_value_t = Algorithm::Dijkstra)]
        algo: Algorithm,

        /// Minutes between adjacent stations, before per-connection variation
        #[arg(long, env = "MARSHRUT_BASE_MINUTES", default_value_t = 2.5)]
        base_minutes: f64,

        /// Minutes for walking an interchange corridor
        #[arg(long, env = "MARSHRUT_TRANSFER_MINUTES", default_value_t = 5.0)]
        transfer_minutes: f64,
    },

    /// Compare DFS and BFS routes for the same pair
    Compare {
        /// Departure station
        from: String,

        /// Destination station
        to: String,
    },

    /// Show network statistics
    Stats {
        /// Include the all-pairs travel time summary
        #[arg(long)]
        travel_times: bool,
    },

    /// List stations line by line
    Stations {
        /// Restrict to one line
        #[arg(long, value_parser = parse_line)]
        line: Option<Line>,
    },

    /// Emit the network as Graphviz DOT
    Map {
        /// Write to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
}

/// Parse output format from string
fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a metro line name from string
fn parse_line(s: &str) -> Result<Line, String> {
    match s.to_lowercase().as_str() {
        "red" => Ok(Line::Red),
        "blue" => Ok(Line::Blue),
        "green" => Ok(Line::Green),
        other => Err(format!(
            "unknown line: {} (expected: red, blue or green)",
            other
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_defaults() {
        let cli = Cli::try_parse_from(["marshrut", "route", "Teatralna", "Lisova"]).unwrap();

        assert_eq!(cli.format, OutputFormat::Human);
        match cli.command {
            Some(Commands::Route {
                from,
                to,
                algo,
                base_minutes,
                transfer_minutes,
            }) => {
                assert_eq!(from, "Teatralna");
                assert_eq!(to, "Lisova");
                assert_eq!(algo, Algorithm::Dijkstra);
                assert_eq!(base_minutes, 2.5);
                assert_eq!(transfer_minutes, 5.0);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_algo_flag_accepts_kebab_case() {
        let cli = Cli::try_parse_from([
            "marshrut",
            "route",
            "A",
            "B",
            "--algo",
            "dfs-iterative",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Route { algo, .. }) => {
                assert_eq!(algo, Algorithm::DfsIterative);
                assert_eq!(algo.as_str(), "dfs-iterative");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_format_flag_is_global() {
        let cli = Cli::try_parse_from(["marshrut", "stats", "--format", "json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_unknown_format_is_a_parse_error() {
        let err = Cli::try_parse_from(["marshrut", "stats", "--format", "yaml"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_line_filter_parses() {
        let cli = Cli::try_parse_from(["marshrut", "stations", "--line", "green"]).unwrap();
        match cli.command {
            Some(Commands::Stations { line }) => assert_eq!(line, Some(Line::Green)),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_line_is_rejected() {
        assert!(Cli::try_parse_from(["marshrut", "stations", "--line", "purple"]).is_err());
    }

    #[test]
    fn test_no_command_is_allowed() {
        let cli = Cli::try_parse_from(["marshrut"]).unwrap();
        assert!(cli.command.is_none());
    }
}
