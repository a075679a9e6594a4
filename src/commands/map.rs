//! Map command: Graphviz DOT export of the network

use std::fs;
use std::path::Path;

use crate::cli::Cli;
use marshrut_core::error::Result;
use marshrut_core::graph::{Graph, Line};

const INTERCHANGE_FILL: &str = "#E9C46A";
const STATION_FILL: &str = "#A8DADC";

fn line_color(line: Line) -> &'static str {
    match line {
        Line::Red => "#E63946",
        Line::Blue => "#457B9D",
        Line::Green => "#2A9D8F",
        Line::Transfer => "#F4A261",
    }
}

/// Execute the map command
pub fn execute(cli: &Cli, graph: &Graph, output: Option<&Path>) -> Result<()> {
    let dot = render_dot(graph);

    match output {
        Some(path) => {
            fs::write(path, &dot)?;
            if !cli.quiet {
                println!("Map written to {}", path.display());
            }
        }
        None => print!("{}", dot),
    }

    Ok(())
}

/// Render the network as an undirected Graphviz graph
///
/// Line connections are colored per line, transfer corridors are dashed,
/// and interchange stations get a distinct fill.
fn render_dot(graph: &Graph) -> String {
    let mut dot = String::new();
    dot.push_str("graph kyiv_metro {\n");
    dot.push_str("  layout=neato;\n");
    dot.push_str("  overlap=false;\n");
    dot.push_str("  node [shape=ellipse, style=filled, fontsize=9];\n\n");

    for station in graph.stations() {
        let fill = if graph.degree(station) > 2 {
            INTERCHANGE_FILL
        } else {
            STATION_FILL
        };
        dot.push_str(&format!("  \"{}\" [fillcolor=\"{}\"];\n", station, fill));
    }

    dot.push('\n');
    for a in graph.stations() {
        for (b, line) in graph.neighbors(a) {
            // Each undirected connection once
            if a < b {
                let style = if line.is_transfer() {
                    ", style=dashed"
                } else {
                    ""
                };
                dot.push_str(&format!(
                    "  \"{}\" -- \"{}\" [color=\"{}\"{}];\n",
                    a,
                    b,
                    line_color(line),
                    style
                ));
            }
        }
    }

    dot.push_str("}\n");
    dot
}
