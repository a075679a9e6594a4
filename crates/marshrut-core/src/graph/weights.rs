//! Travel time assignment for the metro network
//!
//! Turns the unweighted station graph into a weighted one. Interchange
//! corridors cost a fixed walking time. Line connections cost a base time
//! plus a small per-connection variation derived from a digest of the two
//! endpoint names, so the times are stable across runs and platforms
//! without being stored anywhere.

use sha2::{Digest, Sha256};

use crate::error::Result;
use crate::graph::types::{Graph, Minutes, WeightedGraph};

/// Travel time parameters for [`with_travel_times`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelTimeConfig {
    /// Minutes between adjacent stations on the same line, before the
    /// per-connection variation
    pub base_minutes: f64,
    /// Minutes for walking an interchange corridor
    pub transfer_minutes: f64,
}

impl Default for TravelTimeConfig {
    fn default() -> Self {
        TravelTimeConfig {
            base_minutes: 2.5,
            transfer_minutes: 5.0,
        }
    }
}

/// Assign travel minutes to every connection of the graph
///
/// Line connections get `base_minutes` plus a variation in 0.0..=0.9,
/// rounded to one decimal. The variation depends only on the two endpoint
/// names and is symmetric in them, so the same pair always costs the same.
#[tracing::instrument(skip(graph, config))]
pub fn with_travel_times(graph: &Graph, config: &TravelTimeConfig) -> Result<WeightedGraph> {
    let mut weighted = WeightedGraph::new();

    for station in graph.stations() {
        weighted.add_station(station);
    }

    for a in graph.stations() {
        for (b, line) in graph.neighbors(a) {
            // Each undirected connection once
            if a < b {
                let minutes = if line.is_transfer() {
                    Minutes::new(config.transfer_minutes)
                } else {
                    Minutes::new(line_minutes(config.base_minutes, a, b))
                };
                weighted.add_connection(a, b, line, minutes)?;
            }
        }
    }

    tracing::debug!(
        stations = weighted.station_count(),
        connections = weighted.connection_count(),
        "travel_times_assigned"
    );

    Ok(weighted)
}

fn line_minutes(base: f64, a: &str, b: &str) -> f64 {
    let variation = (station_hash(a).wrapping_add(station_hash(b)) % 10) as f64 / 10.0;
    ((base + variation) * 10.0).round() / 10.0
}

/// Stable hash of a station name
///
/// First eight bytes of the SHA-256 digest, big-endian.
fn station_hash(name: &str) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(name.as_bytes());
    let digest = hasher.finalize();
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::Line;

    fn sample_graph() -> Graph {
        let mut graph = Graph::new();
        graph.add_connection("A", "B", Line::Red).unwrap();
        graph.add_connection("B", "C", Line::Red).unwrap();
        graph.add_connection("C", "D", Line::Transfer).unwrap();
        graph.add_station("Isolated");
        graph
    }

    #[test]
    fn test_transfer_connections_cost_the_fixed_time() {
        let weighted = with_travel_times(&sample_graph(), &TravelTimeConfig::default()).unwrap();
        let corridor = weighted.connection("C", "D").unwrap();
        assert_eq!(corridor.minutes.value(), 5.0);
        assert!(corridor.line.is_transfer());
    }

    #[test]
    fn test_line_connections_fall_in_the_expected_range() {
        let weighted = with_travel_times(&sample_graph(), &TravelTimeConfig::default()).unwrap();
        for pair in [("A", "B"), ("B", "C")] {
            let minutes = weighted.connection(pair.0, pair.1).unwrap().minutes.value();
            assert!(
                (2.5..=3.4).contains(&minutes),
                "{} / {} costs {}",
                pair.0,
                pair.1,
                minutes
            );
        }
    }

    #[test]
    fn test_travel_times_have_one_decimal() {
        let weighted = with_travel_times(&sample_graph(), &TravelTimeConfig::default()).unwrap();
        for station in weighted.stations() {
            for (_, connection) in weighted.neighbors(station) {
                let scaled = connection.minutes.value() * 10.0;
                assert!((scaled - scaled.round()).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_travel_times_are_deterministic() {
        let graph = sample_graph();
        let first = with_travel_times(&graph, &TravelTimeConfig::default()).unwrap();
        let second = with_travel_times(&graph, &TravelTimeConfig::default()).unwrap();

        for station in graph.stations() {
            for (neighbor, _) in graph.neighbors(station) {
                assert_eq!(
                    first.connection(station, neighbor),
                    second.connection(station, neighbor)
                );
            }
        }
    }

    #[test]
    fn test_variation_is_symmetric_in_the_endpoints() {
        assert_eq!(line_minutes(2.5, "A", "B"), line_minutes(2.5, "B", "A"));
        assert_eq!(
            line_minutes(2.5, "Khreshchatyk", "Arsenalna"),
            line_minutes(2.5, "Arsenalna", "Khreshchatyk")
        );
    }

    #[test]
    fn test_custom_config_shifts_the_range() {
        let config = TravelTimeConfig {
            base_minutes: 10.0,
            transfer_minutes: 1.5,
        };
        let weighted = with_travel_times(&sample_graph(), &config).unwrap();

        let line = weighted.connection("A", "B").unwrap().minutes.value();
        assert!((10.0..=10.9).contains(&line));
        assert_eq!(weighted.connection("C", "D").unwrap().minutes.value(), 1.5);
    }

    #[test]
    fn test_every_station_survives_weighting() {
        let weighted = with_travel_times(&sample_graph(), &TravelTimeConfig::default()).unwrap();
        assert_eq!(weighted.station_count(), 5);
        assert!(weighted.contains("Isolated"));
    }

    #[test]
    fn test_negative_base_is_rejected() {
        let config = TravelTimeConfig {
            base_minutes: -4.0,
            transfer_minutes: 5.0,
        };
        assert!(with_travel_times(&sample_graph(), &config).is_err());
    }
}
