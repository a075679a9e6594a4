//! Core graph types for the metro network

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MarshrutError, Result};

/// Metro line a connection belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Line {
    /// Sviatoshynsko-Brovarska (M1)
    Red,
    /// Obolonsko-Teremkivska (M2)
    Blue,
    /// Syretsko-Pecherska (M3)
    Green,
    /// Interchange corridor between two lines
    Transfer,
}

impl Line {
    pub fn as_str(&self) -> &'static str {
        match self {
            Line::Red => "red",
            Line::Blue => "blue",
            Line::Green => "green",
            Line::Transfer => "transfer",
        }
    }

    /// Whether this connection is an interchange corridor rather than a
    /// line segment
    pub fn is_transfer(&self) -> bool {
        matches!(self, Line::Transfer)
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Travel time in minutes
///
/// Finite and non-negative for every stored connection; [`Minutes::INFINITY`]
/// only ever appears as the "not reached" sentinel in distance maps.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Minutes(f64);

impl Minutes {
    pub const ZERO: Minutes = Minutes(0.0);
    pub const INFINITY: Minutes = Minutes(f64::INFINITY);

    pub fn new(minutes: f64) -> Self {
        Minutes(minutes)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl std::ops::Add for Minutes {
    type Output = Minutes;

    fn add(self, other: Minutes) -> Minutes {
        Minutes(self.0 + other.0)
    }
}

impl From<f64> for Minutes {
    fn from(minutes: f64) -> Self {
        Minutes(minutes)
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// A weighted connection between two adjacent stations
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Connection {
    pub line: Line,
    pub minutes: Minutes,
}

/// Undirected station graph without travel times
///
/// Adjacency lives in `BTreeMap`s so stations and neighbors always
/// enumerate in ascending lexicographic order, which the search
/// algorithms rely on for deterministic results.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: BTreeMap<String, BTreeMap<String, Line>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station without any connections
    pub fn add_station(&mut self, name: impl Into<String>) {
        self.adjacency.entry(name.into()).or_default();
    }

    /// Add an undirected connection between two stations
    ///
    /// Both stations are created if they do not exist yet. Self-connections
    /// and duplicate connections are rejected.
    pub fn add_connection(&mut self, a: &str, b: &str, line: Line) -> Result<()> {
        if a == b {
            return Err(MarshrutError::InvalidNetwork {
                reason: format!("self connection at {a}"),
            });
        }
        if self.adjacency.get(a).is_some_and(|n| n.contains_key(b)) {
            return Err(MarshrutError::InvalidNetwork {
                reason: format!("duplicate connection {a} / {b}"),
            });
        }

        self.adjacency
            .entry(a.to_string())
            .or_default()
            .insert(b.to_string(), line);
        self.adjacency
            .entry(b.to_string())
            .or_default()
            .insert(a.to_string(), line);
        Ok(())
    }

    pub fn contains(&self, station: &str) -> bool {
        self.adjacency.contains_key(station)
    }

    /// All stations in ascending lexicographic order
    pub fn stations(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Neighbors of a station in ascending lexicographic order
    ///
    /// Unknown stations yield an empty iterator.
    pub fn neighbors<'a>(&'a self, station: &str) -> impl Iterator<Item = (&'a str, Line)> + 'a {
        self.adjacency
            .get(station)
            .into_iter()
            .flat_map(|n| n.iter().map(|(name, line)| (name.as_str(), *line)))
    }

    /// Line of the direct connection between two stations, if any
    pub fn connection_line(&self, a: &str, b: &str) -> Option<Line> {
        self.adjacency.get(a).and_then(|n| n.get(b)).copied()
    }

    pub fn station_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected connections
    pub fn connection_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum::<usize>() / 2
    }

    /// Number of direct neighbors of a station (0 for unknown stations)
    pub fn degree(&self, station: &str) -> usize {
        self.adjacency.get(station).map_or(0, BTreeMap::len)
    }
}

/// Undirected station graph with travel times on every connection
///
/// Produced from a [`Graph`] by [`crate::graph::weights::with_travel_times`].
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    adjacency: BTreeMap<String, BTreeMap<String, Connection>>,
}

impl WeightedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station without any connections
    pub fn add_station(&mut self, name: impl Into<String>) {
        self.adjacency.entry(name.into()).or_default();
    }

    /// Add an undirected connection with its travel time
    ///
    /// Rejects self-connections, duplicates, and travel times that are
    /// negative or not finite.
    pub fn add_connection(&mut self, a: &str, b: &str, line: Line, minutes: Minutes) -> Result<()> {
        if a == b {
            return Err(MarshrutError::InvalidNetwork {
                reason: format!("self connection at {a}"),
            });
        }
        if self.adjacency.get(a).is_some_and(|n| n.contains_key(b)) {
            return Err(MarshrutError::InvalidNetwork {
                reason: format!("duplicate connection {a} / {b}"),
            });
        }
        if !minutes.is_finite() || minutes.value() < 0.0 {
            return Err(MarshrutError::InvalidNetwork {
                reason: format!("invalid travel time {} for {a} / {b}", minutes.value()),
            });
        }

        let connection = Connection { line, minutes };
        self.adjacency
            .entry(a.to_string())
            .or_default()
            .insert(b.to_string(), connection);
        self.adjacency
            .entry(b.to_string())
            .or_default()
            .insert(a.to_string(), connection);
        Ok(())
    }

    pub fn contains(&self, station: &str) -> bool {
        self.adjacency.contains_key(station)
    }

    /// All stations in ascending lexicographic order
    pub fn stations(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Neighbors of a station in ascending lexicographic order
    ///
    /// Unknown stations yield an empty iterator.
    pub fn neighbors<'a>(
        &'a self,
        station: &str,
    ) -> impl Iterator<Item = (&'a str, Connection)> + 'a {
        self.adjacency
            .get(station)
            .into_iter()
            .flat_map(|n| n.iter().map(|(name, connection)| (name.as_str(), *connection)))
    }

    /// Direct connection between two stations, if any
    pub fn connection(&self, a: &str, b: &str) -> Option<Connection> {
        self.adjacency.get(a).and_then(|n| n.get(b)).copied()
    }

    /// Total travel minutes along consecutive stations
    ///
    /// `None` when any adjacent pair has no direct connection.
    pub fn path_minutes(&self, path: &[String]) -> Option<Minutes> {
        let mut total = Minutes::ZERO;
        for pair in path.windows(2) {
            let connection = self.connection(&pair[0], &pair[1])?;
            total = total + connection.minutes;
        }
        Some(total)
    }

    pub fn station_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected connections
    pub fn connection_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum::<usize>() / 2
    }
}
