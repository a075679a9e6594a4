//! Kyiv Metro network topology
//!
//! Static description of the three-line network: stations in travel
//! order per line, plus the walking corridors between the interchange
//! stations in the city center.

use crate::error::{MarshrutError, Result};
use crate::graph::types::{Graph, Line};

/// Red Line (M1) stations, west to east
pub const RED_LINE: [&str; 18] = [
    "Akademmistechko",
    "Zhytomyrska",
    "Sviatoshyn",
    "Nyvky",
    "Beresteiska",
    "Shuliavska",
    "Politekhnichnyi Instytut",
    "Vokzalna",
    "Universytet",
    "Teatralna",
    "Khreshchatyk",
    "Arsenalna",
    "Dnipro",
    "Hidropark",
    "Livoberezhna",
    "Darnytsia",
    "Chernihivska",
    "Lisova",
];

/// Blue Line (M2) stations, north to south
pub const BLUE_LINE: [&str; 18] = [
    "Heroiv Dnipra",
    "Minska",
    "Obolon",
    "Pochaina",
    "Tarasa Shevchenka",
    "Kontraktova Ploshcha",
    "Poshtova Ploshcha",
    "Maidan Nezalezhnosti",
    "Ploshcha Ukrainskykh Heroiv",
    "Olimpiiska",
    "Palats Ukraina",
    "Lybidska",
    "Demiivska",
    "Holosiivska",
    "Vasylkivska",
    "Vystavkovyi Tsentr",
    "Ipodrom",
    "Teremky",
];

/// Green Line (M3) stations, northwest to southeast
pub const GREEN_LINE: [&str; 16] = [
    "Syrets",
    "Dorohozhychi",
    "Lukianivska",
    "Zoloti Vorota",
    "Palats Sportu",
    "Klovska",
    "Pecherska",
    "Druzhby Narodiv",
    "Vydubychi",
    "Slavutych",
    "Osokorky",
    "Pozniaky",
    "Kharkivska",
    "Vyrlytsia",
    "Boryspilska",
    "Chervonyi Khutir",
];

/// Walking corridors between interchange stations
pub const TRANSFERS: [(&str, &str); 3] = [
    ("Teatralna", "Zoloti Vorota"),
    ("Khreshchatyk", "Maidan Nezalezhnosti"),
    ("Palats Sportu", "Ploshcha Ukrainskykh Heroiv"),
];

/// Build the Kyiv Metro network
pub fn kyiv_metro() -> Result<Graph> {
    let mut graph = Graph::new();

    for (stations, line) in [
        (&RED_LINE[..], Line::Red),
        (&BLUE_LINE[..], Line::Blue),
        (&GREEN_LINE[..], Line::Green),
    ] {
        for pair in stations.windows(2) {
            graph.add_connection(pair[0], pair[1], line)?;
        }
    }

    for (a, b) in TRANSFERS {
        graph.add_connection(a, b, Line::Transfer)?;
    }

    Ok(graph)
}

/// Stations of a line in travel order
///
/// The transfer pseudo-line has no stations of its own.
pub fn line_stations(line: Line) -> &'static [&'static str] {
    match line {
        Line::Red => &RED_LINE,
        Line::Blue => &BLUE_LINE,
        Line::Green => &GREEN_LINE,
        Line::Transfer => &[],
    }
}

/// Resolve a user-supplied station name against the graph
///
/// Exact matches win, otherwise a unique case-insensitive match is
/// accepted.
pub fn resolve_station(graph: &Graph, name: &str) -> Result<String> {
    if graph.contains(name) {
        return Ok(name.to_string());
    }

    let mut matches = graph
        .stations()
        .filter(|station| station.eq_ignore_ascii_case(name));

    match (matches.next(), matches.next()) {
        (Some(station), None) => Ok(station.to_string()),
        _ => Err(MarshrutError::StationNotFound {
            name: name.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_has_52_stations_and_52_connections() {
        let graph = kyiv_metro().unwrap();
        assert_eq!(graph.station_count(), 52);
        // 17 + 17 + 15 line connections plus 3 corridors
        assert_eq!(graph.connection_count(), 52);
    }

    #[test]
    fn test_line_lengths() {
        assert_eq!(line_stations(Line::Red).len(), 18);
        assert_eq!(line_stations(Line::Blue).len(), 18);
        assert_eq!(line_stations(Line::Green).len(), 16);
        assert!(line_stations(Line::Transfer).is_empty());
    }

    #[test]
    fn test_transfer_corridors_are_typed_as_transfers() {
        let graph = kyiv_metro().unwrap();
        for (a, b) in TRANSFERS {
            assert_eq!(graph.connection_line(a, b), Some(Line::Transfer));
        }
    }

    #[test]
    fn test_interchange_stations_have_degree_three() {
        let graph = kyiv_metro().unwrap();
        for (a, b) in TRANSFERS {
            assert_eq!(graph.degree(a), 3, "{}", a);
            assert_eq!(graph.degree(b), 3, "{}", b);
        }
    }

    #[test]
    fn test_terminals_have_degree_one() {
        let graph = kyiv_metro().unwrap();
        for terminal in [
            "Akademmistechko",
            "Lisova",
            "Heroiv Dnipra",
            "Teremky",
            "Syrets",
            "Chervonyi Khutir",
        ] {
            assert_eq!(graph.degree(terminal), 1, "{}", terminal);
        }
    }

    #[test]
    fn test_resolve_station_exact_match() {
        let graph = kyiv_metro().unwrap();
        assert_eq!(
            resolve_station(&graph, "Khreshchatyk").unwrap(),
            "Khreshchatyk"
        );
    }

    #[test]
    fn test_resolve_station_is_case_insensitive() {
        let graph = kyiv_metro().unwrap();
        assert_eq!(
            resolve_station(&graph, "khreshchatyk").unwrap(),
            "Khreshchatyk"
        );
        assert_eq!(
            resolve_station(&graph, "HEROIV DNIPRA").unwrap(),
            "Heroiv Dnipra"
        );
    }

    #[test]
    fn test_resolve_station_unknown_name() {
        let graph = kyiv_metro().unwrap();
        let err = resolve_station(&graph, "Hogwarts").unwrap_err();
        assert!(matches!(err, MarshrutError::StationNotFound { .. }));
        assert!(err.to_string().contains("Hogwarts"));
    }
}
