use crate::flight::{AirportId, Flight};
use std::collections::HashMap;

/// Adjacency map from an origin airport to its outbound flights.
///
/// Built once per run and read-only afterwards. Outbound lists keep the
/// insertion order of the source file. Keys match exactly (case-sensitive).
pub struct RouteGraph {
    outbound: HashMap<AirportId, Vec<Flight>>,
}

impl RouteGraph {
    pub fn new(flights: impl IntoIterator<Item = Flight>) -> Self {
        let mut outbound: HashMap<AirportId, Vec<Flight>> = HashMap::new();
        for flight in flights {
            outbound
                .entry(flight.origin.clone())
                .or_default()
                .push(flight);
        }
        Self { outbound }
    }

    /// Outbound flights from `airport`; empty for airports with no
    /// departures, including ones the schedule never mentions.
    pub fn departures(&self, airport: &str) -> &[Flight] {
        self.outbound
            .get(airport)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::Time;
    use std::sync::Arc;

    fn flight(origin: &str, dest: &str, number: &str) -> Flight {
        Flight {
            origin: Arc::from(origin),
            dest: Arc::from(dest),
            number: Arc::from(number),
            depart: Time(480),
            arrive: Time(540),
            economy: 100,
            business: 200,
            first: 400,
        }
    }

    #[test]
    fn groups_by_origin_preserving_order() {
        let graph = RouteGraph::new(vec![
            flight("AAA", "BBB", "SF1"),
            flight("CCC", "BBB", "SF2"),
            flight("AAA", "CCC", "SF3"),
        ]);

        let from_aaa: Vec<&str> = graph
            .departures("AAA")
            .iter()
            .map(|f| f.number.as_ref())
            .collect();
        assert_eq!(from_aaa, vec!["SF1", "SF3"]);
        assert_eq!(graph.departures("CCC").len(), 1);
    }

    #[test]
    fn unknown_airport_is_empty_not_an_error() {
        let graph = RouteGraph::new(vec![flight("AAA", "BBB", "SF1")]);
        assert!(graph.departures("ZZZ").is_empty());
        assert!(graph.departures("BBB").is_empty());
    }

    #[test]
    fn lookups_are_case_sensitive() {
        let graph = RouteGraph::new(vec![flight("AAA", "BBB", "SF1")]);
        assert_eq!(graph.departures("AAA").len(), 1);
        assert!(graph.departures("aaa").is_empty());
    }
}
