use crate::flight::Flight;
use crate::graph::RouteGraph;
use crate::time::Time;
use std::sync::Arc;

pub fn flight(
    origin: &str,
    dest: &str,
    number: &str,
    depart: u16,
    arrive: u16,
    fares: (u32, u32, u32),
) -> Flight {
    Flight {
        origin: Arc::from(origin),
        dest: Arc::from(dest),
        number: Arc::from(number),
        depart: Time(depart),
        arrive: Time(arrive),
        economy: fares.0,
        business: fares.1,
        first: fares.2,
    }
}

/// Shorthand leg with only an economy fare of interest.
pub fn leg(origin: &str, dest: &str, depart: u16, arrive: u16, economy: u32) -> Flight {
    flight(
        origin,
        dest,
        "SF",
        depart,
        arrive,
        (economy, economy * 2, economy * 4),
    )
}

pub fn graph(flights: Vec<Flight>) -> RouteGraph {
    RouteGraph::new(flights)
}

/// Parse "HH:MM" in tests without going through user input handling.
pub fn t(hhmm: &str) -> Time {
    Time::parse_hhmm(hhmm).unwrap()
}

/// Flight numbers of an itinerary, for compact assertions.
pub fn numbers(itinerary: &crate::itinerary::Itinerary) -> Vec<String> {
    itinerary
        .legs()
        .iter()
        .map(|f| f.number.to_string())
        .collect()
}
