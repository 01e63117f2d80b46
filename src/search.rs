//! Constrained shortest-path search over the route graph.
//!
//! Both optimization modes (earliest arrival, cheapest fare per cabin) are
//! the same label-correcting loop over a min-heap of airports; an
//! [`Objective`] supplies the priority label, the relaxation rule and the
//! "current time at this airport" used by the layover eligibility check.

use crate::flight::{AirportId, Cabin, Flight};
use crate::graph::RouteGraph;
use crate::itinerary::Itinerary;
use crate::time::Time;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::sync::Arc;

/// Minimum ground time between a leg's arrival and the next departure.
/// Applied uniformly to every connection; the first leg only has to honor
/// the requested earliest departure.
pub const MIN_LAYOVER_MINUTES: u16 = 60;

trait Objective {
    type Label: Copy + Ord;

    /// Label of the start airport at the requested departure time.
    fn start(&self, departure: Time) -> Self::Label;

    /// Time at which a connection becomes possible from this label,
    /// before the layover minimum is added.
    fn clock(&self, label: Self::Label) -> Time;

    /// Label reached by taking `flight` from `label`.
    fn extend(&self, label: Self::Label, flight: &Flight) -> Self::Label;

    /// Strict improvement on the optimized metric alone.
    fn improves(&self, candidate: Self::Label, incumbent: Self::Label) -> bool;
}

struct EarliestArrival;

impl Objective for EarliestArrival {
    type Label = Time;

    fn start(&self, departure: Time) -> Time {
        departure
    }

    fn clock(&self, label: Time) -> Time {
        label
    }

    fn extend(&self, _label: Time, flight: &Flight) -> Time {
        flight.arrive
    }

    fn improves(&self, candidate: Time, incumbent: Time) -> bool {
        candidate < incumbent
    }
}

struct CheapestFare {
    cabin: Cabin,
}

impl Objective for CheapestFare {
    /// Cumulative fare, then the arrival time of the edge that produced
    /// it. The time is carried for the eligibility check and orders
    /// equal-fare queue entries; equal-cost tie-breaks are otherwise
    /// unspecified.
    type Label = (u32, Time);

    fn start(&self, departure: Time) -> Self::Label {
        (0, departure)
    }

    fn clock(&self, label: Self::Label) -> Time {
        label.1
    }

    fn extend(&self, label: Self::Label, flight: &Flight) -> Self::Label {
        (label.0 + flight.price_for(self.cabin), flight.arrive)
    }

    fn improves(&self, candidate: Self::Label, incumbent: Self::Label) -> bool {
        candidate.0 < incumbent.0
    }
}

/// Itinerary arriving at `dest` as early as possible, departing `start`
/// no earlier than `earliest_departure`.
pub fn find_earliest_itinerary(
    graph: &RouteGraph,
    start: &str,
    dest: &str,
    earliest_departure: Time,
) -> Option<Itinerary> {
    run_search(
        graph,
        start,
        dest,
        earliest_departure,
        MIN_LAYOVER_MINUTES,
        &EarliestArrival,
    )
}

/// Itinerary from `start` to `dest` minimizing the cumulative fare for
/// `cabin`, still subject to the same departure and layover feasibility
/// rules as the earliest-arrival mode.
pub fn find_cheapest_itinerary(
    graph: &RouteGraph,
    start: &str,
    dest: &str,
    earliest_departure: Time,
    cabin: Cabin,
) -> Option<Itinerary> {
    run_search(
        graph,
        start,
        dest,
        earliest_departure,
        MIN_LAYOVER_MINUTES,
        &CheapestFare { cabin },
    )
}

fn run_search<O: Objective>(
    graph: &RouteGraph,
    start: &str,
    dest: &str,
    earliest_departure: Time,
    min_layover: u16,
    objective: &O,
) -> Option<Itinerary> {
    // Working state is owned by this invocation and dropped on return;
    // nothing is shared across searches.
    let mut best: HashMap<AirportId, O::Label> = HashMap::new();
    let mut prev: HashMap<AirportId, Flight> = HashMap::new();
    let mut finalized: HashSet<AirportId> = HashSet::new();
    let mut queue: BinaryHeap<Reverse<(O::Label, AirportId)>> = BinaryHeap::new();

    let start_id: AirportId = Arc::from(start);
    let start_label = objective.start(earliest_departure);
    best.insert(start_id.clone(), start_label);
    queue.push(Reverse((start_label, start_id)));

    while let Some(Reverse((label, airport))) = queue.pop() {
        // Each airport finalizes at most once; later pops are stale.
        if !finalized.insert(airport.clone()) {
            continue;
        }
        if airport.as_ref() == dest {
            return reconstruct(&prev, dest);
        }

        let threshold = if airport.as_ref() == start {
            objective.clock(label)
        } else {
            objective.clock(label) + min_layover
        };

        for flight in graph.departures(&airport) {
            if flight.depart < threshold {
                continue;
            }
            let candidate = objective.extend(label, flight);
            let improved = best
                .get(&flight.dest)
                .map_or(true, |&incumbent| objective.improves(candidate, incumbent));
            if improved {
                best.insert(flight.dest.clone(), candidate);
                prev.insert(flight.dest.clone(), flight.clone());
                queue.push(Reverse((candidate, flight.dest.clone())));
            }
        }
    }

    None
}

/// Walk the predecessor map backward from the destination and reverse the
/// collected legs into chronological order. An empty chain (the
/// destination is the start airport) is "no itinerary", not an empty one.
fn reconstruct(prev: &HashMap<AirportId, Flight>, dest: &str) -> Option<Itinerary> {
    let mut legs = Vec::new();
    let mut cursor = dest;
    while let Some(flight) = prev.get(cursor) {
        legs.push(flight.clone());
        cursor = flight.origin.as_ref();
    }
    legs.reverse();
    Itinerary::from_legs(legs)
}

#[cfg(test)]
mod tests;
