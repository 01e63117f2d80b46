use crate::flight::{Cabin, Flight};
use crate::time::Time;

/// An ordered, non-empty sequence of connecting flights.
///
/// Emptiness is not representable: an unreachable destination is `None` at
/// the search boundary, never an itinerary with no legs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    legs: Vec<Flight>,
}

impl Itinerary {
    pub fn from_legs(legs: Vec<Flight>) -> Option<Self> {
        if legs.is_empty() {
            None
        } else {
            Some(Self { legs })
        }
    }

    pub fn legs(&self) -> &[Flight] {
        &self.legs
    }

    pub fn origin(&self) -> &str {
        &self.legs[0].origin
    }

    pub fn dest(&self) -> &str {
        &self.legs[self.legs.len() - 1].dest
    }

    pub fn depart_time(&self) -> Time {
        self.legs[0].depart
    }

    pub fn arrive_time(&self) -> Time {
        self.legs[self.legs.len() - 1].arrive
    }

    pub fn duration_minutes(&self) -> u16 {
        self.arrive_time().0 - self.depart_time().0
    }

    pub fn num_stops(&self) -> usize {
        self.legs.len() - 1
    }

    pub fn total_price(&self, cabin: Cabin) -> u32 {
        self.legs.iter().map(|leg| leg.price_for(cabin)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn leg(origin: &str, dest: &str, depart: u16, arrive: u16, economy: u32) -> Flight {
        Flight {
            origin: Arc::from(origin),
            dest: Arc::from(dest),
            number: Arc::from("SF1"),
            depart: Time(depart),
            arrive: Time(arrive),
            economy,
            business: economy * 2,
            first: economy * 4,
        }
    }

    #[test]
    fn empty_legs_are_not_an_itinerary() {
        assert_eq!(Itinerary::from_legs(vec![]), None);
    }

    #[test]
    fn derived_properties() {
        let it = Itinerary::from_legs(vec![
            leg("AAA", "BBB", 480, 540, 100),
            leg("BBB", "CCC", 600, 660, 50),
        ])
        .unwrap();

        assert_eq!(it.origin(), "AAA");
        assert_eq!(it.dest(), "CCC");
        assert_eq!(it.depart_time(), Time(480));
        assert_eq!(it.arrive_time(), Time(660));
        assert_eq!(it.duration_minutes(), 180);
        assert_eq!(it.num_stops(), 1);
    }

    #[test]
    fn total_price_sums_leg_fares() {
        let it = Itinerary::from_legs(vec![
            leg("AAA", "BBB", 480, 540, 100),
            leg("BBB", "CCC", 600, 660, 50),
        ])
        .unwrap();

        assert_eq!(it.total_price(Cabin::Economy), 150);
        assert_eq!(it.total_price(Cabin::Business), 300);
        assert_eq!(it.total_price(Cabin::First), 600);
    }

    #[test]
    fn single_leg_has_no_stops() {
        let it = Itinerary::from_legs(vec![leg("AAA", "BBB", 480, 540, 100)]).unwrap();
        assert_eq!(it.num_stops(), 0);
        assert_eq!(it.duration_minutes(), 60);
    }
}
