use crate::time::Time;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

pub type AirportId = Arc<str>;

/// Error returned when a cabin tag from external input is not one of the
/// three recognized classes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized cabin '{0}': expected economy, business or first")]
pub struct CabinError(String);

/// Service class with an independent flat fare per leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cabin {
    Economy,
    Business,
    First,
}

impl Cabin {
    /// All cabins, in report order.
    pub const ALL: [Cabin; 3] = [Cabin::Economy, Cabin::Business, Cabin::First];
}

impl fmt::Display for Cabin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Cabin::Economy => "economy",
            Cabin::Business => "business",
            Cabin::First => "first",
        };
        write!(f, "{}", tag)
    }
}

impl FromStr for Cabin {
    type Err = CabinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "economy" => Ok(Cabin::Economy),
            "business" => Ok(Cabin::Business),
            "first" => Ok(Cabin::First),
            other => Err(CabinError(other.to_string())),
        }
    }
}

/// One scheduled flight leg with per-cabin fares.
///
/// Constructed only by the schedule loader, which guarantees that both
/// times are in range and `arrive > depart`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flight {
    pub origin: AirportId,
    pub dest: AirportId,
    pub number: Arc<str>,
    pub depart: Time,
    pub arrive: Time,
    pub economy: u32,
    pub business: u32,
    pub first: u32,
}

impl Flight {
    pub fn price_for(&self, cabin: Cabin) -> u32 {
        match cabin {
            Cabin::Economy => self.economy,
            Cabin::Business => self.business,
            Cabin::First => self.first,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flight() -> Flight {
        Flight {
            origin: Arc::from("LAX"),
            dest: Arc::from("JFK"),
            number: Arc::from("SF100"),
            depart: Time(480),
            arrive: Time(540),
            economy: 100,
            business: 250,
            first: 600,
        }
    }

    #[test]
    fn price_per_cabin() {
        let f = flight();
        assert_eq!(f.price_for(Cabin::Economy), 100);
        assert_eq!(f.price_for(Cabin::Business), 250);
        assert_eq!(f.price_for(Cabin::First), 600);
    }

    #[test]
    fn cabin_parses_known_tags() {
        assert_eq!("economy".parse(), Ok(Cabin::Economy));
        assert_eq!("business".parse(), Ok(Cabin::Business));
        assert_eq!("first".parse(), Ok(Cabin::First));
    }

    #[test]
    fn cabin_rejects_unknown_tags() {
        assert!("premium".parse::<Cabin>().is_err());
        assert!("Economy".parse::<Cabin>().is_err());
        assert!("".parse::<Cabin>().is_err());
    }

    #[test]
    fn cabin_display_roundtrip() {
        for cabin in Cabin::ALL {
            assert_eq!(cabin.to_string().parse(), Ok(cabin));
        }
    }
}
