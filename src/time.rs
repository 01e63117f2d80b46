use std::fmt;
use std::ops::Add;

/// Error returned when parsing an invalid clock time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time '{input}': {reason}")]
pub struct TimeError {
    input: String,
    reason: &'static str,
}

impl TimeError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

/// Minutes since local midnight.
///
/// Parsed times always fall within a single day (`0..1440`). Larger values
/// can still arise from layover arithmetic; they compare greater than every
/// same-day departure, which is exactly what the eligibility checks need.
#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, PartialOrd, Hash)]
pub struct Time(pub u16);

impl Time {
    /// Parse an `HH:MM` clock time.
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        let (h, m) = s
            .split_once(':')
            .ok_or_else(|| TimeError::new(s, "expected HH:MM"))?;
        let hours: u16 = h
            .parse()
            .map_err(|_| TimeError::new(s, "invalid hour digits"))?;
        let minutes: u16 = m
            .parse()
            .map_err(|_| TimeError::new(s, "invalid minute digits"))?;
        if hours > 23 {
            return Err(TimeError::new(s, "hour must be 0-23"));
        }
        if minutes > 59 {
            return Err(TimeError::new(s, "minute must be 0-59"));
        }
        Ok(Time(hours * 60 + minutes))
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl Add<u16> for Time {
    type Output = Self;

    fn add(self, rhs: u16) -> Self::Output {
        Time(self.0 + rhs)
    }
}
