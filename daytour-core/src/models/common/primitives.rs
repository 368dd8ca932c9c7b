#[cfg(test)]
#[path = "../../../tests/unit/models/common/primitives_test.rs"]
mod primitives_test;

use crate::utils::{Float, GenericResult};
use std::fmt;

/// Represents a duration in minutes.
pub type Duration = Float;

/// Represents a time point as an amount of minutes since midnight.
pub type Timestamp = Float;

/// A clock time of the day. Hours are not wrapped at midnight, so a schedule running past it
/// keeps counting up (e.g. `25:40`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayTime {
    hours: u32,
    minutes: u32,
}

impl DayTime {
    /// Creates `DayTime` from hours and minutes, where minutes must fit an hour.
    pub fn new(hours: u32, minutes: u32) -> GenericResult<Self> {
        if minutes > 59 {
            return Err(format!("invalid amount of minutes in time: {minutes}").into());
        }

        Ok(Self { hours, minutes })
    }

    /// Parses time given in `H:MM` form, e.g. `9:30`. Any whitespace is ignored.
    pub fn parse(time: &str) -> GenericResult<Self> {
        let compact = time.split_whitespace().collect::<String>();
        let (hours, minutes) = compact.split_once(':').ok_or_else(|| format!("cannot parse time from '{time}'"))?;

        let hours = hours.parse::<u32>().map_err(|err| format!("cannot parse hours from '{time}': {err}"))?;
        let minutes = minutes.parse::<u32>().map_err(|err| format!("cannot parse minutes from '{time}': {err}"))?;

        Self::new(hours, minutes)
    }

    /// Returns amount of minutes since midnight.
    pub fn as_timestamp(&self) -> Timestamp {
        (self.hours * 60 + self.minutes) as Timestamp
    }

    /// Creates `DayTime` from amount of minutes since midnight, rounded to a whole minute.
    pub fn from_timestamp(timestamp: Timestamp) -> Self {
        let total = timestamp.round().max(0.) as u32;
        Self { hours: total / 60, minutes: total % 60 }
    }
}

impl fmt::Display for DayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}
