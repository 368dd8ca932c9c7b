#[cfg(test)]
#[path = "../../../tests/unit/models/problem/attractions_test.rs"]
mod attractions_test;

use crate::models::common::{Duration, Timestamp};
use crate::utils::{Float, GenericResult};

/// A wait which stands in for an hour with no observations, e.g. when the attraction is
/// closed. Large enough to steer the search away, finite so that any route stays evaluable.
pub const CLOSED_WAIT: Duration = 10_000.;

/// Keeps average queue wait observations of one attraction, one sample per hour of the day,
/// contiguous from opening to closing hour.
#[derive(Clone, Debug)]
pub struct WaitCurve {
    open_hour: u32,
    samples: Vec<Duration>,
}

impl WaitCurve {
    /// Creates a curve from (hour of day, average wait) samples.
    pub fn new(samples: &[(u32, Duration)]) -> GenericResult<Self> {
        let &(open_hour, _) = samples.first().ok_or("wait curve must have at least one sample")?;

        samples.windows(2).try_for_each(|pair| {
            if pair[1].0 != pair[0].0 + 1 {
                Err(format!("wait curve hours must be contiguous, got {} after {}", pair[1].0, pair[0].0))
            } else {
                Ok(())
            }
        })?;

        if let Some(&(hour, wait)) = samples.iter().find(|(_, wait)| !wait.is_finite() || *wait < 0.) {
            return Err(format!("wait must be a non negative number, got {wait} at hour {hour}").into());
        }

        Ok(Self { open_hour, samples: samples.iter().map(|&(_, wait)| wait).collect() })
    }

    /// Returns the hour of day of the first observation.
    pub fn open_hour(&self) -> u32 {
        self.open_hour
    }

    /// Returns the hour of day of the last observation.
    pub fn close_hour(&self) -> u32 {
        self.open_hour + self.samples.len() as u32 - 1
    }

    /// Predicts an expected queue wait at given arrival time by interpolating linearly
    /// between the two nearest hourly samples. An hour outside the observed range
    /// contributes [`CLOSED_WAIT`] to the interpolation.
    pub fn predict(&self, arrival: Timestamp) -> Duration {
        let hour = (arrival / 60.).floor();
        let minute_ratio = (arrival - hour * 60.) / 60.;

        let lower = self.sample_at(hour);
        let upper = self.sample_at(hour + 1.);

        lower + minute_ratio * (upper - lower)
    }

    fn sample_at(&self, hour: Float) -> Duration {
        if hour < self.open_hour as Float || hour > self.close_hour() as Float {
            CLOSED_WAIT
        } else {
            self.samples[(hour - self.open_hour as Float) as usize]
        }
    }
}

/// An attraction of the park together with its visit properties.
#[derive(Clone, Debug)]
pub struct Attraction {
    /// A park unique name used to refer the attraction.
    pub id: String,
    /// Time spent on the attraction itself once the queue is passed, in minutes.
    pub stay_time: Duration,
    /// Historical queue wait observations.
    pub wait_curve: WaitCurve,
}

impl Attraction {
    /// Creates a new attraction.
    pub fn new(id: &str, stay_time: Duration, wait_curve: WaitCurve) -> GenericResult<Self> {
        if id.is_empty() {
            return Err("attraction id must not be empty".into());
        }

        if !stay_time.is_finite() || stay_time < 0. {
            return Err(format!("stay time must be a non negative number, got {stay_time}").into());
        }

        Ok(Self { id: id.to_string(), stay_time, wait_curve })
    }
}
