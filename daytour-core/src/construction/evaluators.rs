#[cfg(test)]
#[path = "../../tests/unit/construction/evaluators_test.rs"]
mod evaluators_test;

use crate::construction::PlanContext;
use crate::models::common::{DayTime, Duration, Timestamp};
use crate::models::solution::{PlannedStop, TourPlan};

/// Evaluates durations of visiting sequences within a fixed plan context.
pub struct RouteEvaluator<'a> {
    context: &'a PlanContext,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates an evaluator bound to given context.
    pub fn new(context: &'a PlanContext) -> Self {
        Self { context }
    }

    /// Returns time needed to walk from the origin to the destination, pass its queue and
    /// finish the attraction itself, when departing at given time.
    pub fn step_duration(&self, origin: usize, destination: usize, departure: Timestamp) -> Duration {
        let park = self.context.park.as_ref();
        let travel = park.travel_duration(origin, destination);
        let attraction = park.attraction(destination);
        let wait = attraction.wait_curve.predict(departure + travel);

        travel + wait + attraction.stay_time
    }

    /// Returns the total time needed to complete the route from scratch.
    pub fn total_time(&self, route: &[usize]) -> Duration {
        self.resume_total(route, &[])
    }

    /// Returns the total route time, resuming after a prefix of already known completion
    /// offsets. An empty prefix evaluates the whole route, a full one is returned as is.
    pub fn resume_total(&self, route: &[usize], prefix_completions: &[Duration]) -> Duration {
        if prefix_completions.len() == route.len() {
            return prefix_completions.last().copied().unwrap_or(0.);
        }

        let (mut current, mut total) = match prefix_completions.last() {
            Some(&offset) => (route[prefix_completions.len() - 1], offset),
            None => (self.context.start, 0.),
        };

        for &destination in route[prefix_completions.len()..].iter() {
            total += self.step_duration(current, destination, self.context.start_time + total);
            current = destination;
        }

        total
    }

    /// Returns cumulative completion offsets of every route step, relative to the start time.
    pub fn completions(&self, route: &[usize]) -> Vec<Duration> {
        let mut completions = Vec::with_capacity(route.len());
        let mut current = self.context.start;
        let mut total = 0.;

        for &destination in route {
            total += self.step_duration(current, destination, self.context.start_time + total);
            completions.push(total);
            current = destination;
        }

        completions
    }

    /// Builds the public plan with a per stop schedule for given route.
    pub fn timeline(&self, route: &[usize]) -> TourPlan {
        let park = self.context.park.as_ref();
        let mut stops = Vec::with_capacity(route.len());
        let mut current = self.context.start;
        let mut total = 0.;

        for &destination in route {
            let travel = park.travel_duration(current, destination);
            let attraction = park.attraction(destination);
            let arrival = self.context.start_time + total + travel;
            let wait = attraction.wait_curve.predict(arrival);

            total += travel + wait + attraction.stay_time;
            stops.push(PlannedStop {
                attraction: attraction.id.clone(),
                arrival: DayTime::from_timestamp(arrival),
                expected_wait: wait,
                completion: DayTime::from_timestamp(self.context.start_time + total),
            });
            current = destination;
        }

        TourPlan { stops, total }
    }
}
