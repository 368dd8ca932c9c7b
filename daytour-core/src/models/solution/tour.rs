use crate::models::common::{DayTime, Duration};

/// A single visit of the planned day.
#[derive(Clone, Debug)]
pub struct PlannedStop {
    /// Id of the visited attraction.
    pub attraction: String,
    /// Arrival clock time, when queueing starts.
    pub arrival: DayTime,
    /// Expected queue wait, in minutes.
    pub expected_wait: Duration,
    /// Clock time when the visit is finished.
    pub completion: DayTime,
}

/// A planned visiting order together with its schedule.
#[derive(Clone, Debug)]
pub struct TourPlan {
    /// Visits in their planned order.
    pub stops: Vec<PlannedStop>,
    /// Time needed to complete the whole plan, in minutes.
    pub total: Duration,
}

impl TourPlan {
    /// Returns ids of the visits in their planned order.
    pub fn order(&self) -> impl Iterator<Item = &str> {
        self.stops.iter().map(|stop| stop.attraction.as_str())
    }
}
