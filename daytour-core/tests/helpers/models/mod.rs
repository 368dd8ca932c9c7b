use crate::construction::PlanContext;
use crate::models::common::{DayTime, Duration};
use crate::models::problem::{Attraction, TravelMatrix, WaitCurve};
use crate::models::Park;
use std::sync::Arc;

/// Creates a wait curve with hourly samples starting from the given opening hour.
pub fn create_curve(open_hour: u32, waits: &[Duration]) -> WaitCurve {
    let samples = waits.iter().zip(open_hour..).map(|(&wait, hour)| (hour, wait)).collect::<Vec<_>>();

    WaitCurve::new(&samples).expect("cannot create wait curve")
}

/// Creates an attraction with a constant wait between 9:00 and 21:00.
pub fn create_test_attraction(id: &str, stay_time: Duration, wait: Duration) -> Attraction {
    Attraction::new(id, stay_time, create_curve(9, &[wait; 13])).expect("cannot create attraction")
}

pub fn create_test_park(attractions: Vec<Attraction>, durations: Vec<Duration>) -> Arc<Park> {
    let size = attractions.len();
    let travel = TravelMatrix::new(durations, size).expect("cannot create travel matrix");

    Arc::new(Park::new(attractions, travel).expect("cannot create park"))
}

/// Creates a park where every pair of distinct places is the same travel time apart
/// and every attraction shares the same stay time and constant wait.
pub fn create_uniform_park(ids: &[&str], travel: Duration, stay_time: Duration, wait: Duration) -> Arc<Park> {
    let size = ids.len();
    let attractions = ids.iter().map(|id| create_test_attraction(id, stay_time, wait)).collect::<Vec<_>>();
    let durations =
        (0..size).flat_map(|i| (0..size).map(move |j| if i == j { 0. } else { travel })).collect::<Vec<_>>();

    create_test_park(attractions, durations)
}

/// Creates a planning context with the visit starting at 9:30.
pub fn create_test_context(park: Arc<Park>, targets: Vec<usize>, start: usize) -> PlanContext {
    let start_time = DayTime::new(9, 30).expect("cannot create day time").as_timestamp();

    PlanContext { park, targets, start, start_time }
}
