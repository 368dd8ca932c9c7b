//! An example of planning one day of theme park visits with the queue aware route planner.

use daytour_core::models::examples::create_example_park;
use daytour_core::prelude::*;
use std::sync::Arc;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let seed = args
        .get(1)
        .map(|arg| arg.parse::<u64>().unwrap_or_else(|err| panic!("cannot parse seed from '{arg}': '{err}'")));

    let plan = plan_example_day(seed);

    println!();
    for stop in &plan.stops {
        println!(
            "{} -> {}  {:<16} expected wait {:>5.1} min",
            stop.arrival, stop.completion, stop.attraction, stop.expected_wait
        );
    }
    println!("total time: {:.1} min", plan.total);
}

fn plan_example_day(seed: Option<u64>) -> TourPlan {
    let park = Arc::new(create_example_park().unwrap_or_else(|err| panic!("cannot create example park: '{err}'")));
    let environment = Arc::new(Environment::new_with_seed(seed));
    let config = PlannerConfigBuilder::default()
        .with_telemetry(TelemetryMode::OnlyLogging { logger: environment.logger.clone(), log_progress: 10 })
        .build()
        .unwrap_or_else(|err| panic!("cannot build planner config: '{err}'"));

    let attractions =
        ["space_coaster", "log_flume", "haunted_manor", "pirate_voyage", "sky_drop", "river_rapids", "grand_theater"];
    let start_time = DayTime::new(9, 30).unwrap_or_else(|err| panic!("cannot create start time: '{err}'"));

    RoutePlanner::new(park, config, environment)
        .plan(&attractions, "fantasia_carousel", start_time)
        .unwrap_or_else(|err| panic!("cannot plan the day: '{err}'"))
}
