use super::*;
use crate::helpers::models::*;
use crate::models::examples::create_example_park;
use crate::models::problem::Attraction;
use std::sync::Arc;

#[test]
fn can_improve_route_by_adjacent_swap() {
    // the crowded attraction has a long morning queue which melts away within two hours
    let crowded = Attraction::new("crowded", 10., create_curve(9, &[120., 60., 10., 5., 5.])).unwrap();
    let calm = create_test_attraction("calm", 10., 0.);
    let gate = create_test_attraction("gate", 0., 0.);
    #[rustfmt::skip]
    let durations = vec![
        0., 5., 5.,
        5., 0., 5.,
        5., 5., 0.,
    ];
    let park = create_test_park(vec![gate, calm, crowded], durations);
    let context = create_test_context(park, vec![1, 2], 0);
    let evaluator = RouteEvaluator::new(&context);

    let route = vec![2, 1];
    let cost = evaluator.total_time(&route);

    let (refined, refined_cost) = refine(&context, &route, cost);

    assert_eq!(refined, vec![1, 2]);
    assert!(refined_cost < cost);
    assert_eq!(refined_cost, evaluator.total_time(&refined));
}

#[test]
fn can_keep_route_when_no_swap_improves() {
    let park = create_uniform_park(&["gate", "a", "b", "c"], 5., 10., 0.);
    let context = create_test_context(park, vec![1, 2, 3], 0);
    let evaluator = RouteEvaluator::new(&context);

    let route = vec![1, 2, 3];
    let cost = evaluator.total_time(&route);

    let (refined, refined_cost) = refine(&context, &route, cost);

    assert_eq!(refined, route);
    assert_eq!(refined_cost, cost);
}

#[test]
fn can_skip_degenerate_routes() {
    let park = create_uniform_park(&["gate", "a"], 5., 10., 0.);
    let context = create_test_context(park, vec![1], 0);

    assert_eq!(refine(&context, &[1], 15.), (vec![1], 15.));
    assert_eq!(refine(&context, &[], 0.), (vec![], 0.));
}

#[test]
fn can_never_return_worse_route() {
    let park = Arc::new(create_example_park().unwrap());
    let context = create_test_context(park, vec![1, 2, 3, 4, 5, 6, 7], 0);
    let evaluator = RouteEvaluator::new(&context);

    let route = vec![5, 3, 7, 2, 6, 1, 4];
    let cost = evaluator.total_time(&route);

    let (refined, refined_cost) = refine(&context, &route, cost);

    assert!(refined_cost <= cost);
    assert_eq!(refined_cost, evaluator.total_time(&refined));

    let mut sorted = refined;
    sorted.sort_unstable();
    assert_eq!(sorted, vec![1, 2, 3, 4, 5, 6, 7]);
}
