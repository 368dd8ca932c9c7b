#[cfg(test)]
#[path = "../../tests/unit/solver/local_search_test.rs"]
mod local_search_test;

use crate::construction::{PlanContext, RouteEvaluator};
use crate::utils::{compare_floats, parallel_collect, Float};
use std::cmp::Ordering;

/// Refines a route by trying every swap of two adjacent attractions and keeping the best
/// swap when it beats the passed cost. Swaps are evaluated independently of each other, and
/// the completion offsets of the unaffected route prefix are reused, so a swap at position
/// `s` only reevaluates the route tail.
pub fn refine(context: &PlanContext, route: &[usize], cost: Float) -> (Vec<usize>, Float) {
    if route.len() <= 1 {
        return (route.to_vec(), cost);
    }

    let evaluator = RouteEvaluator::new(context);
    let completions = evaluator.completions(route);

    let positions = (1..route.len()).collect::<Vec<_>>();
    let costs = parallel_collect(&positions, |&swap| {
        let mut candidate = route.to_vec();
        candidate.swap(swap - 1, swap);
        evaluator.resume_total(&candidate, &completions[..swap - 1])
    });

    let best = costs
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| compare_floats(**a, **b))
        .map(|(idx, &swap_cost)| (positions[idx], swap_cost));

    match best {
        Some((swap, swap_cost)) if compare_floats(swap_cost, cost) == Ordering::Less => {
            let mut improved = route.to_vec();
            improved.swap(swap - 1, swap);
            (improved, swap_cost)
        }
        _ => (route.to_vec(), cost),
    }
}
