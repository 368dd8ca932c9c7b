#[cfg(test)]
#[path = "../../tests/unit/construction/behaviors_test.rs"]
mod behaviors_test;

use crate::algorithms::trails::TrailMap;
use crate::construction::{Ant, PlanContext, RouteEvaluator};
use crate::models::problem::MIN_STEP_COST;
use crate::utils::{compare_floats, Float, Random};
use std::cmp::Ordering;

/// Exponents and lookahead horizon which control how strongly each trail and the step cost
/// influence the choice of the next attraction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GuidanceParams {
    /// An exponent of the global trail intensity.
    pub alpha: Float,
    /// An exponent applied to the reciprocal of the step cost.
    pub beta: Float,
    /// An exponent of the lookahead trail intensity.
    pub gamma: Float,
    /// Amount of leading route steps which reinforce the lookahead trail.
    pub lookahead: usize,
}

/// Everything an agent can see while constructing one route: the immutable plan context,
/// both trails, the routes built earlier within the current iteration and the best known
/// route so far.
pub struct IterationView<'a> {
    /// The plan context.
    pub context: &'a PlanContext,
    /// The global trail.
    pub trail: &'a TrailMap,
    /// The lookahead trail.
    pub lookahead_trail: &'a TrailMap,
    /// Routes constructed earlier in the same iteration.
    pub explored: &'a [Vec<usize>],
    /// The best route with its cost found across iterations, when one exists.
    pub best: Option<&'a (Vec<usize>, Float)>,
}

/// A way to construct one candidate route.
pub trait ConstructionBehavior {
    /// Builds a route together with its cost.
    fn construct(&self, view: &IterationView<'_>, random: &(dyn Random + Send + Sync)) -> Ant;
}

const SHUFFLE_RETRIES: usize = 10;

/// Builds a route by shuffling the targets, retrying a bounded amount of times when the
/// shuffle repeats a route already explored within the same iteration.
#[derive(Default)]
pub struct RandomBehavior;

impl ConstructionBehavior for RandomBehavior {
    fn construct(&self, view: &IterationView<'_>, random: &(dyn Random + Send + Sync)) -> Ant {
        let mut route = view.context.targets.clone();

        for _ in 0..SHUFFLE_RETRIES {
            random.shuffle(route.as_mut_slice());
            if !view.explored.contains(&route) {
                break;
            }
        }

        let cost = RouteEvaluator::new(view.context).total_time(&route);

        Ant { route, cost, lookahead: 0 }
    }
}

/// Builds a route step by step, sampling the next attraction with probability proportional
/// to its attractiveness.
pub struct ProbabilisticBehavior {
    params: GuidanceParams,
}

impl ProbabilisticBehavior {
    /// Creates a behavior with given guidance parameters.
    pub fn new(params: GuidanceParams) -> Self {
        Self { params }
    }
}

impl ConstructionBehavior for ProbabilisticBehavior {
    fn construct(&self, view: &IterationView<'_>, random: &(dyn Random + Send + Sync)) -> Ant {
        let (route, cost) = guided_route(view, &self.params, |weights| random.weighted(weights));

        Ant { route, cost, lookahead: self.params.lookahead }
    }
}

/// Builds a route step by step, always taking the most attractive next attraction. Ties are
/// resolved in favor of the earliest candidate.
pub struct GreedyBehavior {
    params: GuidanceParams,
}

impl GreedyBehavior {
    /// Creates a behavior with given guidance parameters.
    pub fn new(params: GuidanceParams) -> Self {
        Self { params }
    }
}

impl ConstructionBehavior for GreedyBehavior {
    fn construct(&self, view: &IterationView<'_>, _: &(dyn Random + Send + Sync)) -> Ant {
        let (route, cost) = guided_route(view, &self.params, first_max_position);

        Ant { route, cost, lookahead: self.params.lookahead }
    }
}

/// Replays the best route known so far instead of constructing a fresh one. Falls back to a
/// plain shuffle until some best route exists.
#[derive(Default)]
pub struct EliteBehavior;

impl ConstructionBehavior for EliteBehavior {
    fn construct(&self, view: &IterationView<'_>, random: &(dyn Random + Send + Sync)) -> Ant {
        match view.best {
            Some((route, cost)) => Ant { route: route.clone(), cost: *cost, lookahead: 0 },
            None => RandomBehavior.construct(view, random),
        }
    }
}

/// Constructs a route guided by both trails: at every 1-based position the attractiveness of
/// each unvisited candidate is the product of the global trail intensity raised to alpha,
/// the step cost raised to minus beta and the lookahead trail intensity raised to gamma.
/// The passed selector maps the attractiveness weights to the chosen candidate index.
fn guided_route(
    view: &IterationView<'_>,
    params: &GuidanceParams,
    select: impl Fn(&[Float]) -> usize,
) -> (Vec<usize>, Float) {
    let context = view.context;
    let evaluator = RouteEvaluator::new(context);

    let mut remaining = context.targets.clone();
    let mut route = Vec::with_capacity(remaining.len());
    let mut current = context.start;
    let mut total = 0.;

    for position in 1..=context.targets.len() {
        let costs = remaining
            .iter()
            .map(|&candidate| evaluator.step_duration(current, candidate, context.start_time + total))
            .collect::<Vec<_>>();
        let weights = remaining
            .iter()
            .zip(costs.iter())
            .map(|(&candidate, &cost)| {
                view.trail.intensity(&(current, candidate, position)).powf(params.alpha)
                    * cost.max(MIN_STEP_COST).powf(-params.beta)
                    * view.lookahead_trail.intensity(&(current, candidate, position)).powf(params.gamma)
            })
            .collect::<Vec<_>>();

        let selected = select(&weights);
        let next = remaining.remove(selected);

        total += costs[selected];
        route.push(next);
        current = next;
    }

    (route, total)
}

fn first_max_position(weights: &[Float]) -> usize {
    weights
        .iter()
        .enumerate()
        .fold((0, Float::NEG_INFINITY), |(best_idx, best), (idx, &weight)| {
            if compare_floats(weight, best) == Ordering::Greater { (idx, weight) } else { (best_idx, best) }
        })
        .0
}
