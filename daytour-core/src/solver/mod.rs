//! The solver module contains the iteration loop which orchestrates route construction,
//! refinement and trail updates to find a time optimal visiting order.

#[cfg(test)]
#[path = "../../tests/unit/solver/planner_test.rs"]
mod planner_test;

use crate::algorithms::trails::TrailMap;
use crate::construction::{
    Ant, ConstructionBehavior, EliteBehavior, GreedyBehavior, IterationView, PlanContext, ProbabilisticBehavior,
    RandomBehavior, RouteEvaluator,
};
use crate::models::common::DayTime;
use crate::models::solution::TourPlan;
use crate::models::Park;
use crate::utils::{compare_floats, Environment, Float, GenericResult};
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::sync::Arc;

mod config;
pub use self::config::*;

mod local_search;
pub use self::local_search::refine;

mod pheromone;
pub use self::pheromone::update_trails;

mod stages;
pub use self::stages::*;

mod telemetry;
pub use self::telemetry::*;

/// Keeps the search progress across iterations.
#[derive(Default)]
struct SearchState {
    /// The best route with its cost found so far.
    best: Option<(Vec<usize>, Float)>,
    /// The iteration at which the current period without improvement started.
    stagnation_start: Option<usize>,
}

/// A planner which searches for a time optimal visiting order of park attractions.
pub struct RoutePlanner {
    park: Arc<Park>,
    config: PlannerConfig,
    environment: Arc<Environment>,
}

impl RoutePlanner {
    /// Creates a new instance of `RoutePlanner`.
    pub fn new(park: Arc<Park>, config: PlannerConfig, environment: Arc<Environment>) -> Self {
        Self { park, config, environment }
    }

    /// Plans the visiting order of given attractions which needs the least total time when
    /// starting from the current position at the given clock time.
    pub fn plan(&self, attractions: &[&str], start: &str, start_time: DayTime) -> GenericResult<TourPlan> {
        self.validate()?;

        let context = self.create_context(attractions, start, start_time)?;
        let evaluator = RouteEvaluator::new(&context);

        if context.targets.len() <= 1 {
            return Ok(evaluator.timeline(&context.targets));
        }

        let route = self.search(&context);

        Ok(evaluator.timeline(&route))
    }

    fn validate(&self) -> GenericResult<()> {
        if self.config.iterations == 0 {
            return Err("planner requires at least one iteration".into());
        }

        let stages = [Stage::Init, Stage::Main, Stage::Stagnate, Stage::Final];
        let has_empty_stage = stages
            .iter()
            .any(|stage| self.config.populations.get(*stage).iter().map(|group| group.count).sum::<usize>() == 0);
        if has_empty_stage {
            return Err("every stage requires at least one agent".into());
        }

        Ok(())
    }

    fn create_context(&self, attractions: &[&str], start: &str, start_time: DayTime) -> GenericResult<PlanContext> {
        let resolve = |id: &str| {
            self.park.index_of(id).ok_or_else(|| format!("unknown attraction: '{id}'").into())
        };

        let targets = attractions.iter().map(|id| resolve(id)).collect::<GenericResult<Vec<_>>>()?;
        let start = resolve(start)?;

        let mut seen = FxHashSet::default();
        if let Some(duplicate) = targets.iter().find(|target| !seen.insert(**target)) {
            return Err(format!("duplicate attraction in the visit list: '{}'", self.park.attraction(*duplicate).id)
                .into());
        }

        Ok(PlanContext { park: self.park.clone(), targets, start, start_time: start_time.as_timestamp() })
    }

    fn search(&self, context: &PlanContext) -> Vec<usize> {
        let telemetry = Telemetry::new(self.config.telemetry.clone());

        let mut nodes = context.targets.clone();
        nodes.push(context.start);
        let mut trail = TrailMap::new(&nodes, context.targets.len());
        let mut lookahead_trail = trail.clone();

        let mut state = SearchState::default();

        for iteration in 0..self.config.iterations {
            let stage = select_stage(
                iteration,
                self.config.iterations,
                self.config.init_window,
                self.config.final_window,
                self.config.stagnation_threshold,
                state.stagnation_start,
            );

            let mut ants = self.create_ants(context, stage, &trail, &lookahead_trail, &state);

            let best_idx = ants
                .iter()
                .enumerate()
                .min_by(|(_, a), (_, b)| compare_floats(a.cost, b.cost))
                .map(|(idx, _)| idx)
                .expect("stage population is empty");

            if self.config.local_search {
                let (route, cost) = refine(context, &ants[best_idx].route, ants[best_idx].cost);
                ants[best_idx].route = route;
                ants[best_idx].cost = cost;
            }

            let candidate = &ants[best_idx];
            let improved = state
                .best
                .as_ref()
                .map_or(true, |(_, best_cost)| compare_floats(candidate.cost, *best_cost) == Ordering::Less);

            if improved {
                state.best = Some((candidate.route.clone(), candidate.cost));
                if stage == Stage::Stagnate {
                    state.stagnation_start = None;
                }
            } else if state.stagnation_start.is_none() {
                state.stagnation_start = Some(iteration);
            }

            update_trails(
                &mut trail,
                &mut lookahead_trail,
                &ants,
                context.start,
                stage,
                self.config.rates.get(stage),
                self.config.deposit_norm,
            );

            telemetry.on_iteration(iteration, stage, state.best.as_ref().map(|(_, cost)| *cost), improved);
        }

        let (route, cost) = state.best.expect("no route after the iteration loop");
        telemetry.on_result(self.config.iterations, cost);

        route
    }

    fn create_ants(
        &self,
        context: &PlanContext,
        stage: Stage,
        trail: &TrailMap,
        lookahead_trail: &TrailMap,
        state: &SearchState,
    ) -> Vec<Ant> {
        let groups = self.config.populations.get(stage);
        let total = groups.iter().map(|group| group.count).sum();

        let mut ants: Vec<Ant> = Vec::with_capacity(total);
        let mut explored: Vec<Vec<usize>> = Vec::with_capacity(total);

        for group in groups {
            let behavior = create_behavior(&group.kind);
            for _ in 0..group.count {
                let view = IterationView {
                    context,
                    trail,
                    lookahead_trail,
                    explored: &explored,
                    best: state.best.as_ref(),
                };
                let ant = behavior.construct(&view, self.environment.random.as_ref());
                explored.push(ant.route.clone());
                ants.push(ant);
            }
        }

        ants
    }
}

fn create_behavior(kind: &BehaviorKind) -> Box<dyn ConstructionBehavior> {
    match kind {
        BehaviorKind::Random => Box::new(RandomBehavior),
        BehaviorKind::Probabilistic(params) => Box::new(ProbabilisticBehavior::new(*params)),
        BehaviorKind::Greedy(params) => Box::new(GreedyBehavior::new(*params)),
        BehaviorKind::Elite => Box::new(EliteBehavior),
    }
}
