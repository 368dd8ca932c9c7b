#[cfg(test)]
#[path = "../../tests/unit/solver/pheromone_test.rs"]
mod pheromone_test;

use crate::algorithms::trails::TrailMap;
use crate::construction::Ant;
use crate::models::problem::MIN_STEP_COST;
use crate::solver::Stage;
use crate::utils::Float;

/// Applies one iteration of trail updates: evaporation followed by the deposits of every
/// agent. The global trail is updated every iteration. The lookahead trail is frozen during
/// the init and stagnate stages; otherwise only the leading steps of each route reinforce
/// it, with a weight decaying linearly over the agent's horizon.
pub fn update_trails(
    trail: &mut TrailMap,
    lookahead_trail: &mut TrailMap,
    ants: &[Ant],
    start: usize,
    stage: Stage,
    retention: Float,
    deposit_norm: Float,
) {
    trail.evaporate(retention);

    for ant in ants {
        let share = deposit_share(ant, retention, deposit_norm);
        let mut origin = start;
        for (step, &destination) in ant.route.iter().enumerate() {
            trail.deposit((origin, destination, step + 1), share);
            origin = destination;
        }
    }

    if matches!(stage, Stage::Init | Stage::Stagnate) {
        return;
    }

    lookahead_trail.evaporate(retention);

    for ant in ants.iter().filter(|ant| ant.lookahead > 0) {
        let horizon = ant.lookahead;
        let share = deposit_share(ant, retention, deposit_norm);
        let mut origin = start;
        for (step, &destination) in ant.route.iter().enumerate().take(horizon) {
            let weight = if step == 0 {
                1. / (horizon + 1) as Float
            } else {
                (horizon - step) as Float / (horizon * horizon + horizon) as Float
            };
            lookahead_trail.deposit((origin, destination, step + 1), share * weight);
            origin = destination;
        }
    }
}

fn deposit_share(ant: &Ant, retention: Float, deposit_norm: Float) -> Float {
    (1. - retention) / (deposit_norm * ant.cost.max(MIN_STEP_COST))
}
