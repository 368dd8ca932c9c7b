#[cfg(test)]
#[path = "../../tests/unit/solver/stages_test.rs"]
mod stages_test;

use std::fmt;

/// A phase of the planner run which controls the exploration and exploitation balance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Leading iterations which explore with random agents only.
    Init,
    /// Regular iterations driven by trail guided agents.
    Main,
    /// Iterations which recover from a long period without improvement.
    Stagnate,
    /// Trailing iterations which exploit the accumulated trails.
    Final,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Init => "init",
            Stage::Main => "main",
            Stage::Stagnate => "stagnate",
            Stage::Final => "final",
        };
        write!(f, "{name}")
    }
}

/// Selects the stage of given iteration. The decision depends only on the passed values:
/// the iteration index, the total iteration count, both stage window lengths, the stagnation
/// threshold and the iteration at which the current period without improvement started.
pub fn select_stage(
    iteration: usize,
    total: usize,
    init_window: usize,
    final_window: usize,
    stagnation_threshold: usize,
    stagnation_start: Option<usize>,
) -> Stage {
    if iteration < init_window {
        Stage::Init
    } else if iteration > total.saturating_sub(final_window) {
        Stage::Final
    } else {
        match stagnation_start {
            Some(start) if iteration - start >= stagnation_threshold => Stage::Stagnate,
            _ => Stage::Main,
        }
    }
}
