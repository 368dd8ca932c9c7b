//! Provides the logic to construct and evaluate candidate routes.

use crate::models::common::Timestamp;
use crate::models::Park;
use crate::utils::Float;
use std::sync::Arc;

mod behaviors;
pub use self::behaviors::*;

mod evaluators;
pub use self::evaluators::*;

/// Keeps everything needed to construct and evaluate one route: the park, the attractions to
/// visit, the start position and the start time. Immutable during the whole planner run.
#[derive(Clone)]
pub struct PlanContext {
    /// A park with attraction and travel data.
    pub park: Arc<Park>,
    /// Indices of attractions to visit.
    pub targets: Vec<usize>,
    /// Index of the attraction where the visitor currently stays.
    pub start: usize,
    /// Minutes since midnight at which the visit starts.
    pub start_time: Timestamp,
}

/// A route built by one agent within an iteration, together with its cost.
#[derive(Clone, Debug)]
pub struct Ant {
    /// Visiting order as park attraction indices.
    pub route: Vec<usize>,
    /// Total time of the route, in minutes.
    pub cost: Float,
    /// Amount of leading route steps which reinforce the lookahead trail, zero for agents
    /// which do not use trail guidance.
    pub lookahead: usize,
}
