#[cfg(test)]
#[path = "../../tests/unit/solver/config_test.rs"]
mod config_test;

use crate::construction::GuidanceParams;
use crate::solver::{Stage, TelemetryMode};
use crate::utils::{Float, GenericResult};

/// Specifies how one group of agents constructs routes.
#[derive(Clone, Debug, PartialEq)]
pub enum BehaviorKind {
    /// Plain shuffling of the targets.
    Random,
    /// Trail guided construction with weighted sampling of the next attraction.
    Probabilistic(GuidanceParams),
    /// Trail guided construction which always follows the most attractive step.
    Greedy(GuidanceParams),
    /// Replay of the best route found so far.
    Elite,
}

/// A group of agents sharing one construction behavior.
#[derive(Clone, Debug, PartialEq)]
pub struct AntGroup {
    /// A construction behavior of the group.
    pub kind: BehaviorKind,
    /// Amount of agents in the group.
    pub count: usize,
}

/// Trail retention factors per stage: the share of intensity which survives one iteration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StageRates {
    /// Retention within the init stage.
    pub init: Float,
    /// Retention within the main stage.
    pub main: Float,
    /// Retention within the stagnate stage.
    pub stagnate: Float,
    /// Retention within the final stage.
    pub finish: Float,
}

impl StageRates {
    /// Returns the retention factor of given stage.
    pub fn get(&self, stage: Stage) -> Float {
        match stage {
            Stage::Init => self.init,
            Stage::Main => self.main,
            Stage::Stagnate => self.stagnate,
            Stage::Final => self.finish,
        }
    }
}

/// Agent groups used within each stage.
#[derive(Clone, Debug, PartialEq)]
pub struct StagePopulations {
    /// Groups of the init stage.
    pub init: Vec<AntGroup>,
    /// Groups of the main stage.
    pub main: Vec<AntGroup>,
    /// Groups of the stagnate stage.
    pub stagnate: Vec<AntGroup>,
    /// Groups of the final stage.
    pub finish: Vec<AntGroup>,
}

impl StagePopulations {
    /// Returns agent groups of given stage.
    pub fn get(&self, stage: Stage) -> &[AntGroup] {
        match stage {
            Stage::Init => &self.init,
            Stage::Main => &self.main,
            Stage::Stagnate => &self.stagnate,
            Stage::Final => &self.finish,
        }
    }
}

/// A configuration of the route planner.
#[derive(Clone)]
pub struct PlannerConfig {
    /// Total amount of iterations.
    pub iterations: usize,
    /// Amount of leading iterations which run the init stage.
    pub init_window: usize,
    /// Amount of trailing iterations which run the final stage.
    pub final_window: usize,
    /// Amount of iterations without improvement after which the stagnate stage starts.
    pub stagnation_threshold: usize,
    /// Whether the best route of each iteration is refined by local search.
    pub local_search: bool,
    /// A normalization constant of the trail deposit amount.
    pub deposit_norm: Float,
    /// Trail retention factors per stage.
    pub rates: StageRates,
    /// Agent groups per stage.
    pub populations: StagePopulations,
    /// A telemetry mode.
    pub telemetry: TelemetryMode,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            iterations: 100,
            init_window: 10,
            final_window: 10,
            stagnation_threshold: 10,
            local_search: true,
            deposit_norm: 1.,
            rates: StageRates { init: 0.9, main: 0.9, stagnate: 0.3, finish: 0.5 },
            populations: default_populations(),
            telemetry: TelemetryMode::None,
        }
    }
}

fn default_populations() -> StagePopulations {
    StagePopulations {
        init: vec![AntGroup { kind: BehaviorKind::Random, count: 100 }],
        main: vec![
            AntGroup {
                kind: BehaviorKind::Probabilistic(GuidanceParams { alpha: 0.8, beta: 0.7, gamma: 0.9, lookahead: 10 }),
                count: 200,
            },
            AntGroup {
                kind: BehaviorKind::Greedy(GuidanceParams { alpha: 0.8, beta: 0.8, gamma: 0.5, lookahead: 5 }),
                count: 50,
            },
        ],
        stagnate: vec![AntGroup { kind: BehaviorKind::Random, count: 100 }],
        finish: vec![AntGroup {
            kind: BehaviorKind::Probabilistic(GuidanceParams { alpha: 0.5, beta: 0.1, gamma: 0.1, lookahead: 5 }),
            count: 100,
        }],
    }
}

/// Provides a way to build the planner configuration, starting from documented defaults.
#[derive(Default)]
pub struct PlannerConfigBuilder {
    config: PlannerConfig,
}

impl PlannerConfigBuilder {
    /// Sets total amount of iterations.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.config.iterations = iterations;
        self
    }

    /// Sets stage windows: amounts of leading init and trailing final iterations.
    pub fn with_stage_windows(mut self, init: usize, finish: usize) -> Self {
        self.config.init_window = init;
        self.config.final_window = finish;
        self
    }

    /// Sets amount of iterations without improvement which triggers the stagnate stage.
    pub fn with_stagnation_threshold(mut self, threshold: usize) -> Self {
        self.config.stagnation_threshold = threshold;
        self
    }

    /// Enables or disables local search of the best route of each iteration.
    pub fn with_local_search(mut self, enabled: bool) -> Self {
        self.config.local_search = enabled;
        self
    }

    /// Sets the normalization constant of the trail deposit amount.
    pub fn with_deposit_norm(mut self, norm: Float) -> Self {
        self.config.deposit_norm = norm;
        self
    }

    /// Sets trail retention factors per stage.
    pub fn with_rates(mut self, rates: StageRates) -> Self {
        self.config.rates = rates;
        self
    }

    /// Sets agent groups per stage.
    pub fn with_populations(mut self, populations: StagePopulations) -> Self {
        self.config.populations = populations;
        self
    }

    /// Sets a telemetry mode.
    pub fn with_telemetry(mut self, telemetry: TelemetryMode) -> Self {
        self.config.telemetry = telemetry;
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> GenericResult<PlannerConfig> {
        let config = self.config;

        if config.iterations == 0 {
            return Err("planner requires at least one iteration".into());
        }

        let rates = [config.rates.init, config.rates.main, config.rates.stagnate, config.rates.finish];
        if rates.iter().any(|rate| !rate.is_finite() || !(0. ..=1.).contains(rate)) {
            return Err("trail retention factors must be within [0, 1]".into());
        }

        if !config.deposit_norm.is_finite() || config.deposit_norm <= 0. {
            return Err("deposit normalization must be a positive number".into());
        }

        let populations = &config.populations;
        let has_empty_stage = [&populations.init, &populations.main, &populations.stagnate, &populations.finish]
            .iter()
            .any(|groups| groups.iter().map(|group| group.count).sum::<usize>() == 0);
        if has_empty_stage {
            return Err("every stage requires at least one agent".into());
        }

        Ok(config)
    }
}
