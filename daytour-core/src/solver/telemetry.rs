//! A module which provides simple logging of the planner progress.

#[cfg(test)]
#[path = "../../tests/unit/solver/telemetry_test.rs"]
mod telemetry_test;

use crate::solver::Stage;
use crate::utils::{Float, InfoLogger, Timer};

/// Specifies a telemetry mode.
#[derive(Clone)]
pub enum TelemetryMode {
    /// No telemetry at all.
    None,
    /// Only logging.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often iteration progress is logged. Improvements are always logged.
        log_progress: usize,
    },
}

/// Provides a way to write planner progress into the log.
pub struct Telemetry {
    mode: TelemetryMode,
    time: Timer,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: TelemetryMode) -> Self {
        Self { mode, time: Timer::start() }
    }

    /// Reports the state of a finished iteration.
    pub fn on_iteration(&self, iteration: usize, stage: Stage, best_cost: Option<Float>, is_improved: bool) {
        match &self.mode {
            TelemetryMode::None => {}
            TelemetryMode::OnlyLogging { log_progress, .. } => {
                if is_improved || iteration % (*log_progress).max(1) == 0 {
                    let best = best_cost.map_or("unknown".to_string(), |cost| format!("{cost:.2}min"));
                    self.log(
                        format!(
                            "[{}s] iteration {} (stage: {}): best known total is {}",
                            self.time.elapsed_secs(),
                            iteration,
                            stage,
                            best
                        )
                        .as_str(),
                    );
                }
            }
        }
    }

    /// Reports the final result.
    pub fn on_result(&self, iterations: usize, best_cost: Float) {
        self.log(
            format!(
                "[{}s] planning done after {} iterations, best total is {:.2}min",
                self.time.elapsed_secs(),
                iterations,
                best_cost
            )
            .as_str(),
        );
    }

    /// Writes a message to the log.
    pub fn log(&self, message: &str) {
        if let TelemetryMode::OnlyLogging { logger, .. } = &self.mode {
            (logger)(message)
        }
    }
}
