//! A module which provides simple logging of the search progress.

#[cfg(test)]
#[path = "../../tests/unit/solver/telemetry_test.rs"]
mod telemetry_test;

use crate::models::common::{Cost, unscale_value};
use crate::solver::{SearchOutcome, SearchPhase};
use crate::utils::{InfoLogger, Timer};

/// Specifies a telemetry mode.
#[derive(Clone)]
pub enum TelemetryMode {
    /// No telemetry at all.
    None,
    /// Only logging.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often, in local optima, search progress is logged.
        log_best: usize,
    },
}

/// Keeps search statistics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Statistics {
    /// Amount of local optima visited.
    pub local_optima: usize,
    /// Amount of applied moves.
    pub moves: usize,
    /// Amount of best solution improvements during the improving phase.
    pub improvements: usize,
}

/// Provides way to collect statistics and write information into log.
pub struct Telemetry {
    mode: TelemetryMode,
    time: Timer,
    statistics: Statistics,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: TelemetryMode) -> Self {
        Self { mode, time: Timer::start(), statistics: Statistics::default() }
    }

    /// Starts telemetry reporting.
    pub fn start(&mut self) {
        self.time = Timer::start();
        self.statistics = Statistics::default();
    }

    /// Returns collected statistics.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Reports a phase transition.
    pub fn on_phase(&mut self, phase: &SearchPhase) {
        match phase {
            SearchPhase::Constructing => self.log("constructing initial solution"),
            SearchPhase::Improving(solution) => {
                self.log(&format!("improving solution with cost {:.2}", unscale_value(solution.cost)))
            }
            SearchPhase::Terminated(_) => self.log("search terminated"),
        }
    }

    /// Reports initial solution statistics.
    pub fn on_initial(&mut self, cost: Cost, unassigned: usize) {
        self.log(&format!("initial solution built, cost: {:.2}, unassigned: {unassigned}", unscale_value(cost)));
    }

    /// Reports an applied move.
    pub fn on_move(&mut self) {
        self.statistics.moves += 1;
    }

    /// Reports a new best known solution.
    pub fn on_best(&mut self, cost: Cost) {
        self.statistics.improvements += 1;
        self.log(&format!("new best solution, cost: {:.2}", unscale_value(cost)));
    }

    /// Reports a local optimum of the augmented cost.
    pub fn on_local_optimum(&mut self, current: Cost, best: Cost) {
        self.statistics.local_optima += 1;

        let should_log = match &self.mode {
            TelemetryMode::OnlyLogging { log_best, .. } => self.statistics.local_optima % (*log_best).max(1) == 0,
            TelemetryMode::None => false,
        };

        if should_log {
            self.log(&format!(
                "local optimum {}, current cost: {:.2}, best cost: {:.2}",
                self.statistics.local_optima,
                unscale_value(current),
                unscale_value(best)
            ));
        }
    }

    /// Reports the final outcome.
    pub fn on_result(&mut self, outcome: &SearchOutcome) {
        let result = match outcome {
            SearchOutcome::Feasible(solution) => format!("best cost: {:.2}", unscale_value(solution.cost)),
            SearchOutcome::Infeasible => "no feasible solution".to_string(),
        };

        self.log(&format!(
            "{result}, local optima: {}, moves: {}, improvements: {}, elapsed: {}ms",
            self.statistics.local_optima,
            self.statistics.moves,
            self.statistics.improvements,
            self.time.elapsed_millis()
        ));
    }

    /// Writes log message.
    pub fn log(&self, message: &str) {
        if let TelemetryMode::OnlyLogging { logger, .. } = &self.mode {
            (logger)(format!("[{}s] {}", self.time.elapsed_secs(), message).as_str())
        }
    }
}
