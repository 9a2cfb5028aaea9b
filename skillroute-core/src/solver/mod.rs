//! The solver module contains the search engine which turns a [Problem] into a [Solution].
//!
//! # Phases
//!
//! The search is a small state machine described by [SearchPhase]:
//!
//! - **constructing**: an initial solution is built by path cheapest arc followed by cheapest
//!   insertion. If some node cannot be placed anywhere, the search terminates as infeasible.
//! - **improving**: guided local search descends over several neighborhoods using a cost
//!   augmented by arc penalties. At every local optimum, arcs with maximal utility are
//!   penalized, so the descent is pushed away from it. The best solution according to the
//!   true objective is kept.
//! - **terminated**: either the time quota is reached or the best solution was not improved
//!   for too many local optima in a row.
//!
//! # Examples
//!
//! ```
//! # use skillroute_core::prelude::*;
//! # use std::sync::Arc;
//! let problem = ProblemBuilder::default()
//!     .add_node(Node::new_depot("depot", Coordinate::new(0., 0.)))
//!     .add_node(Node::new("a", Coordinate::new(10., 0.)))
//!     .add_node(Node::new("b", Coordinate::new(0., 10.)))
//!     .with_num_vehicles(2)
//!     .build()?;
//! let problem = Arc::new(problem);
//!
//! let config = SolverConfig { max_time: Some(1), ..SolverConfig::default() };
//! let environment = Arc::new(config.create_environment(Arc::new(|_| {})));
//!
//! let outcome = Solver::new(problem.clone(), environment, config).solve();
//! let solution = decode(problem.as_ref(), outcome)?;
//!
//! assert_eq!(solution.max_distance, 20.);
//! assert_eq!(solution.total_distance, 40.);
//! # Ok::<(), SolveError>(())
//! ```

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

use crate::construction::heuristics::build_initial_solution;
use crate::models::{Problem, Solution};
use crate::utils::{DefaultRandom, Environment, Float, InfoLogger, Quota, TimeQuota};
use std::sync::Arc;

mod decoder;
pub use self::decoder::*;

pub mod search;
use self::search::GuidedLocalSearch;

mod telemetry;
pub use self::telemetry::*;

/// Specifies search parameters.
#[derive(Clone)]
pub struct SolverConfig {
    /// A time limit in seconds, no limit if not set.
    pub max_time: Option<usize>,
    /// Amount of local optima in a row without improving the best solution after which
    /// the search stops.
    pub max_stagnation: usize,
    /// A weight of arc penalties in the augmented cost (lambda).
    pub penalty_factor: Float,
    /// A seed for random generator, the entropy is used if not set.
    pub seed: Option<u64>,
    /// Specifies what is reported during the search.
    pub telemetry_mode: TelemetryMode,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_time: Some(10),
            max_stagnation: 200,
            penalty_factor: 0.1,
            seed: Some(0),
            telemetry_mode: TelemetryMode::None,
        }
    }
}

impl SolverConfig {
    /// Creates a per call environment: seeded random, time quota and logger.
    pub fn create_environment(&self, logger: InfoLogger) -> Environment {
        let random = Arc::new(self.seed.map_or_else(DefaultRandom::default, DefaultRandom::new_with_seed));
        let quota = self.max_time.map(|max_time| Arc::new(TimeQuota::new(max_time as Float)) as Arc<dyn Quota>);

        Environment::new(random, quota, logger)
    }
}

/// Specifies a final result of the search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Every node is assigned and all constraints hold.
    Feasible(Solution),
    /// No feasible solution was found.
    Infeasible,
}

/// Specifies the search state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchPhase {
    /// An initial solution is being built.
    Constructing,
    /// The solution is being improved.
    Improving(Solution),
    /// The search is over.
    Terminated(SearchOutcome),
}

/// Solves a routing problem. Owns all search state, so separate calls never interfere.
pub struct Solver {
    problem: Arc<Problem>,
    environment: Arc<Environment>,
    config: SolverConfig,
}

impl Solver {
    /// Creates a new instance of `Solver`.
    pub fn new(problem: Arc<Problem>, environment: Arc<Environment>, config: SolverConfig) -> Self {
        Self { problem, environment, config }
    }

    /// Runs the search until it terminates. Always returns some outcome.
    pub fn solve(&self) -> SearchOutcome {
        let mut telemetry = Telemetry::new(self.config.telemetry_mode.clone());
        telemetry.start();

        let mut phase = SearchPhase::Constructing;
        loop {
            phase = match phase {
                SearchPhase::Constructing => self.construct(&mut telemetry),
                SearchPhase::Improving(solution) => self.improve(solution, &mut telemetry),
                SearchPhase::Terminated(outcome) => {
                    telemetry.on_result(&outcome);
                    return outcome;
                }
            };
            telemetry.on_phase(&phase);
        }
    }

    fn construct(&self, telemetry: &mut Telemetry) -> SearchPhase {
        let problem = self.problem.as_ref();

        if !problem.has_customers() {
            let solution = Solution { tours: vec![vec![]; problem.fleet.size()], cost: 0 };
            return SearchPhase::Terminated(SearchOutcome::Feasible(solution));
        }

        let insertion_ctx = build_initial_solution(problem);
        telemetry.on_initial(insertion_ctx.cost(problem), insertion_ctx.unassigned.len());

        match insertion_ctx.into_solution(problem) {
            Some(solution) => SearchPhase::Improving(solution),
            None => SearchPhase::Terminated(SearchOutcome::Infeasible),
        }
    }

    fn improve(&self, solution: Solution, telemetry: &mut Telemetry) -> SearchPhase {
        let search = GuidedLocalSearch::new(self.config.penalty_factor, self.config.max_stagnation);
        let best = search.run(self.problem.as_ref(), self.environment.as_ref(), solution, telemetry);

        SearchPhase::Terminated(SearchOutcome::Feasible(best))
    }
}
