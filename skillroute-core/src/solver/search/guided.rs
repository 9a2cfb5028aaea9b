#[cfg(test)]
#[path = "../../../tests/unit/solver/search/guided_test.rs"]
mod guided_test;

use super::{CompositeLocalOperator, LocalOperator, SearchContext};
use crate::models::{Problem, Solution};
use crate::solver::Telemetry;
use crate::utils::{Environment, Float};
use rustc_hash::FxHashMap;

/// Keeps penalties of undirected arcs.
#[derive(Clone, Debug, Default)]
pub struct ArcPenalties {
    penalties: FxHashMap<(usize, usize), u32>,
}

impl ArcPenalties {
    /// Returns penalty of the arc.
    pub fn get(&self, from: usize, to: usize) -> u32 {
        self.penalties.get(&Self::key(from, to)).copied().unwrap_or(0)
    }

    /// Increments penalty of the arc.
    pub fn increment(&mut self, from: usize, to: usize) {
        *self.penalties.entry(Self::key(from, to)).or_insert(0) += 1;
    }

    /// Returns amount of penalized arcs.
    pub fn len(&self) -> usize {
        self.penalties.len()
    }

    /// Returns true if no arc is penalized.
    pub fn is_empty(&self) -> bool {
        self.penalties.is_empty()
    }

    fn key(from: usize, to: usize) -> (usize, usize) {
        if from <= to { (from, to) } else { (to, from) }
    }
}

/// Runs guided local search: repeats descent with local search operators and penalizes arcs of
/// every local optimum reached.
pub struct GuidedLocalSearch {
    penalty_factor: Float,
    max_stagnation: usize,
    operator: CompositeLocalOperator,
}

impl GuidedLocalSearch {
    /// Creates a new instance of `GuidedLocalSearch` with default operators.
    pub fn new(penalty_factor: Float, max_stagnation: usize) -> Self {
        Self { penalty_factor, max_stagnation, operator: CompositeLocalOperator::default() }
    }

    /// Improves the solution until the quota is reached or the search stagnates.
    /// Returns the best found solution.
    pub fn run(
        &self,
        problem: &Problem,
        environment: &Environment,
        initial: Solution,
        telemetry: &mut Telemetry,
    ) -> Solution {
        let mut search_ctx = SearchContext::new(problem, &initial, self.penalty_factor);
        let mut best = initial;
        let mut stagnation = 0;

        loop {
            let mut is_improved = false;

            while !environment.is_quota_reached() {
                let Some(changes) = self.operator.explore(&search_ctx, environment.random.as_ref()) else { break };

                search_ctx.apply(changes);
                telemetry.on_move();

                let cost = search_ctx.cost();
                if cost < best.cost {
                    best = search_ctx.to_solution();
                    is_improved = true;
                    telemetry.on_best(cost);
                }
            }

            if environment.is_quota_reached() {
                break;
            }

            telemetry.on_local_optimum(search_ctx.cost(), best.cost);

            stagnation = if is_improved { 0 } else { stagnation + 1 };
            if stagnation >= self.max_stagnation {
                break;
            }

            if search_ctx.penalize() == 0 {
                break;
            }
        }

        best
    }
}
