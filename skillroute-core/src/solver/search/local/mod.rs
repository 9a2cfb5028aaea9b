//! This module contains various Local Search operators.
//!
//! Every operator scans its neighborhood with first improvement strategy: arc deltas are cheap
//! to compute, so they are evaluated first and only an improving move is checked against
//! constraints.

use super::{SearchContext, TourChange};
use crate::utils::{Float, Random, is_improvement};
use std::sync::Arc;

mod exchange_2opt;
pub use self::exchange_2opt::*;

mod exchange_sequence;
pub use self::exchange_sequence::*;

mod exchange_swap;
pub use self::exchange_swap::*;

/// Specifies behavior of a local search operator.
pub trait LocalOperator {
    /// Explores the neighborhood of the current solution and returns route changes of the first
    /// feasible move which decreases the augmented cost, if any.
    fn explore(&self, search_ctx: &SearchContext<'_>, random: &dyn Random) -> Option<Vec<TourChange>>;
}

/// Provides the way to run multiple local search operators in a random order.
pub struct CompositeLocalOperator {
    operators: Vec<Arc<dyn LocalOperator + Send + Sync>>,
}

impl CompositeLocalOperator {
    /// Creates a new instance of `CompositeLocalOperator`.
    pub fn new(operators: Vec<Arc<dyn LocalOperator + Send + Sync>>) -> Self {
        Self { operators }
    }
}

impl Default for CompositeLocalOperator {
    fn default() -> Self {
        Self::new(vec![
            Arc::new(ExchangeTwoOpt::default()),
            Arc::new(ExchangeSequence::new(1, 1)),
            Arc::new(ExchangeSequence::new(2, 3)),
            Arc::new(ExchangeSwap::default()),
        ])
    }
}

impl LocalOperator for CompositeLocalOperator {
    fn explore(&self, search_ctx: &SearchContext<'_>, random: &dyn Random) -> Option<Vec<TourChange>> {
        let mut order = (0..self.operators.len()).collect::<Vec<_>>();
        random.shuffle(order.as_mut_slice());

        order.into_iter().find_map(|idx| self.operators[idx].explore(search_ctx, random))
    }
}

/// Returns vehicle indices in random order.
fn shuffled_vehicles(search_ctx: &SearchContext<'_>, random: &dyn Random) -> Vec<usize> {
    let mut vehicles = (0..search_ctx.routes().len()).collect::<Vec<_>>();
    random.shuffle(vehicles.as_mut_slice());

    vehicles
}

/// Returns changes if they improve the augmented cost and are feasible.
fn accept_if_improving(
    search_ctx: &SearchContext<'_>,
    delta: Float,
    create_changes: impl FnOnce() -> Vec<TourChange>,
) -> Option<Vec<TourChange>> {
    if !is_improvement(delta, 0.) {
        return None;
    }

    let changes = create_changes();

    search_ctx.is_feasible(changes.as_slice()).then_some(changes)
}
