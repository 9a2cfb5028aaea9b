#[cfg(test)]
#[path = "../../../tests/unit/construction/heuristics/insertions_test.rs"]
mod insertions_test;

use super::InsertionContext;
use crate::models::Problem;
use crate::models::common::Cost;
use crate::models::problem::DEPOT_INDEX;

/// Specifies insertion result variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InsertionResult {
    /// Successful insertion result.
    Success(InsertionSuccess),
    /// Insertion failure: no vehicle and position keeps the tour feasible.
    Failure {
        /// Node which cannot be inserted.
        node: usize,
    },
}

/// Specifies where a node should be inserted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InsertionSuccess {
    /// Node to be inserted.
    pub node: usize,
    /// Vehicle which gets the node.
    pub vehicle: usize,
    /// Position in the vehicle tour, depot is not counted.
    pub position: usize,
    /// An arc cost increase caused by the insertion.
    pub cost: Cost,
}

/// Finds the cheapest feasible insertion of the node over all vehicles and positions.
/// Ties are resolved by the lowest vehicle index, then by the lowest position.
pub fn evaluate_insertion(problem: &Problem, insertion_ctx: &InsertionContext, node: usize) -> InsertionResult {
    let matrix = problem.matrix.as_ref();
    let goal = problem.goal.as_ref();

    let mut best: Option<InsertionSuccess> = None;
    for (vehicle, tour) in insertion_ctx.tours.iter().enumerate() {
        if !goal.is_feasible_assignment(node, vehicle) {
            continue;
        }

        for position in 0..=tour.len() {
            let prev = if position == 0 { DEPOT_INDEX } else { tour[position - 1] };
            let next = tour.get(position).copied().unwrap_or(DEPOT_INDEX);
            let cost = matrix.distance(prev, node) + matrix.distance(node, next) - matrix.distance(prev, next);

            if best.as_ref().is_some_and(|best| best.cost <= cost) {
                continue;
            }

            let mut candidate = tour.clone();
            candidate.insert(position, node);

            if goal.is_feasible_tour(vehicle, candidate.as_slice()) {
                best = Some(InsertionSuccess { node, vehicle, position, cost });
            }
        }
    }

    best.map_or(InsertionResult::Failure { node }, InsertionResult::Success)
}

/// Inserts unassigned nodes one by one: on each step the node with the cheapest insertion
/// is placed. Nodes without feasible insertion stay unassigned.
pub fn insert_cheapest(problem: &Problem, insertion_ctx: &mut InsertionContext) {
    let mut failed = Vec::new();

    loop {
        let candidates =
            insertion_ctx.unassigned.iter().copied().filter(|node| !failed.contains(node)).collect::<Vec<_>>();

        let mut best: Option<InsertionSuccess> = None;
        for node in candidates {
            match evaluate_insertion(problem, insertion_ctx, node) {
                InsertionResult::Success(success) => {
                    if best.as_ref().is_none_or(|best| success.cost < best.cost) {
                        best = Some(success);
                    }
                }
                InsertionResult::Failure { node } => failed.push(node),
            }
        }

        let Some(success) = best else { break };

        let mut tour = insertion_ctx.tours[success.vehicle].clone();
        tour.insert(success.position, success.node);
        insertion_ctx.set_tour(problem, success.vehicle, tour);
        insertion_ctx.mark_assigned(success.node);
    }
}
