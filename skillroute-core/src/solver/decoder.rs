//! Decodes the search outcome into caller facing routes and metrics.

#[cfg(test)]
#[path = "../../tests/unit/solver/decoder_test.rs"]
mod decoder_test;

use crate::models::Problem;
use crate::models::common::unscale_value;
use crate::solver::SearchOutcome;
use crate::utils::{Float, SolveError};

/// A decoded route of a single vehicle.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedRoute {
    /// Vehicle index.
    pub vehicle: usize,
    /// Node indices from depot to depot, empty if vehicle serves no customers.
    pub nodes: Vec<usize>,
    /// Node ids in the same order as indices.
    pub ids: Vec<String>,
    /// Route distance, unscaled.
    pub distance: Float,
}

/// A decoded solution.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedSolution {
    /// Routes ordered by vehicle index, one per vehicle.
    pub routes: Vec<DecodedRoute>,
    /// The longest route distance, unscaled.
    pub max_distance: Float,
    /// A sum of all route distances, unscaled.
    pub total_distance: Float,
    /// The objective value, unscaled.
    pub objective: Float,
}

/// Decodes the search outcome. Fails with infeasibility error if no solution was found.
pub fn decode(problem: &Problem, outcome: SearchOutcome) -> Result<DecodedSolution, SolveError> {
    let solution = match outcome {
        SearchOutcome::Feasible(solution) => solution,
        SearchOutcome::Infeasible => return Err(SolveError::infeasible("No solution found.")),
    };

    let matrix = problem.matrix.as_ref();
    let (routes, distances): (Vec<_>, Vec<_>) = (0..problem.fleet.size())
        .map(|vehicle| {
            let nodes = solution.path(vehicle);
            let distance = matrix.path_distance(nodes.as_slice());
            let ids = nodes.iter().map(|&idx| problem.nodes[idx].id.clone()).collect();

            (DecodedRoute { vehicle, nodes, ids, distance: unscale_value(distance) }, distance)
        })
        .unzip();

    Ok(DecodedSolution {
        routes,
        max_distance: unscale_value(distances.iter().copied().max().unwrap_or_default()),
        total_distance: unscale_value(distances.iter().sum()),
        objective: unscale_value(solution.cost),
    })
}
