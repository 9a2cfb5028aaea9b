#[cfg(test)]
#[path = "../../../tests/unit/format/solution/writer_test.rs"]
mod writer_test;

use super::*;
use crate::format::problem::Problem;
use skillroute_core::solver::DecodedSolution;

/// A message returned when there is nothing to route.
pub const DEPOT_ONLY_MESSAGE: &str = "Only depot present, no routes generated.";

/// Creates a success response from the decoded solution mapping node indices back to ids
/// given by caller.
pub fn create_response(problem: &Problem, solution: &DecodedSolution) -> Response {
    let routes = solution
        .routes
        .iter()
        .map(|route| route.nodes.iter().map(|&idx| problem.nodes[idx].id.clone()).collect())
        .collect();

    Response::success(routes, solution.max_distance, solution.total_distance, solution.objective)
}

/// Creates a response for the problem which has only the depot: an empty route per vehicle.
pub fn create_depot_only_response(num_vehicles: usize) -> Response {
    Response {
        status: STATUS_SUCCESS.to_string(),
        routes: Some(vec![vec![]; num_vehicles]),
        max_distance: Some(0.),
        total_distance: None,
        objective: None,
        message: Some(DEPOT_ONLY_MESSAGE.to_string()),
    }
}
