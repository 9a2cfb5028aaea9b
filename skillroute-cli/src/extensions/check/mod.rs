//! Contains logic to check a response against its problem.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/check/check_test.rs"]
mod check_test;

use skillroute_core::models::problem::DimensionLimits;
use skillroute_pragmatic::checker::CheckerContext;
use skillroute_pragmatic::format::problem::deserialize_problem;
use skillroute_pragmatic::format::solution::deserialize_response;
use std::io::{BufReader, Read};

/// Checks that response is a feasible solution of the problem.
pub fn check_pragmatic_solution<F: Read>(
    problem_reader: BufReader<F>,
    response_reader: BufReader<F>,
    limits: &DimensionLimits,
) -> Result<(), Vec<String>> {
    let problem = deserialize_problem(problem_reader).map_err(|err| vec![format!("cannot read problem: '{err}'")])?;
    let response =
        deserialize_response(response_reader).map_err(|err| vec![format!("cannot read response: '{err}'")])?;

    CheckerContext::new(problem, response, limits)
        .and_then(|ctx| ctx.check())
        .map_err(|errors| errors.into_iter().map(|err| err.to_string()).collect())
}
