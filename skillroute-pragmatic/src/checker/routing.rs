#[cfg(test)]
#[path = "../../tests/unit/checker/routing_test.rs"]
mod routing_test;

use super::*;
use crate::utils::combine_error_results;
use skillroute_core::construction::features::tour_distance;
use skillroute_core::models::common::{Distance, unscale_value};
use skillroute_core::models::solution::calculate_cost;

/// An absolute tolerance used to compare reported distances.
const DISTANCE_TOLERANCE: f64 = 0.01;

/// Checks that distances are within the limit and reported statistics match the routes.
pub fn check_routing(ctx: &CheckerContext) -> Result<(), Vec<GenericError>> {
    combine_error_results(&[check_distance_limit(ctx), check_statistics(ctx)])
}

fn check_distance_limit(ctx: &CheckerContext) -> Result<(), GenericError> {
    let max_distance = ctx.core_problem.limits.max_distance;

    ctx.get_tours().into_iter().try_for_each(|(vehicle, tour)| {
        let distance = tour_distance(&ctx.core_problem.matrix, tour.as_slice());
        if distance > max_distance {
            Err(format!(
                "route of vehicle {vehicle} has distance {} which exceeds the limit {}",
                unscale_value(distance),
                unscale_value(max_distance)
            )
            .into())
        } else {
            Ok(())
        }
    })
}

fn check_statistics(ctx: &CheckerContext) -> Result<(), GenericError> {
    let distances = ctx
        .get_tours()
        .into_iter()
        .map(|(_, tour)| tour_distance(&ctx.core_problem.matrix, tour.as_slice()))
        .collect::<Vec<Distance>>();

    let expected_max = unscale_value(distances.iter().copied().max().unwrap_or_default());
    check_value("max distance", expected_max, ctx.response.max_distance)?;

    // NOTE depot only response has no totals
    if !ctx.core_problem.has_customers() {
        return Ok(());
    }

    let expected_total = unscale_value(distances.iter().sum());
    check_value("total distance", expected_total, ctx.response.total_distance)?;

    let expected_objective = unscale_value(calculate_cost(&distances, ctx.core_problem.goal.span_cost_coefficient()));
    check_value("objective", expected_objective, ctx.response.objective)
}

fn check_value(name: &str, expected: f64, actual: Option<f64>) -> Result<(), GenericError> {
    match actual {
        Some(actual) if (expected - actual).abs() <= DISTANCE_TOLERANCE => Ok(()),
        Some(actual) => Err(format!("{name} mismatch: expected {expected}, got {actual}").into()),
        None => Err(format!("{name} is missing").into()),
    }
}
