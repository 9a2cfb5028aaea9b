#[cfg(test)]
#[path = "../../tests/unit/checker/schedule_test.rs"]
mod schedule_test;

use super::*;
use skillroute_core::construction::features::TourSchedule;

/// Checks that every route can be scheduled respecting time windows, horizon and waiting limits.
pub fn check_schedule(ctx: &CheckerContext) -> Result<(), Vec<GenericError>> {
    let problem = &ctx.core_problem;
    if problem.nodes.iter().all(|node| node.time_window.is_none()) {
        return Ok(());
    }

    let schedule = TourSchedule::new(
        problem.matrix.clone(),
        problem.nodes.iter().map(|node| node.time_window).collect(),
        problem.limits.max_time,
        problem.limits.max_waiting,
    );

    let errors = ctx
        .get_tours()
        .into_iter()
        .filter(|(_, tour)| !schedule.is_feasible(tour.as_slice()))
        .map(|(vehicle, _)| GenericError::from(format!("route of vehicle {vehicle} violates time windows")))
        .collect::<Vec<_>>();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
