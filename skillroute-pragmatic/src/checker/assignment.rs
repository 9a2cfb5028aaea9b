#[cfg(test)]
#[path = "../../tests/unit/checker/assignment_test.rs"]
mod assignment_test;

use super::*;
use crate::utils::combine_error_results;

/// Checks assignment of customers to vehicles.
pub fn check_assignment(ctx: &CheckerContext) -> Result<(), Vec<GenericError>> {
    combine_error_results(&[
        check_vehicles(ctx),
        check_route_shape(ctx),
        check_customers_presence(ctx),
        check_skills(ctx),
    ])
}

/// Checks that there is exactly one route per vehicle.
fn check_vehicles(ctx: &CheckerContext) -> Result<(), GenericError> {
    let expected = ctx.core_problem.fleet.size();
    let actual = ctx.routes().len();

    if expected == actual {
        Ok(())
    } else {
        Err(format!("expected {expected} routes, one per vehicle, got {actual}").into())
    }
}

/// Checks that every route is either empty or goes from depot to depot.
fn check_route_shape(ctx: &CheckerContext) -> Result<(), GenericError> {
    ctx.routes().iter().enumerate().try_for_each(|(vehicle, route)| ctx.get_tour(vehicle, route).map(|_| ()))
}

/// Checks that every customer is served exactly once.
fn check_customers_presence(ctx: &CheckerContext) -> Result<(), GenericError> {
    let mut visits = vec![0_usize; ctx.problem.nodes.len()];
    ctx.get_tours().iter().flat_map(|(_, tour)| tour.iter()).for_each(|&node| visits[node] += 1);

    let ids_of = |predicate: &dyn Fn(usize) -> bool| {
        ctx.core_problem
            .customers()
            .filter(|&node| predicate(visits[node]))
            .map(|node| ctx.problem.nodes[node].id.to_string())
            .collect::<Vec<_>>()
    };

    let unserved = ids_of(&|count| count == 0);
    if !unserved.is_empty() {
        return Err(format!("customers are not served: {}", unserved.join(", ")).into());
    }

    let duplicated = ids_of(&|count| count > 1);
    if !duplicated.is_empty() {
        return Err(format!("customers are served more than once: {}", duplicated.join(", ")).into());
    }

    Ok(())
}

/// Checks that vehicles have all skills required by customers they serve.
fn check_skills(ctx: &CheckerContext) -> Result<(), GenericError> {
    if !ctx.problem.has_skills_constraint() {
        return Ok(());
    }

    ctx.get_tours().into_iter().try_for_each(|(vehicle, tour)| {
        let Some(fleet_vehicle) = ctx.core_problem.fleet.vehicles.get(vehicle) else {
            return Ok(());
        };

        match tour.iter().map(|&node| &ctx.core_problem.nodes[node]).find(|node| {
            !fleet_vehicle.has_all_skills(node.required_skills.iter().map(|skill| skill.as_str()))
        }) {
            Some(node) => Err(format!("vehicle {vehicle} has no skills required by node '{}'", node.id).into()),
            None => Ok(()),
        }
    })
}
