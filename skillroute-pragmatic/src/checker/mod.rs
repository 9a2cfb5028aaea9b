//! This module provides functionality to automatically check that given response is a feasible
//! solution of the problem, which means that every customer is served exactly once and there
//! are no constraint violations.

#[cfg(test)]
#[path = "../../tests/unit/checker/checker_test.rs"]
mod checker_test;

use crate::format::NodeId;
use crate::format::problem::*;
use crate::format::solution::*;
use rustc_hash::FxHashMap;
use skillroute_core::models::Problem as CoreProblem;
use skillroute_core::models::problem::{DEPOT_INDEX, DimensionLimits};
use skillroute_core::utils::GenericError;
use std::collections::HashSet;

mod assignment;
use self::assignment::check_assignment;

mod routing;
use self::routing::check_routing;

mod schedule;
use self::schedule::check_schedule;

/// Stores problem and response together and provides some helper methods.
pub struct CheckerContext {
    /// An original problem definition.
    pub problem: Problem,
    /// A response to be checked.
    pub response: Response,

    core_problem: CoreProblem,
    node_index: FxHashMap<NodeId, usize>,
}

impl CheckerContext {
    /// Creates an instance of `CheckerContext`. Fails if the problem itself is not valid or the
    /// response is not a success.
    pub fn new(problem: Problem, response: Response, limits: &DimensionLimits) -> Result<Self, Vec<GenericError>> {
        let core_problem = map_to_core_problem(&problem, limits).map_err(|err| vec![err.message().into()])?;

        if !response.is_success() {
            let message = response.message.as_deref().unwrap_or_default();
            return Err(vec![format!("cannot check response with '{}' status: {message}", response.status).into()]);
        }

        let node_index = problem.nodes.iter().enumerate().map(|(idx, node)| (node.id.clone(), idx)).collect();

        Ok(Self { problem, response, core_problem, node_index })
    }

    /// Performs response check.
    pub fn check(&self) -> Result<(), Vec<GenericError>> {
        // avoid duplicates keeping original order
        let (_, errors) = check_assignment(self)
            .err()
            .into_iter()
            .chain(check_routing(self).err())
            .chain(check_schedule(self).err())
            .flatten()
            .fold((HashSet::new(), Vec::default()), |(mut used, mut errors), error| {
                if used.insert(error.clone()) {
                    errors.push(error);
                }

                (used, errors)
            });

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Returns routes from response, empty if there are none.
    fn routes(&self) -> &[Vec<NodeId>] {
        self.response.routes.as_deref().unwrap_or_default()
    }

    /// Gets node index by its id.
    fn get_node_index(&self, id: &NodeId) -> Result<usize, GenericError> {
        self.node_index.get(id).copied().ok_or_else(|| format!("unknown node id: '{id}'").into())
    }

    /// Converts a route into a tour of customer indices without depot ends. Checks that a
    /// non-empty route starts and ends at the depot and visits it nowhere else.
    fn get_tour(&self, vehicle: usize, route: &[NodeId]) -> Result<Vec<usize>, GenericError> {
        let indices = route.iter().map(|id| self.get_node_index(id)).collect::<Result<Vec<_>, _>>()?;

        match indices.as_slice() {
            [] => Ok(vec![]),
            [DEPOT_INDEX, customers @ .., DEPOT_INDEX] if !customers.is_empty() => {
                if customers.contains(&DEPOT_INDEX) {
                    Err(format!("route of vehicle {vehicle} visits depot in the middle").into())
                } else {
                    Ok(customers.to_vec())
                }
            }
            _ => Err(format!("route of vehicle {vehicle} must start and end at depot and have customers").into()),
        }
    }

    /// Returns tours of all vehicles, skipping malformed routes which are reported by assignment checks.
    fn get_tours(&self) -> Vec<(usize, Vec<usize>)> {
        self.routes()
            .iter()
            .enumerate()
            .filter_map(|(vehicle, route)| self.get_tour(vehicle, route).ok().map(|tour| (vehicle, tour)))
            .collect()
    }
}
