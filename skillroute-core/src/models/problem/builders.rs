//! Provides a way to build a [Problem] using the builder pattern.

#[cfg(test)]
#[path = "../../../tests/unit/models/problem/builders_test.rs"]
mod builders_test;

use crate::construction::features::*;
use crate::models::GoalContext;
use crate::models::common::unscale_value;
use crate::models::matrix::DistanceMatrix;
use crate::models::problem::{DEPOT_INDEX, DimensionLimits, Fleet, Node, Problem};
use crate::utils::SolveError;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Provides a way to build a [Problem] while validating all preconditions of the search.
#[derive(Default)]
pub struct ProblemBuilder {
    nodes: Vec<Node>,
    num_vehicles: i64,
    vehicle_skills: FxHashMap<usize, Vec<String>>,
    available_skills: Vec<String>,
    limits: DimensionLimits,
}

impl ProblemBuilder {
    /// Adds a node, the first added node must be the depot.
    pub fn add_node(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    /// Adds multiple nodes.
    pub fn add_nodes(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.nodes.extend(nodes);
        self
    }

    /// Sets amount of vehicles. Signed as it is validated here, not by the caller.
    pub fn with_num_vehicles(mut self, num_vehicles: i64) -> Self {
        self.num_vehicles = num_vehicles;
        self
    }

    /// Sets skills of the vehicle with given index.
    pub fn with_vehicle_skills(mut self, vehicle: usize, skills: Vec<String>) -> Self {
        self.vehicle_skills.insert(vehicle, skills);
        self
    }

    /// Sets the list of skills known globally. Skill constraints are active only if it is not empty.
    pub fn with_available_skills(mut self, skills: Vec<String>) -> Self {
        self.available_skills = skills;
        self
    }

    /// Overrides default dimension limits.
    pub fn with_limits(mut self, limits: DimensionLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Validates the data and builds the problem with all constraint dimensions registered.
    pub fn build(self) -> Result<Problem, SolveError> {
        self.validate()?;

        let Self { nodes, num_vehicles, mut vehicle_skills, available_skills, limits } = self;

        let coordinates = nodes.iter().map(|node| node.coordinate).collect::<Vec<_>>();
        let matrix = Arc::new(DistanceMatrix::from_coordinates(&coordinates).map_err(SolveError::Unexpected)?);

        let fleet = Fleet::new(num_vehicles as usize, |index| {
            vehicle_skills.remove(&index).map(|skills| skills.into_iter().collect()).unwrap_or_default()
        });

        let mut features = vec![
            create_travel_limit_feature("distance", matrix.clone(), limits.max_distance)
                .map_err(SolveError::Unexpected)?,
        ];

        if nodes.iter().any(|node| node.time_window.is_some()) {
            features.push(
                create_time_window_feature("time", matrix.clone(), &nodes, &limits).map_err(SolveError::Unexpected)?,
            );
        }

        let has_skills_requirement = nodes.iter().any(|node| !node.required_skills.is_empty());
        if has_skills_requirement && !available_skills.is_empty() {
            features.push(create_skills_feature("skills", &nodes, &fleet)?);
        }

        let goal = GoalContext::new(features, limits.span_cost_coefficient).map_err(SolveError::Unexpected)?;

        Ok(Problem { nodes, fleet, matrix, goal: Arc::new(goal), limits })
    }

    fn validate(&self) -> Result<(), SolveError> {
        let depot = self.nodes.first().ok_or_else(|| SolveError::validation("No nodes provided."))?;

        if !depot.is_depot {
            return Err(SolveError::validation("First node must be the depot."));
        }

        if self.nodes.len() > 1 && self.num_vehicles == 0 {
            return Err(SolveError::validation("No vehicles available to serve customer nodes."));
        }

        if self.num_vehicles <= 0 {
            return Err(SolveError::validation("Number of vehicles must be positive."));
        }

        if let Some(node) = self.nodes.iter().skip(DEPOT_INDEX + 1).find(|node| node.is_depot) {
            return Err(SolveError::validation(format!(
                "Node {} is marked as depot, but only the first node can be the depot.",
                node.id
            )));
        }

        if let Some((node, tw)) = self
            .nodes
            .iter()
            .filter_map(|node| node.time_window.map(|tw| (node, tw)))
            .find(|(_, tw)| tw.start > tw.end)
        {
            return Err(SolveError::validation(format!(
                "Invalid time window [{}, {}] for node {}.",
                unscale_value(tw.start),
                unscale_value(tw.end),
                node.id
            )));
        }

        Ok(())
    }
}
