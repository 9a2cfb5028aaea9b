#[cfg(test)]
#[path = "../../../tests/unit/format/problem/reader_test.rs"]
mod reader_test;

use super::*;
use skillroute_core::models::Problem as CoreProblem;
use skillroute_core::models::common::{Coordinate, TimeWindow, scale_value};
use skillroute_core::models::problem::{DimensionLimits, Node as CoreNode, ProblemBuilder};
use skillroute_core::utils::SolveError;

/// Parses a raw json request. Checks that it is a json object with required keys before
/// deserializing it into the problem model.
pub fn read_problem(request: &str) -> Result<Problem, SolveError> {
    let value: serde_json::Value =
        serde_json::from_str(request).map_err(|_| SolveError::validation("Request must be JSON"))?;

    let has_required = value.as_object().is_some_and(|object| {
        !object.is_empty() && object.contains_key("nodes") && object.contains_key("num_vehicles")
    });

    if !has_required {
        return Err(SolveError::validation("Missing required data: nodes, num_vehicles"));
    }

    serde_json::from_value(value).map_err(|err| SolveError::unexpected(err.to_string()))
}

/// Converts the problem into the core problem validating all preconditions.
pub fn map_to_core_problem(problem: &Problem, limits: &DimensionLimits) -> Result<CoreProblem, SolveError> {
    let nodes = problem.nodes.iter().map(map_node).collect::<Result<Vec<_>, _>>()?;

    let builder = ProblemBuilder::default()
        .add_nodes(nodes)
        .with_num_vehicles(problem.num_vehicles)
        .with_available_skills(problem.available_skills.clone().unwrap_or_default())
        .with_limits(limits.clone());

    let vehicles = usize::try_from(problem.num_vehicles).unwrap_or_default();
    let builder = (0..vehicles).fold(builder, |builder, vehicle| {
        let skills = problem.get_vehicle_skills(vehicle);
        if skills.is_empty() { builder } else { builder.with_vehicle_skills(vehicle, skills.to_vec()) }
    });

    builder.build()
}

fn map_node(node: &Node) -> Result<CoreNode, SolveError> {
    let id = node.id.to_string();
    let coordinate = Coordinate::new(node.x, node.y);
    let core_node = if node.is_depot { CoreNode::new_depot(&id, coordinate) } else { CoreNode::new(&id, coordinate) };

    let core_node = match node.time_window.as_deref() {
        None | Some([]) => core_node,
        Some(&[start, end]) => core_node.with_time_window(TimeWindow::new(scale_value(start), scale_value(end))),
        Some(_) => {
            return Err(SolveError::validation(format!("Time window of node {id} must have exactly two values.")));
        }
    };

    Ok(match &node.required_skills {
        Some(skills) if !skills.is_empty() => core_node.with_required_skills(skills.clone()),
        _ => core_node,
    })
}
