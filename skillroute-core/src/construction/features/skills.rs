//! A vehicle skills feature.

#[cfg(test)]
#[path = "../../../tests/unit/construction/features/skills_test.rs"]
mod skills_test;

use super::*;
use crate::utils::SolveError;
use rustc_hash::FxHashSet;

/// Creates a skills feature which restricts vehicle domain of each node requiring skills to the
/// vehicles having all of them. Fails fast with infeasibility error if some node has no such
/// vehicle at all. This is a hard constraint.
pub fn create_skills_feature(name: &str, nodes: &[Node], fleet: &Fleet) -> Result<Feature, SolveError> {
    let allowed_vehicles = nodes
        .iter()
        .map(|node| {
            if node.is_depot || node.required_skills.is_empty() {
                return Ok(None);
            }

            let required = node.required_skill_set();
            let vehicles = fleet
                .vehicles
                .iter()
                .filter(|vehicle| vehicle.has_all_skills(required.iter().copied()))
                .map(|vehicle| vehicle.index)
                .collect::<FxHashSet<_>>();

            if vehicles.is_empty() {
                Err(SolveError::infeasible(format!(
                    "No vehicle has the required skills ({}) for node {}",
                    node.required_skills.join(", "),
                    node.id
                )))
            } else {
                Ok(Some(vehicles))
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    FeatureBuilder::default()
        .with_name(name)
        .with_constraint(SkillsConstraint { allowed_vehicles })
        .build()
        .map_err(SolveError::Unexpected)
}

struct SkillsConstraint {
    allowed_vehicles: Vec<Option<FxHashSet<usize>>>,
}

impl SkillsConstraint {
    fn is_allowed(&self, node: usize, vehicle: usize) -> bool {
        match self.allowed_vehicles.get(node) {
            Some(Some(vehicles)) => vehicles.contains(&vehicle),
            _ => true,
        }
    }
}

impl FeatureConstraint for SkillsConstraint {
    fn evaluate(&self, move_ctx: &MoveContext<'_>) -> Option<ConstraintViolation> {
        let is_allowed = match move_ctx {
            MoveContext::Assignment { node, vehicle } => self.is_allowed(*node, *vehicle),
            MoveContext::Tour { vehicle, tour } => tour.iter().all(|&node| self.is_allowed(node, *vehicle)),
        };

        if is_allowed { ConstraintViolation::success() } else { ConstraintViolation::fail(SKILL_CONSTRAINT_CODE) }
    }
}
