#[cfg(test)]
#[path = "../../tests/unit/models/goal_test.rs"]
mod goal_test;

use crate::models::common::Cost;
use crate::utils::GenericResult;
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// Defines the routing problem variant: a set of hard constraints, each one wrapped into
/// a **feature**, plus the objective parameters.
///
/// Construction and local search never check constraints directly, they ask the goal two
/// questions instead:
/// * can a node be assigned to a vehicle at all (`is_feasible_assignment`)?
/// * is a complete vehicle tour feasible (`is_feasible_tour`)?
///
/// The objective is fixed: total arc cost plus `span_cost_coefficient` multiplied by the
/// global span of the distance dimension. As every vehicle starts with zero accumulated
/// distance, the span is the distance of the longest route.
#[derive(Clone)]
pub struct GoalContext {
    features: Vec<Feature>,
    span_cost_coefficient: Cost,
}

impl GoalContext {
    /// Creates a new instance of `GoalContext`.
    pub fn new(features: Vec<Feature>, span_cost_coefficient: Cost) -> GenericResult<Self> {
        let names = features.iter().map(|feature| feature.name.as_str()).collect::<FxHashSet<_>>();
        if names.len() != features.len() {
            return Err(format!(
                "some of the features are defined more than once, check ids list: {}",
                features.iter().map(|feature| feature.name.as_str()).collect::<Vec<_>>().join(",")
            )
            .into());
        }

        if span_cost_coefficient < 0 {
            return Err(format!("span cost coefficient should not be negative, got: {span_cost_coefficient}").into());
        }

        Ok(Self { features, span_cost_coefficient })
    }

    /// Returns first constraint violation, if any.
    pub fn evaluate(&self, move_ctx: &MoveContext<'_>) -> Option<ConstraintViolation> {
        self.features.iter().find_map(|feature| feature.constraint.evaluate(move_ctx))
    }

    /// Checks whether the node can be served by the vehicle.
    pub fn is_feasible_assignment(&self, node: usize, vehicle: usize) -> bool {
        self.evaluate(&MoveContext::Assignment { node, vehicle }).is_none()
    }

    /// Checks whether the tour, given as customer indices without depots, is feasible for the vehicle.
    pub fn is_feasible_tour(&self, vehicle: usize, tour: &[usize]) -> bool {
        self.evaluate(&MoveContext::Tour { vehicle, tour }).is_none()
    }

    /// Returns a coefficient of the global span cost.
    pub fn span_cost_coefficient(&self) -> Cost {
        self.span_cost_coefficient
    }

    /// Returns names of registered features.
    pub fn feature_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.features.iter().map(|feature| feature.name.as_str())
    }
}

/// An individual feature which models a single problem aspect as a hard constraint: skills,
/// travel limits, time windows.
#[derive(Clone)]
pub struct Feature {
    /// An unique id of the feature.
    pub name: String,
    /// A hard constraint.
    pub constraint: Arc<dyn FeatureConstraint>,
}

/// Provides a way to build feature with some checks.
#[derive(Default)]
pub struct FeatureBuilder {
    name: Option<String>,
    constraint: Option<Arc<dyn FeatureConstraint>>,
}

impl FeatureBuilder {
    /// Sets given name.
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Adds given constraint.
    pub fn with_constraint<T: FeatureConstraint + 'static>(mut self, constraint: T) -> Self {
        self.constraint = Some(Arc::new(constraint));
        self
    }

    /// Tries to build a feature.
    pub fn build(self) -> GenericResult<Feature> {
        match (self.name, self.constraint) {
            (Some(name), _) if name.is_empty() => Err("features with default id are not allowed".into()),
            (Some(name), Some(constraint)) => Ok(Feature { name, constraint }),
            (None, _) => Err("features with default id are not allowed".into()),
            (_, None) => Err("empty feature is not allowed".into()),
        }
    }
}

/// Specifies a type for constraint violation code.
pub type ViolationCode = i32;

/// Specifies result of hard constraint check.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConstraintViolation {
    /// Violation code which is used as marker of specific constraint violated.
    pub code: ViolationCode,
}

impl ConstraintViolation {
    /// A constraint violation failure.
    pub fn fail(code: ViolationCode) -> Option<Self> {
        Some(ConstraintViolation { code })
    }

    /// No constraint violation.
    pub fn success() -> Option<Self> {
        None
    }
}

/// Describes what is going to be checked.
pub enum MoveContext<'a> {
    /// A node is considered for a vehicle's route.
    Assignment {
        /// Node index.
        node: usize,
        /// Vehicle index.
        vehicle: usize,
    },
    /// A whole tour of the vehicle: customers only, depot start and end are implicit.
    Tour {
        /// Vehicle index.
        vehicle: usize,
        /// Customer indices in visiting order.
        tour: &'a [usize],
    },
}

/// Defines feature constraint behavior.
pub trait FeatureConstraint: Send + Sync {
    /// Evaluates hard constraints violations.
    fn evaluate(&self, move_ctx: &MoveContext<'_>) -> Option<ConstraintViolation>;
}
