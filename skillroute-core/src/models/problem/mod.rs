//! Problem domain models.

mod builders;
pub use self::builders::*;

mod fleet;
pub use self::fleet::*;

mod jobs;
pub use self::jobs::*;

use crate::models::GoalContext;
use crate::models::common::{Cost, Distance, Timestamp};
use crate::models::matrix::DistanceMatrix;
use std::sync::Arc;

/// An index of the depot node.
pub const DEPOT_INDEX: usize = 0;

/// Bounds and coefficients of the constraint dimensions, all in scaled units.
#[derive(Clone, Debug, PartialEq)]
pub struct DimensionLimits {
    /// Maximum travel distance of a single vehicle, including the return to the depot.
    pub max_distance: Distance,
    /// Maximum accumulated time value at any visit.
    pub max_time: Timestamp,
    /// Maximum waiting time allowed before each visit.
    pub max_waiting: Timestamp,
    /// A weight of the longest route distance in the objective.
    pub span_cost_coefficient: Cost,
}

impl Default for DimensionLimits {
    fn default() -> Self {
        Self { max_distance: 300_000, max_time: 300_000, max_waiting: 3_000, span_cost_coefficient: 100 }
    }
}

/// Defines a routing problem: nodes, fleet, distances and constraints.
pub struct Problem {
    /// All nodes, the depot comes first.
    pub nodes: Vec<Node>,
    /// Vehicles.
    pub fleet: Fleet,
    /// A distance matrix indexed by node index.
    pub matrix: Arc<DistanceMatrix>,
    /// Constraints and objective parameters.
    pub goal: Arc<GoalContext>,
    /// Dimension limits used to build constraints.
    pub limits: DimensionLimits,
}

impl Problem {
    /// Returns indices of customer nodes.
    pub fn customers(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.nodes.len()).filter(|&idx| idx != DEPOT_INDEX)
    }

    /// Returns true if there is at least one customer.
    pub fn has_customers(&self) -> bool {
        self.nodes.len() > 1
    }

    /// Returns the depot node.
    pub fn depot(&self) -> &Node {
        &self.nodes[DEPOT_INDEX]
    }
}
