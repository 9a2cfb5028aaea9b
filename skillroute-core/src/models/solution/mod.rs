//! Solution domain models.

#[cfg(test)]
#[path = "../../../tests/unit/models/solution/solution_test.rs"]
mod solution_test;

use crate::models::common::{Cost, Distance};
use crate::models::matrix::DistanceMatrix;
use crate::models::problem::DEPOT_INDEX;

/// Represents a solution found by the search engine in matrix index space.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Customer indices per vehicle in visiting order, depot start and end are implicit.
    pub tours: Vec<Vec<usize>>,
    /// An objective value: total distance plus the weighted span.
    pub cost: Cost,
}

impl Solution {
    /// Returns a full path of the vehicle including the depot, empty if the vehicle is not used.
    pub fn path(&self, vehicle: usize) -> Vec<usize> {
        match self.tours.get(vehicle) {
            Some(tour) if !tour.is_empty() => {
                std::iter::once(DEPOT_INDEX).chain(tour.iter().copied()).chain(std::iter::once(DEPOT_INDEX)).collect()
            }
            _ => vec![],
        }
    }

    /// Returns distance of the vehicle route.
    pub fn route_distance(&self, matrix: &DistanceMatrix, vehicle: usize) -> Distance {
        matrix.path_distance(self.path(vehicle).as_slice())
    }
}

/// Calculates the objective value from route distances: the sum of all arc costs plus the span
/// coefficient multiplied by the longest route distance.
pub fn calculate_cost(route_distances: &[Distance], span_cost_coefficient: Cost) -> Cost {
    let total = route_distances.iter().fold(0 as Distance, |acc, &distance| acc.saturating_add(distance));
    let span = route_distances.iter().copied().max().unwrap_or_default();

    total.saturating_add(span_cost_coefficient.saturating_mul(span))
}
