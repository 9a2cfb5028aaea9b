//! A feature to limit the total distance travelled by a vehicle.

#[cfg(test)]
#[path = "../../../tests/unit/construction/features/tour_limits_test.rs"]
mod tour_limits_test;

use super::*;

/// Creates the distance dimension: accumulated distance starts from zero at the depot, has no
/// slack, and should not exceed `max_distance` at any point, including the return to the depot.
/// This is a hard constraint.
pub fn create_travel_limit_feature(
    name: &str,
    matrix: Arc<DistanceMatrix>,
    max_distance: Distance,
) -> GenericResult<Feature> {
    FeatureBuilder::default().with_name(name).with_constraint(TravelLimitConstraint { matrix, max_distance }).build()
}

struct TravelLimitConstraint {
    matrix: Arc<DistanceMatrix>,
    max_distance: Distance,
}

impl FeatureConstraint for TravelLimitConstraint {
    fn evaluate(&self, move_ctx: &MoveContext<'_>) -> Option<ConstraintViolation> {
        match move_ctx {
            MoveContext::Assignment { node, .. } => {
                // NOTE a single visit must fit already, otherwise the node is never servable
                let round_trip =
                    self.matrix.distance(DEPOT_INDEX, *node).saturating_add(self.matrix.distance(*node, DEPOT_INDEX));
                if round_trip > self.max_distance {
                    ConstraintViolation::fail(DISTANCE_LIMIT_CONSTRAINT_CODE)
                } else {
                    ConstraintViolation::success()
                }
            }
            MoveContext::Tour { tour, .. } => {
                if tour_distance(self.matrix.as_ref(), tour) > self.max_distance {
                    ConstraintViolation::fail(DISTANCE_LIMIT_CONSTRAINT_CODE)
                } else {
                    ConstraintViolation::success()
                }
            }
        }
    }
}

/// Returns distance of the tour which starts and ends at the depot.
pub fn tour_distance(matrix: &DistanceMatrix, tour: &[usize]) -> Distance {
    if tour.is_empty() {
        return 0;
    }

    let inner = tour.windows(2).fold(0 as Distance, |acc, pair| acc.saturating_add(matrix.distance(pair[0], pair[1])));

    matrix
        .distance(DEPOT_INDEX, tour[0])
        .saturating_add(inner)
        .saturating_add(matrix.distance(tour[tour.len() - 1], DEPOT_INDEX))
}
