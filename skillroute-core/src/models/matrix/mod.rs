//! Contains a routing matrix built from node coordinates.
//!
//! All costs are integral: euclidean distances are scaled by [`SCALE_FACTOR`] and rounded, so
//! incremental cost updates in the search never accumulate floating point drift.

#[cfg(test)]
#[path = "../../../tests/unit/models/matrix/distance_matrix_test.rs"]
mod distance_matrix_test;

use crate::models::common::{Coordinate, Distance, SCALE_FACTOR};
use crate::utils::{Float, GenericResult, parallel_collect};

/// The largest supported arc distance in scaled units. Keeps sums over any realistic amount of
/// arcs, weighted by a span coefficient, far from integer overflow.
pub const MAX_ARC_DISTANCE: Distance = 1 << 40;

/// A square, symmetric distance matrix stored in row-major order.
#[derive(Clone, Debug)]
pub struct DistanceMatrix {
    size: usize,
    values: Vec<Distance>,
}

impl DistanceMatrix {
    /// Builds the matrix from coordinates, `matrix[i][j] = round(euclid(i, j) * 100)`.
    pub fn from_coordinates(coordinates: &[Coordinate]) -> GenericResult<Self> {
        if let Some(idx) = coordinates.iter().position(|c| !c.x.is_finite() || !c.y.is_finite()) {
            return Err(format!("coordinate at index {idx} is not a finite number").into());
        }

        let size = coordinates.len();
        let indices = (0..size).collect::<Vec<_>>();
        let rows = parallel_collect(&indices, |&from| {
            (0..size)
                .map(|to| {
                    if from == to {
                        return Ok(0);
                    }

                    // NOTE compute on an ordered pair so both triangle halves get bit-identical values
                    let (a, b) = if from < to { (from, to) } else { (to, from) };
                    let distance = coordinates[a].distance_to(&coordinates[b]) * SCALE_FACTOR as Float;

                    if distance.is_finite() && distance <= MAX_ARC_DISTANCE as Float {
                        Ok(distance.round() as Distance)
                    } else {
                        Err(format!("distance between nodes at {a} and {b} is out of range"))
                    }
                })
                .collect::<Result<Vec<_>, _>>()
        });

        let values = rows.into_iter().collect::<Result<Vec<_>, _>>()?.into_iter().flatten().collect();

        Ok(Self { size, values })
    }

    /// Creates a matrix from raw row-major values, used mostly for testing.
    pub fn from_values(size: usize, values: Vec<Distance>) -> GenericResult<Self> {
        if values.len() != size * size {
            return Err(format!("expected {} matrix values, got {}", size * size, values.len()).into());
        }

        Ok(Self { size, values })
    }

    /// Returns amount of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns distance between two node indices.
    #[inline]
    pub fn distance(&self, from: usize, to: usize) -> Distance {
        self.values[from * self.size + to]
    }

    /// Returns a total distance of the path given as node indices.
    pub fn path_distance(&self, path: &[usize]) -> Distance {
        path.windows(2).fold(0, |acc, pair| acc.saturating_add(self.distance(pair[0], pair[1])))
    }

    /// Checks that matrix has zero diagonal and is symmetric.
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| {
            self.distance(i, i) == 0 && (i + 1..self.size).all(|j| self.distance(i, j) == self.distance(j, i))
        })
    }
}
