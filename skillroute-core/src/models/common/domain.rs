use crate::models::common::Timestamp;
use crate::utils::Float;

/// Represents a point on a plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    /// X axis value.
    pub x: Float,
    /// Y axis value.
    pub y: Float,
}

impl Coordinate {
    /// Creates a new instance of `Coordinate`.
    pub fn new(x: Float, y: Float) -> Self {
        Self { x, y }
    }

    /// Returns euclidean distance to other point.
    pub fn distance_to(&self, other: &Coordinate) -> Float {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Represents a time window in scaled units, both ends are inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeWindow {
    /// Start of time window.
    pub start: Timestamp,
    /// End of time window.
    pub end: Timestamp,
}

impl TimeWindow {
    /// Creates a new instance of `TimeWindow`.
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        Self { start, end }
    }
}
