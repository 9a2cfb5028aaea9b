#[cfg(test)]
#[path = "../../../tests/unit/models/common/primitives_test.rs"]
mod primitives_test;

use crate::utils::Float;

/// Represents a distance in scaled integral units.
pub type Distance = i64;

/// Represents a timestamp in scaled integral units. Travel time equals distance.
pub type Timestamp = i64;

/// Represents an objective cost in scaled integral units.
pub type Cost = i64;

/// A factor applied to raw input values to keep two decimal digits in integral arithmetic.
pub const SCALE_FACTOR: i64 = 100;

/// Converts a raw input value into scaled integral units.
pub fn scale_value(value: Float) -> i64 {
    (value * SCALE_FACTOR as Float).round() as i64
}

/// Converts scaled integral units back into raw units.
pub fn unscale_value(value: i64) -> Float {
    value as Float / SCALE_FACTOR as Float
}
