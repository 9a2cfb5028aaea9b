use crate::utils::Float;

/// A precision used to compare augmented costs.
const COMPARISON_EPSILON: Float = 1E-9;

/// Returns true if `candidate` is smaller than `current` by more than a rounding error.
#[inline]
pub fn is_improvement(candidate: Float, current: Float) -> bool {
    current - candidate > COMPARISON_EPSILON * current.abs().max(1.)
}
