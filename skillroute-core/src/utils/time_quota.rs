#[cfg(test)]
#[path = "../../tests/unit/utils/time_quota_test.rs"]
mod time_quota_test;

use crate::utils::{Float, Timer};

/// Specifies a computational quota for solving VRP.
/// The main purpose is to allow to stop algorithm in reaction to external events such
/// as timer.
pub trait Quota: Send + Sync {
    /// Returns true when computation should be stopped.
    fn is_reached(&self) -> bool;
}

/// A time quota.
pub struct TimeQuota {
    start: Timer,
    limit_in_secs: Float,
}

impl TimeQuota {
    /// Creates a new instance of `TimeQuota`, the clock starts immediately.
    pub fn new(limit_in_secs: Float) -> Self {
        Self { start: Timer::start(), limit_in_secs }
    }
}

impl Quota for TimeQuota {
    fn is_reached(&self) -> bool {
        self.start.elapsed_secs_as_float() > self.limit_in_secs
    }
}
