//! Provides extensions to build vrp variants as features.

use crate::models::common::*;
use crate::models::matrix::DistanceMatrix;
use crate::models::problem::*;
use crate::models::*;
use crate::utils::GenericResult;
use std::sync::Arc;

mod skills;
pub use self::skills::*;

mod time_windows;
pub use self::time_windows::*;

mod tour_limits;
pub use self::tour_limits::*;

/// A violation code of the skills constraint.
pub const SKILL_CONSTRAINT_CODE: ViolationCode = 1;
/// A violation code of the distance limit constraint.
pub const DISTANCE_LIMIT_CONSTRAINT_CODE: ViolationCode = 2;
/// A violation code of the time window constraint.
pub const TIME_CONSTRAINT_CODE: ViolationCode = 3;
