//! This module reimports commonly used types.

// Reimport core types
pub use crate::models::common::{Coordinate, TimeWindow, scale_value, unscale_value};
pub use crate::models::problem::{DimensionLimits, Node, ProblemBuilder};
pub use crate::models::{Problem, Solution};

pub use crate::solver::{DecodedRoute, DecodedSolution, SearchOutcome, Solver, SolverConfig, TelemetryMode, decode};

// Reimport utils
pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::GenericError;
pub use crate::utils::GenericResult;
pub use crate::utils::InfoLogger;
pub use crate::utils::Random;
pub use crate::utils::SolveError;
