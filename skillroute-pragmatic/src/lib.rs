//! Pragmatic crate provides a json boundary of the solver: it reads a request with nodes,
//! vehicles, skills and time windows, solves it and writes a response with routes and
//! distance metrics.
//!
//! Every failure, including malformed input and panics inside the search, is turned into an
//! error response, so [solve_request] always returns something which can be sent back to the
//! caller.
//!
//! # Examples
//!
//! ```
//! # use skillroute_pragmatic::*;
//! # use skillroute_core::prelude::SolverConfig;
//! let request = r#"{
//!   "nodes": [
//!     { "id": 0, "x": 0, "y": 0, "is_depot": true },
//!     { "id": 1, "x": 10, "y": 0 },
//!     { "id": 2, "x": 0, "y": 10 }
//!   ],
//!   "num_vehicles": 2
//! }"#;
//!
//! let settings = SolveSettings {
//!     config: SolverConfig { max_time: Some(1), ..SolverConfig::default() },
//!     ..SolveSettings::default()
//! };
//! let response = solve_request(request, &settings);
//!
//! assert_eq!(get_status_code(&response), 200);
//! assert_eq!(response.max_distance, Some(20.));
//! ```

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
pub mod features;

#[cfg(test)]
#[path = "../tests/discovery/mod.rs"]
pub mod discovery;

pub mod checker;
pub mod format;

mod utils;

use crate::format::problem::{Problem, map_to_core_problem, read_problem};
use crate::format::solution::{Response, create_depot_only_response, create_response};
use skillroute_core::models::problem::DimensionLimits;
use skillroute_core::solver::{Solver, SolverConfig, decode};
use skillroute_core::utils::{InfoLogger, SolveError};
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

/// Specifies settings used to solve a request.
#[derive(Clone)]
pub struct SolveSettings {
    /// Search parameters.
    pub config: SolverConfig,
    /// Dimension limits and objective coefficients.
    pub limits: DimensionLimits,
    /// A logger used to report unexpected errors and, if enabled, search progress.
    pub logger: InfoLogger,
}

impl Default for SolveSettings {
    fn default() -> Self {
        Self { config: SolverConfig::default(), limits: DimensionLimits::default(), logger: Arc::new(|_| {}) }
    }
}

/// Solves a raw json request and returns a response. Never fails: errors are reported inside
/// the response with `error` status.
pub fn solve_request(request: &str, settings: &SolveSettings) -> Response {
    let result = catch_unwind(AssertUnwindSafe(|| {
        read_problem(request).and_then(|problem| solve_problem(&problem, settings))
    }));

    let result = result.unwrap_or_else(|panic| {
        let details = panic
            .downcast_ref::<&str>()
            .map(|msg| msg.to_string())
            .or_else(|| panic.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());

        Err(SolveError::unexpected(details))
    });

    match result {
        Ok(response) => response,
        Err(SolveError::Unexpected(err)) => {
            (settings.logger)(format!("unexpected error while solving request: {err}").as_str());
            Response::error(format!("An unexpected error occurred: {err}"))
        }
        Err(err) => Response::error(err.message()),
    }
}

/// Solves an already parsed problem.
pub fn solve_problem(problem: &Problem, settings: &SolveSettings) -> Result<Response, SolveError> {
    let core_problem = Arc::new(map_to_core_problem(problem, &settings.limits)?);

    if !core_problem.has_customers() {
        return Ok(create_depot_only_response(core_problem.fleet.size()));
    }

    let environment = Arc::new(settings.config.create_environment(settings.logger.clone()));
    let outcome = Solver::new(core_problem.clone(), environment, settings.config.clone()).solve();
    let solution = decode(core_problem.as_ref(), outcome)?;

    Ok(create_response(problem, &solution))
}

/// Maps response status to a http like status code: 200 on success, 400 on error and 500
/// on anything else.
pub fn get_status_code(response: &Response) -> u16 {
    if response.is_success() {
        200
    } else if response.is_error() {
        400
    } else {
        500
    }
}
