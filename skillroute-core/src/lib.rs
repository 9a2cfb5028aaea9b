//! Core crate contains main building blocks to solve a ***Vehicle Routing Problem*** with time
//! windows and vehicle skills: a distance matrix, a problem model with constraint features,
//! a construction heuristic, guided local search and a solution decoder.
//!
//! All distances and times are integral: raw values are multiplied by 100 and rounded, so the
//! search never accumulates floating point errors. The decoder converts them back.
//!
//! The objective is the total distance of all routes plus the longest route distance weighted
//! by a span coefficient, so balanced routes are preferred.

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod construction;
pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
