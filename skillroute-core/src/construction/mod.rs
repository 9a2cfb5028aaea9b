//! This module contains building blocks for constructive heuristics.
//!
//! # Features
//!
//! Every problem aspect is modeled as a feature with a hard constraint, see [features] module.
//!
//! # Construction
//!
//! An initial solution is built in two steps: path cheapest arc first, then cheapest insertion
//! for nodes which could not be reached by extending paths, see [heuristics] module.

pub mod features;
pub mod heuristics;
