//! A collection of models to represent problem and solution in Vehicle Routing Problem domain.

mod goal;
pub use self::goal::*;

pub mod common;
pub mod matrix;
pub mod problem;
pub mod solution;

pub use self::problem::Problem;
pub use self::solution::Solution;
