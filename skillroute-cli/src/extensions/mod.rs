//! Contains extensions used by commands.

pub mod check;
pub mod solve;
