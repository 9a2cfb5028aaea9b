//! Contains logic related to the solve command.

pub mod config;
