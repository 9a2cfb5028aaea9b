//! This module defines logic to serialize/deserialize problem in pragmatic format from json
//! input and to create and write pragmatic solution response.

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod problem;
pub mod solution;

/// Represents an opaque node id given by caller: a json number or string.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum NodeId {
    /// A numeric id.
    Number(serde_json::Number),
    /// A string id.
    String(String),
}

impl From<i64> for NodeId {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::String(string) => write!(f, "{string}"),
        }
    }
}
