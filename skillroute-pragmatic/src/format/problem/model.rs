#[cfg(test)]
#[path = "../../../tests/unit/format/problem/model_test.rs"]
mod model_test;

use crate::format::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::{BufReader, BufWriter, Error, Read, Write};

/// A node to visit: the depot or a customer.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Node {
    /// An opaque node id.
    pub id: NodeId,
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// True if node is the depot, only the first node can be the depot.
    #[serde(default)]
    pub is_depot: bool,
    /// A time window as `[start, end]`, in the same units as distances.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_window: Option<Vec<f64>>,
    /// Skills required from a vehicle to serve the node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_skills: Option<Vec<String>>,
}

/// A problem definition.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Problem {
    /// Nodes, the first one should be the depot.
    pub nodes: Vec<Node>,
    /// Amount of vehicles.
    pub num_vehicles: i64,
    /// Vehicle skills keyed by vehicle index as string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_skills: Option<HashMap<String, Vec<String>>>,
    /// All known skills, skill constraints are enforced only if it is not empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_skills: Option<Vec<String>>,
}

impl Problem {
    /// Returns skills of the vehicle with given index.
    pub fn get_vehicle_skills(&self, vehicle: usize) -> &[String] {
        self.vehicle_skills
            .as_ref()
            .and_then(|skills| skills.get(&vehicle.to_string()))
            .map(|skills| skills.as_slice())
            .unwrap_or_default()
    }

    /// Returns true if skill constraints are enforced.
    pub fn has_skills_constraint(&self) -> bool {
        let has_requirements =
            self.nodes.iter().any(|node| node.required_skills.as_ref().is_some_and(|skills| !skills.is_empty()));
        let has_available = self.available_skills.as_ref().is_some_and(|skills| !skills.is_empty());

        has_requirements && has_available
    }
}

/// Deserializes problem in json format from `BufReader`.
pub fn deserialize_problem<R: Read>(reader: BufReader<R>) -> Result<Problem, Error> {
    serde_json::from_reader(reader).map_err(Error::from)
}

/// Serializes `problem` in json to `writer`.
pub fn serialize_problem<W: Write>(writer: BufWriter<W>, problem: &Problem) -> Result<(), Error> {
    serde_json::to_writer_pretty(writer, problem).map_err(Error::from)
}
