use crate::format::NodeId;
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Error, Read, Write};

/// A response status: success or error.
pub const STATUS_SUCCESS: &str = "success";

/// An error status.
pub const STATUS_ERROR: &str = "error";

/// Represents a solve response.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Response {
    /// Either `success` or `error`.
    pub status: String,
    /// Routes, one per vehicle: depot, customers, depot or empty if vehicle is unused.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routes: Option<Vec<Vec<NodeId>>>,
    /// The longest route distance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_distance: Option<f64>,
    /// A total distance of all routes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_distance: Option<f64>,
    /// The objective value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objective: Option<f64>,
    /// A human readable message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Response {
    /// Creates a success response with routes and distance metrics.
    pub fn success(routes: Vec<Vec<NodeId>>, max_distance: f64, total_distance: f64, objective: f64) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            routes: Some(routes),
            max_distance: Some(max_distance),
            total_distance: Some(total_distance),
            objective: Some(objective),
            message: None,
        }
    }

    /// Creates an error response.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR.to_string(),
            routes: None,
            max_distance: None,
            total_distance: None,
            objective: None,
            message: Some(message.into()),
        }
    }

    /// Returns true if response has success status.
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }

    /// Returns true if response has error status.
    pub fn is_error(&self) -> bool {
        self.status == STATUS_ERROR
    }
}

/// Serializes response in json to `writer`.
pub fn serialize_response<W: Write>(writer: BufWriter<W>, response: &Response) -> Result<(), Error> {
    serde_json::to_writer_pretty(writer, response).map_err(Error::from)
}

/// Deserializes response from json format.
pub fn deserialize_response<R: Read>(reader: BufReader<R>) -> Result<Response, Error> {
    serde_json::from_reader(reader).map_err(Error::from)
}
