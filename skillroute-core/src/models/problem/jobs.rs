use crate::models::common::{Coordinate, TimeWindow};
use rustc_hash::FxHashSet;

/// Represents a node to be visited: a customer or the depot.
#[derive(Clone, Debug)]
pub struct Node {
    /// An opaque caller supplied id.
    pub id: String,
    /// Node location.
    pub coordinate: Coordinate,
    /// True if node is the depot.
    pub is_depot: bool,
    /// A time window in scaled units.
    pub time_window: Option<TimeWindow>,
    /// Skills required from a vehicle serving the node, in the order given by caller.
    pub required_skills: Vec<String>,
}

impl Node {
    /// Creates a new customer node without time window and skills.
    pub fn new(id: &str, coordinate: Coordinate) -> Self {
        Self { id: id.to_string(), coordinate, is_depot: false, time_window: None, required_skills: vec![] }
    }

    /// Creates a new depot node.
    pub fn new_depot(id: &str, coordinate: Coordinate) -> Self {
        Self { is_depot: true, ..Self::new(id, coordinate) }
    }

    /// Sets a time window.
    pub fn with_time_window(mut self, time_window: TimeWindow) -> Self {
        self.time_window = Some(time_window);
        self
    }

    /// Sets required skills.
    pub fn with_required_skills(mut self, skills: Vec<String>) -> Self {
        self.required_skills = skills;
        self
    }

    /// Returns required skills as a set.
    pub fn required_skill_set(&self) -> FxHashSet<&str> {
        self.required_skills.iter().map(|skill| skill.as_str()).collect()
    }
}
