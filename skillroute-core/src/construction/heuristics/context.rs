#[cfg(test)]
#[path = "../../../tests/unit/construction/heuristics/context_test.rs"]
mod context_test;

use crate::construction::features::tour_distance;
use crate::models::common::{Cost, Distance};
use crate::models::solution::calculate_cost;
use crate::models::{Problem, Solution};

/// Keeps a partially built solution: tours per vehicle and nodes which are not assigned yet.
#[derive(Clone, Debug)]
pub struct InsertionContext {
    /// Customer indices per vehicle in visiting order, depots are implicit.
    pub tours: Vec<Vec<usize>>,
    /// Route distance per vehicle, including depot legs.
    pub distances: Vec<Distance>,
    /// Nodes which are not assigned yet, ordered by index.
    pub unassigned: Vec<usize>,
}

impl InsertionContext {
    /// Creates an empty context: no tours, all customers are unassigned.
    pub fn new(problem: &Problem) -> Self {
        let vehicles = problem.fleet.size();

        Self { tours: vec![vec![]; vehicles], distances: vec![0; vehicles], unassigned: problem.customers().collect() }
    }

    /// Replaces the tour of the vehicle and updates its distance.
    pub fn set_tour(&mut self, problem: &Problem, vehicle: usize, tour: Vec<usize>) {
        self.distances[vehicle] = tour_distance(problem.matrix.as_ref(), tour.as_slice());
        self.tours[vehicle] = tour;
    }

    /// Marks the node as assigned.
    pub fn mark_assigned(&mut self, node: usize) {
        self.unassigned.retain(|&other| other != node);
    }

    /// Returns true if every customer is assigned.
    pub fn is_complete(&self) -> bool {
        self.unassigned.is_empty()
    }

    /// Returns the objective value of the current state.
    pub fn cost(&self, problem: &Problem) -> Cost {
        calculate_cost(self.distances.as_slice(), problem.goal.span_cost_coefficient())
    }

    /// Converts the context into a solution, returns `None` if some node is unassigned.
    pub fn into_solution(self, problem: &Problem) -> Option<Solution> {
        if !self.is_complete() {
            return None;
        }

        let cost = self.cost(problem);

        Some(Solution { tours: self.tours, cost })
    }
}
