//! Contains the improvement phase: a search context over complete routes, local search
//! operators and guided local search which drives them.

#[cfg(test)]
#[path = "../../../tests/unit/solver/search/search_context_test.rs"]
mod search_context_test;

use crate::models::common::{Cost, Distance};
use crate::models::problem::DEPOT_INDEX;
use crate::models::solution::calculate_cost;
use crate::models::{Problem, Solution};
use crate::utils::Float;

mod guided;
pub use self::guided::*;

pub mod local;
pub use self::local::{CompositeLocalOperator, LocalOperator};

/// A new route of the vehicle produced by a local search move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TourChange {
    /// Vehicle index.
    pub vehicle: usize,
    /// A full route which starts and ends at the depot.
    pub route: Vec<usize>,
}

/// A change of route arcs caused by a move.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ArcDelta {
    /// Route distance change.
    pub distance: Distance,
    /// Change of penalized arc costs, not weighted by penalty factor.
    pub penalty: Float,
}

/// Keeps the solution being improved together with arc penalties. Every vehicle has a route,
/// unused vehicles have a route with two depot visits only.
pub struct SearchContext<'a> {
    problem: &'a Problem,
    routes: Vec<Vec<usize>>,
    distances: Vec<Distance>,
    penalties: ArcPenalties,
    penalty_factor: Float,
}

impl<'a> SearchContext<'a> {
    /// Creates a new instance of `SearchContext`.
    pub fn new(problem: &'a Problem, solution: &Solution, penalty_factor: Float) -> Self {
        let routes = (0..problem.fleet.size())
            .map(|vehicle| {
                let tour = solution.tours.get(vehicle).map(|tour| tour.as_slice()).unwrap_or_default();
                std::iter::once(DEPOT_INDEX).chain(tour.iter().copied()).chain(std::iter::once(DEPOT_INDEX)).collect()
            })
            .collect::<Vec<Vec<_>>>();
        let distances = routes.iter().map(|route| problem.matrix.path_distance(route)).collect();

        Self { problem, routes, distances, penalties: ArcPenalties::default(), penalty_factor }
    }

    /// Returns the problem.
    pub fn problem(&self) -> &Problem {
        self.problem
    }

    /// Returns all routes.
    pub fn routes(&self) -> &[Vec<usize>] {
        self.routes.as_slice()
    }

    /// Returns route distances.
    pub fn distances(&self) -> &[Distance] {
        self.distances.as_slice()
    }

    /// Returns arc penalties.
    pub fn penalties(&self) -> &ArcPenalties {
        &self.penalties
    }

    /// Returns a true objective value.
    pub fn cost(&self) -> Cost {
        calculate_cost(self.distances.as_slice(), self.problem.goal.span_cost_coefficient())
    }

    /// Returns an objective augmented by arc penalties.
    pub fn augmented_cost(&self) -> Float {
        let penalized = self
            .routes
            .iter()
            .flat_map(|route| route.windows(2))
            .map(|arc| self.penalized_cost(arc[0], arc[1]))
            .sum::<Float>();

        self.cost() as Float + self.penalty_factor * penalized
    }

    /// Calculates arc delta of replacing `removed` arcs with `added` ones.
    pub fn arc_delta(&self, removed: &[(usize, usize)], added: &[(usize, usize)]) -> ArcDelta {
        let matrix = self.problem.matrix.as_ref();

        let distance = added.iter().map(|&(from, to)| matrix.distance(from, to)).sum::<Distance>()
            - removed.iter().map(|&(from, to)| matrix.distance(from, to)).sum::<Distance>();
        let penalty = added.iter().map(|&(from, to)| self.penalized_cost(from, to)).sum::<Float>()
            - removed.iter().map(|&(from, to)| self.penalized_cost(from, to)).sum::<Float>();

        ArcDelta { distance, penalty }
    }

    /// Returns the change of augmented cost when given route deltas are applied.
    pub fn augmented_delta(&self, changes: &[(usize, ArcDelta)]) -> Float {
        let distance = changes.iter().map(|(_, delta)| delta.distance).sum::<Distance>();
        let penalty = changes.iter().map(|(_, delta)| delta.penalty).sum::<Float>();

        let old_span = self.distances.iter().copied().max().unwrap_or_default();
        let new_span = self
            .distances
            .iter()
            .enumerate()
            .map(|(vehicle, &distance)| {
                distance
                    + changes
                        .iter()
                        .filter(|(changed, _)| *changed == vehicle)
                        .map(|(_, delta)| delta.distance)
                        .sum::<Distance>()
            })
            .max()
            .unwrap_or_default();

        let span_delta = self.problem.goal.span_cost_coefficient() * (new_span - old_span);

        (distance + span_delta) as Float + self.penalty_factor * penalty
    }

    /// Checks whether all changed routes are feasible.
    pub fn is_feasible(&self, changes: &[TourChange]) -> bool {
        changes.iter().all(|change| {
            let tour = change.route.get(1..change.route.len().saturating_sub(1)).unwrap_or_default();
            self.problem.goal.is_feasible_tour(change.vehicle, tour)
        })
    }

    /// Checks whether the node can be served by the vehicle.
    pub fn is_feasible_assignment(&self, node: usize, vehicle: usize) -> bool {
        self.problem.goal.is_feasible_assignment(node, vehicle)
    }

    /// Applies route changes.
    pub fn apply(&mut self, changes: Vec<TourChange>) {
        changes.into_iter().for_each(|TourChange { vehicle, route }| {
            self.distances[vehicle] = self.problem.matrix.path_distance(route.as_slice());
            self.routes[vehicle] = route;
        });
    }

    /// Penalizes arcs of the current solution which have maximal utility `cost / (1 + penalty)`.
    /// Returns amount of penalized arcs.
    pub fn penalize(&mut self) -> usize {
        let matrix = self.problem.matrix.as_ref();
        let arcs = self
            .routes
            .iter()
            .flat_map(|route| route.windows(2))
            .filter(|arc| arc[0] != arc[1])
            .map(|arc| (arc[0], arc[1]))
            .collect::<Vec<_>>();

        let utility = |(from, to): (usize, usize)| {
            matrix.distance(from, to) as Float / (1. + self.penalties.get(from, to) as Float)
        };

        let max_utility = arcs.iter().copied().map(utility).fold(0., Float::max);
        if max_utility <= 0. {
            return 0;
        }

        let selected = arcs.into_iter().filter(|&arc| utility(arc) >= max_utility).collect::<Vec<_>>();
        selected.iter().for_each(|&(from, to)| self.penalties.increment(from, to));

        selected.len()
    }

    /// Converts routes back to a solution.
    pub fn to_solution(&self) -> Solution {
        let tours = self
            .routes
            .iter()
            .map(|route| route.get(1..route.len().saturating_sub(1)).unwrap_or_default().to_vec())
            .collect();

        Solution { tours, cost: self.cost() }
    }

    fn penalized_cost(&self, from: usize, to: usize) -> Float {
        let penalty = self.penalties.get(from, to);
        if penalty == 0 { 0. } else { (penalty as Distance * self.problem.matrix.distance(from, to)) as Float }
    }
}
