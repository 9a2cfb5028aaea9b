#[cfg(test)]
#[path = "../../../tests/unit/construction/heuristics/path_cheapest_arc_test.rs"]
mod path_cheapest_arc_test;

use super::InsertionContext;
use crate::models::Problem;
use crate::models::problem::DEPOT_INDEX;

/// Extends the path of each vehicle, in index order, from its last node with the cheapest arc
/// which keeps the tour feasible. Ties are resolved by the lowest node index. A vehicle stops
/// when no feasible extension is left.
pub fn extend_cheapest_paths(problem: &Problem, insertion_ctx: &mut InsertionContext) {
    let matrix = problem.matrix.as_ref();
    let goal = problem.goal.as_ref();

    for vehicle in 0..problem.fleet.size() {
        let mut tour = insertion_ctx.tours[vehicle].clone();

        loop {
            let last = tour.last().copied().unwrap_or(DEPOT_INDEX);

            // NOTE unassigned is ordered by index, so strict comparison keeps the lowest one on ties
            let next = insertion_ctx
                .unassigned
                .iter()
                .copied()
                .filter(|&node| goal.is_feasible_assignment(node, vehicle))
                .fold(None, |best: Option<(usize, i64)>, node| {
                    let cost = matrix.distance(last, node);
                    match best {
                        Some((_, best_cost)) if best_cost <= cost => best,
                        _ if is_feasible_extension(problem, vehicle, &tour, node) => Some((node, cost)),
                        _ => best,
                    }
                });

            match next {
                Some((node, _)) => {
                    tour.push(node);
                    insertion_ctx.mark_assigned(node);
                }
                None => break,
            }
        }

        insertion_ctx.set_tour(problem, vehicle, tour);
    }
}

fn is_feasible_extension(problem: &Problem, vehicle: usize, tour: &[usize], node: usize) -> bool {
    let candidate = tour.iter().copied().chain(std::iter::once(node)).collect::<Vec<_>>();

    problem.goal.is_feasible_tour(vehicle, candidate.as_slice())
}
