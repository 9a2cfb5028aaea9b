//! Constructive heuristics which build an initial feasible solution.

mod context;
pub use self::context::*;

mod insertions;
pub use self::insertions::*;

mod path_cheapest_arc;
pub use self::path_cheapest_arc::*;

use crate::models::Problem;

/// Builds an initial solution: every vehicle, in index order, is extended with the cheapest
/// feasible arc first, then remaining nodes are inserted at their cheapest feasible position.
/// The result may still have unassigned nodes if no feasible place exists for them.
pub fn build_initial_solution(problem: &Problem) -> InsertionContext {
    let mut insertion_ctx = InsertionContext::new(problem);

    extend_cheapest_paths(problem, &mut insertion_ctx);
    insert_cheapest(problem, &mut insertion_ctx);

    insertion_ctx
}
