use super::*;
use crate::construction::heuristics::build_initial_solution;
use crate::helpers::models::*;
use crate::models::problem::ProblemBuilder;

#[test]
fn can_find_cheapest_insertion_with_lowest_position_on_tie() {
    let problem = create_test_problem(&[(10., 0.), (0., 10.)], 2);
    let mut insertion_ctx = InsertionContext::new(&problem);
    insertion_ctx.set_tour(&problem, 0, vec![1]);
    insertion_ctx.mark_assigned(1);

    let result = evaluate_insertion(&problem, &insertion_ctx, 2);

    assert_eq!(result, InsertionResult::Success(InsertionSuccess { node: 2, vehicle: 0, position: 0, cost: 1414 }));
}

#[test]
fn can_report_failure_when_no_place_is_feasible() {
    let problem = ProblemBuilder::default()
        .add_node(test_depot())
        .add_node(test_node_with_time_window("c1", 10., 0., (0, 500)))
        .with_num_vehicles(1)
        .build()
        .unwrap();
    let insertion_ctx = InsertionContext::new(&problem);

    assert_eq!(evaluate_insertion(&problem, &insertion_ctx, 1), InsertionResult::Failure { node: 1 });
}

#[test]
fn can_insert_all_nodes_cheapest_first() {
    let problem = create_line_problem(2, 2);
    let mut insertion_ctx = InsertionContext::new(&problem);

    insert_cheapest(&problem, &mut insertion_ctx);

    assert!(insertion_ctx.is_complete());
    assert_eq!(insertion_ctx.tours, vec![vec![2, 1], vec![]]);
    assert_eq!(insertion_ctx.distances, vec![4000, 0]);
}

#[test]
fn can_insert_nodes_left_by_cheapest_arc() {
    let problem = ProblemBuilder::default()
        .add_node(test_depot())
        .add_node(test_node("c1", 3., 0.))
        .add_node(test_node_with_time_window("c2", 0., 5., (0, 600)))
        .with_num_vehicles(1)
        .build()
        .unwrap();

    let insertion_ctx = build_initial_solution(&problem);

    assert!(insertion_ctx.is_complete());
    assert_eq!(insertion_ctx.tours, vec![vec![2, 1]]);
}

#[test]
fn can_insert_feasible_nodes_and_keep_failed_ones_unassigned() {
    let problem = ProblemBuilder::default()
        .add_node(test_depot())
        .add_node(test_node_with_time_window("c1", 10., 0., (0, 500)))
        .add_node(test_node("c2", 3., 0.))
        .add_node(test_node("c3", 4., 0.))
        .with_num_vehicles(1)
        .build()
        .unwrap();
    let mut insertion_ctx = InsertionContext::new(&problem);

    insert_cheapest(&problem, &mut insertion_ctx);

    assert_eq!(insertion_ctx.unassigned, vec![1]);
    assert_eq!(insertion_ctx.tours[0].len(), 2);
    assert!(insertion_ctx.tours[0].contains(&2) && insertion_ctx.tours[0].contains(&3));
}
