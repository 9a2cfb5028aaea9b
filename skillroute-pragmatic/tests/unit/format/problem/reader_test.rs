use super::*;
use crate::format::NodeId;
use crate::helpers::*;

fn map_with_defaults(problem: &Problem) -> Result<CoreProblem, SolveError> {
    map_to_core_problem(problem, &DimensionLimits::default())
}

parameterized_test! {can_detect_malformed_request, (request, expected), {
    assert_eq!(read_problem(request).err(), Some(expected));
}}

can_detect_malformed_request! {
    case01_not_json: ("nodes: []", SolveError::validation("Request must be JSON")),
    case02_empty_body: ("", SolveError::validation("Request must be JSON")),
    case03_null: ("null", SolveError::validation("Missing required data: nodes, num_vehicles")),
    case04_array: ("[]", SolveError::validation("Missing required data: nodes, num_vehicles")),
    case05_empty_object: ("{}", SolveError::validation("Missing required data: nodes, num_vehicles")),
    case06_no_vehicles: (r#"{"nodes": []}"#, SolveError::validation("Missing required data: nodes, num_vehicles")),
    case07_no_nodes: (r#"{"num_vehicles": 1}"#, SolveError::validation("Missing required data: nodes, num_vehicles")),
}

#[test]
fn can_report_wrong_field_type_as_unexpected_error() {
    let result = read_problem(r#"{"nodes": "depot", "num_vehicles": 1}"#);

    assert!(matches!(result, Err(SolveError::Unexpected(_))));
}

#[test]
fn can_read_problem_with_string_and_number_ids() {
    let request = r#"{
      "nodes": [
        { "id": "D", "x": 0, "y": 0, "is_depot": true },
        { "id": 1, "x": 3, "y": 4, "time_window": [0, 100], "required_skills": ["fragile"] }
      ],
      "num_vehicles": 2,
      "vehicle_skills": { "1": ["fragile"] },
      "available_skills": ["fragile"]
    }"#;

    let problem = read_problem(request).expect("cannot read problem");

    assert_eq!(problem.nodes[0].id, NodeId::from("D"));
    assert_eq!(problem.nodes[1].id, NodeId::from(1));
    assert_eq!(problem.nodes[1].time_window, Some(vec![0., 100.]));
    assert_eq!(problem.num_vehicles, 2);
    assert_eq!(problem.get_vehicle_skills(1), to_strings(&["fragile"]).as_slice());
}

parameterized_test! {can_map_validation_errors, (problem, expected), {
    assert_eq!(map_with_defaults(&problem).err(), Some(SolveError::validation(expected)));
}}

can_map_validation_errors! {
    case01_no_nodes: (create_problem(vec![], 1), "No nodes provided."),
    case02_no_depot: (
        create_problem(vec![create_node(1, 0., 0.), create_node(2, 1., 0.)], 1),
        "First node must be the depot."
    ),
    case03_zero_vehicles: (
        create_problem(vec![create_depot(0., 0.), create_node(1, 1., 0.)], 0),
        "No vehicles available to serve customer nodes."
    ),
    case04_negative_vehicles: (
        create_problem(vec![create_depot(0., 0.), create_node(1, 1., 0.)], -1),
        "Number of vehicles must be positive."
    ),
    case05_depot_only_zero_vehicles: (
        create_problem(vec![create_depot(0., 0.)], 0),
        "Number of vehicles must be positive."
    ),
    case06_second_depot: (
        create_problem(vec![create_depot(0., 0.), Node { is_depot: true, ..create_node(5, 1., 0.) }], 1),
        "Node 5 is marked as depot, but only the first node can be the depot."
    ),
    case07_inverted_time_window: (
        create_problem(vec![create_depot(0., 0.), create_node_with_time_window(1, 1., 0., (10., 5.))], 1),
        "Invalid time window [10, 5] for node 1."
    ),
    case08_wrong_time_window_size: (
        create_problem(
            vec![create_depot(0., 0.), Node { time_window: Some(vec![1., 2., 3.]), ..create_node(1, 1., 0.) }],
            1
        ),
        "Time window of node 1 must have exactly two values."
    ),
}

#[test]
fn can_map_time_windows_into_scaled_units() {
    let problem = create_problem(
        vec![
            create_depot(0., 0.),
            create_node_with_time_window(1, 1., 0., (1.5, 20.)),
            Node { time_window: Some(vec![]), ..create_node(2, 2., 0.) },
        ],
        1,
    );

    let core_problem = map_with_defaults(&problem).expect("cannot map problem");

    assert_eq!(core_problem.nodes[0].time_window, None);
    assert_eq!(core_problem.nodes[1].time_window, Some(TimeWindow::new(150, 2000)));
    assert_eq!(core_problem.nodes[2].time_window, None);
}

#[test]
fn can_map_vehicle_skills_ignoring_unknown_keys() {
    let problem = create_problem(vec![create_depot(0., 0.), create_node_with_skills(1, 1., 0., &["a"])], 2);
    let mut problem = with_skills(problem, &[(1, &["a", "b"]), (7, &["a"])], &["a", "b"]);
    problem.vehicle_skills.get_or_insert_with(Default::default).insert("truck".to_string(), to_strings(&["a"]));

    let core_problem = map_with_defaults(&problem).expect("cannot map problem");

    assert_eq!(core_problem.fleet.size(), 2);
    assert!(core_problem.fleet.vehicles[0].skills.is_empty());
    assert!(core_problem.fleet.vehicles[1].has_all_skills(["a", "b"]));
}

#[test]
fn can_report_node_without_capable_vehicle_as_infeasible() {
    let problem = create_problem(vec![create_depot(0., 0.), create_node_with_skills(1, 1., 0., &["a", "b"])], 2);
    let problem = with_skills(problem, &[(0, &["a"]), (1, &["b"])], &["a", "b"]);

    let result = map_with_defaults(&problem);

    assert_eq!(result.err(), Some(SolveError::infeasible("No vehicle has the required skills (a, b) for node 1")));
}

#[test]
fn can_ignore_skills_when_no_skills_are_available() {
    let problem = create_problem(vec![create_depot(0., 0.), create_node_with_skills(1, 1., 0., &["a"])], 1);

    assert!(map_with_defaults(&problem).is_ok());
}
