use crate::format::problem::*;
use crate::helpers::*;

#[test]
fn can_serve_two_customers_with_two_vehicles() {
    let problem = create_three_node_problem();

    let response = solve_test_problem(&problem);

    assert_eq!(response.status, "success");
    assert_eq!(get_sorted_routes(&response), vec![to_strings(&["0", "1", "0"]), to_strings(&["0", "2", "0"])]);
    assert_eq!(response.max_distance, Some(20.));
    assert_eq!(response.total_distance, Some(40.));
    assert_eq!(response.objective, Some(2040.));
    assert_eq!(response.message, None);
    assert_eq!(check_response(&problem, &response), Ok(()));
}

#[test]
fn can_serve_two_customers_with_one_vehicle() {
    let problem = Problem { num_vehicles: 1, ..create_three_node_problem() };

    let response = solve_test_problem(&problem);

    assert!(response.is_success());
    let route = response.routes.as_ref().and_then(|routes| routes.first()).expect("no routes");
    assert_eq!(route.len(), 4);
    let max_distance = response.max_distance.expect("no max distance");
    assert!((max_distance - (20. + 200_f64.sqrt())).abs() < 0.01);
    assert_eq!(response.max_distance, response.total_distance);
    assert_eq!(check_response(&problem, &response), Ok(()));
}

#[test]
fn can_keep_string_ids() {
    let problem = create_problem(
        vec![
            Node { id: "warehouse".into(), ..create_depot(0., 0.) },
            Node { id: "shop".into(), ..create_node(1, 3., 4.) },
        ],
        1,
    );

    let response = solve_test_problem(&problem);

    assert_eq!(response.routes, Some(vec![vec!["warehouse".into(), "shop".into(), "warehouse".into()]]));
    assert_eq!(response.max_distance, Some(10.));
    assert_eq!(response.total_distance, Some(10.));
}

#[test]
fn can_return_empty_routes_for_unused_vehicles() {
    let problem = create_problem(vec![create_depot(0., 0.), create_node(1, 1., 0.)], 3);

    let response = solve_test_problem(&problem);

    let routes = response.routes.clone().expect("no routes");
    assert_eq!(routes.len(), 3);
    assert_eq!(routes.iter().filter(|route| route.is_empty()).count(), 2);
    assert_eq!(check_response(&problem, &response), Ok(()));
}
