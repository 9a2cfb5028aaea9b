
use crate::SolveSettings;
use crate::checker::CheckerContext;
use crate::format::NodeId;
use crate::format::problem::{Node, Problem};
use crate::format::solution::Response;
use skillroute_core::models::problem::DimensionLimits;
use skillroute_core::solver::SolverConfig;
use skillroute_core::utils::GenericError;
use std::collections::HashMap;

pub fn create_depot(x: f64, y: f64) -> Node {
    Node { id: NodeId::from(0), x, y, is_depot: true, time_window: None, required_skills: None }
}

pub fn create_node(id: i64, x: f64, y: f64) -> Node {
    Node { id: NodeId::from(id), x, y, is_depot: false, time_window: None, required_skills: None }
}

pub fn create_node_with_time_window(id: i64, x: f64, y: f64, tw: (f64, f64)) -> Node {
    Node { time_window: Some(vec![tw.0, tw.1]), ..create_node(id, x, y) }
}

pub fn create_node_with_skills(id: i64, x: f64, y: f64, skills: &[&str]) -> Node {
    Node { required_skills: Some(to_strings(skills)), ..create_node(id, x, y) }
}

pub fn create_problem(nodes: Vec<Node>, num_vehicles: i64) -> Problem {
    Problem { nodes, num_vehicles, vehicle_skills: None, available_skills: None }
}

/// Creates a problem with depot at (0, 0), customer 1 at (10, 0) and customer 2 at (0, 10).
pub fn create_three_node_problem() -> Problem {
    create_problem(vec![create_depot(0., 0.), create_node(1, 10., 0.), create_node(2, 0., 10.)], 2)
}

pub fn with_skills(problem: Problem, vehicle_skills: &[(usize, &[&str])], available: &[&str]) -> Problem {
    let vehicle_skills = vehicle_skills
        .iter()
        .map(|(vehicle, skills)| (vehicle.to_string(), to_strings(skills)))
        .collect::<HashMap<_, _>>();

    Problem { vehicle_skills: Some(vehicle_skills), available_skills: Some(to_strings(available)), ..problem }
}

pub fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub fn to_node_ids(ids: &[i64]) -> Vec<NodeId> {
    ids.iter().map(|&id| NodeId::from(id)).collect()
}

/// Creates a success response with objective calculated using default span cost coefficient.
pub fn create_success_response(routes: Vec<Vec<i64>>, max_distance: f64, total_distance: f64) -> Response {
    let routes = routes.iter().map(|route| to_node_ids(route.as_slice())).collect();

    Response::success(routes, max_distance, total_distance, total_distance + 100. * max_distance)
}

/// Returns routes as sorted lists of string ids, so vehicle order does not matter.
pub fn get_sorted_routes(response: &Response) -> Vec<Vec<String>> {
    let mut routes = response
        .routes
        .iter()
        .flatten()
        .map(|route| route.iter().map(|id| id.to_string()).collect::<Vec<_>>())
        .collect::<Vec<_>>();
    routes.sort();

    routes
}

pub fn create_test_settings() -> SolveSettings {
    SolveSettings {
        config: SolverConfig { max_time: Some(5), max_stagnation: 50, ..SolverConfig::default() },
        ..SolveSettings::default()
    }
}

pub fn to_request(problem: &Problem) -> String {
    serde_json::to_string(problem).expect("cannot serialize problem")
}

pub fn solve_test_problem(problem: &Problem) -> Response {
    crate::solve_request(to_request(problem).as_str(), &create_test_settings())
}

pub fn check_response(problem: &Problem, response: &Response) -> Result<(), Vec<GenericError>> {
    CheckerContext::new(problem.clone(), response.clone(), &DimensionLimits::default())?.check()
}

pub fn assert_error(response: &Response, message: &str) {
    assert_eq!(response.status, "error");
    assert_eq!(response.message.as_deref(), Some(message));
    assert!(response.routes.is_none());
}
