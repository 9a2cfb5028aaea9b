use super::*;
use crate::helpers::models::*;
use crate::helpers::solver::create_test_solution;
use crate::solver::TelemetryMode;
use crate::utils::Environment;

#[test]
fn can_keep_penalties_for_undirected_arcs() {
    let mut penalties = ArcPenalties::default();
    assert!(penalties.is_empty());

    penalties.increment(3, 1);
    penalties.increment(1, 3);

    assert_eq!(penalties.get(1, 3), 2);
    assert_eq!(penalties.get(3, 1), 2);
    assert_eq!(penalties.get(1, 2), 0);
    assert_eq!(penalties.len(), 1);
}

parameterized_test! {can_improve_solution, (customers, vehicles, initial, expected_cost), {
    let problem = create_test_problem(customers, vehicles);
    let initial = create_test_solution(&problem, initial);
    let environment = Environment::new_with_seed(0);
    let mut telemetry = Telemetry::new(TelemetryMode::None);

    let solution = GuidedLocalSearch::new(0.1, 10).run(&problem, &environment, initial, &mut telemetry);

    assert_eq!(solution.cost, expected_cost);
    assert_eq!(solution, create_test_solution(&problem, solution.tours.clone()));
}}

can_improve_solution! {
    case01_balance_routes: (&[(10., 0.), (0., 10.)], 2, vec![vec![1, 2], vec![]], 204_000),
    case02_untangle_route: (&[(0., 10.), (10., 10.), (10., 0.)], 1, vec![vec![1, 3, 2]], 404_000),
    case03_already_optimal: (&[(10., 0.)], 1, vec![vec![1]], 202_000),
}

#[test]
fn can_stop_when_quota_is_reached() {
    let problem = create_test_problem(&[(10., 0.), (0., 10.)], 2);
    let initial = create_test_solution(&problem, vec![vec![1, 2], vec![]]);
    let mut environment = Environment::new_with_seed(0);
    environment.quota = Some(std::sync::Arc::new(crate::utils::TimeQuota::new(-1.)));
    let mut telemetry = Telemetry::new(TelemetryMode::None);

    let solution = GuidedLocalSearch::new(0.1, 10).run(&problem, &environment, initial.clone(), &mut telemetry);

    assert_eq!(solution, initial);
    assert_eq!(telemetry.statistics().moves, 0);
}
