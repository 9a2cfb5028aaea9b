use super::*;

prop_compose! {
    fn generate_time_window()(start in 0_f64..2000., width in 50_f64..500.) -> (f64, f64) {
        (start, start + width)
    }
}

prop_compose! {
    fn generate_problem_with_time_windows()
    (
        customers in generate_customers(1..12, generate_coordinate()),
        time_windows in prop::collection::vec(prop::option::of(generate_time_window()), 12),
        num_vehicles in 1_i64..5,
    ) -> Problem {
        let customers = customers
            .into_iter()
            .zip(time_windows)
            .map(|(node, tw)| Node { time_window: tw.map(|(start, end)| vec![start, end]), ..node })
            .collect();

        create_problem_with_customers(customers, num_vehicles)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]
    #[test]
    #[ignore]
    fn can_solve_problem_with_time_windows(problem in generate_problem_with_time_windows()) {
        let response = solve_test_problem(&problem);

        // NOTE random time windows can make the problem infeasible, but never a violated success
        if response.is_success() {
            prop_assert_eq!(check_response(&problem, &response), Ok(()));
        } else {
            prop_assert_eq!(response.message.as_deref(), Some("No solution found."));
        }
    }
}
