use super::*;
use skillroute_core::models::problem::DimensionLimits;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]
    #[test]
    fn can_build_symmetric_matrix(customers in generate_customers(0..32, generate_coordinate())) {
        let problem = create_problem_with_customers(customers, 2);

        let core_problem =
            map_to_core_problem(&problem, &DimensionLimits::default()).ok().expect("cannot map problem");

        prop_assert_eq!(core_problem.matrix.size(), problem.nodes.len());
        prop_assert!(core_problem.matrix.is_symmetric());
    }
}
