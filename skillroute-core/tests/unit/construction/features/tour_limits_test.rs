use super::*;

fn create_matrix() -> Arc<DistanceMatrix> {
    // 0 - 1: 3, 0 - 2: 4, 1 - 2: 5
    Arc::new(DistanceMatrix::from_values(3, vec![0, 3, 4, 3, 0, 5, 4, 5, 0]).unwrap())
}

parameterized_test! {can_limit_tour_distance, (tour, max_distance, expected), {
    let feature = create_travel_limit_feature("distance", create_matrix(), max_distance).unwrap();

    let result = feature.constraint.evaluate(&MoveContext::Tour { vehicle: 0, tour: tour.as_slice() });

    assert_eq!(result, expected);
}}

can_limit_tour_distance! {
    case01_empty: (vec![], 0, None),
    case02_fits: (vec![1, 2], 12, None),
    case03_exceeds: (vec![1, 2], 11, ConstraintViolation::fail(DISTANCE_LIMIT_CONSTRAINT_CODE)),
    case04_return_leg_counts: (vec![2], 7, ConstraintViolation::fail(DISTANCE_LIMIT_CONSTRAINT_CODE)),
    case05_single: (vec![2], 8, None),
}

parameterized_test! {can_limit_assignment_by_round_trip, (node, max_distance, expected), {
    let feature = create_travel_limit_feature("distance", create_matrix(), max_distance).unwrap();

    let result = feature.constraint.evaluate(&MoveContext::Assignment { node, vehicle: 0 });

    assert_eq!(result, expected);
}}

can_limit_assignment_by_round_trip! {
    case01: (1, 6, None),
    case02: (1, 5, ConstraintViolation::fail(DISTANCE_LIMIT_CONSTRAINT_CODE)),
    case03: (2, 8, None),
}

#[test]
fn can_calculate_tour_distance() {
    let matrix = create_matrix();

    assert_eq!(tour_distance(matrix.as_ref(), &[]), 0);
    assert_eq!(tour_distance(matrix.as_ref(), &[1]), 6);
    assert_eq!(tour_distance(matrix.as_ref(), &[1, 2]), 12);
    assert_eq!(tour_distance(matrix.as_ref(), &[2, 1]), 12);
}

#[test]
fn can_reject_tour_with_distance_overflow() {
    let huge = Distance::MAX / 2 + 1;
    let matrix = Arc::new(DistanceMatrix::from_values(2, vec![0, huge, huge, 0]).unwrap());
    let feature = create_travel_limit_feature("distance", matrix.clone(), 300_000).unwrap();

    assert_eq!(tour_distance(matrix.as_ref(), &[1]), Distance::MAX);
    assert_eq!(
        feature.constraint.evaluate(&MoveContext::Tour { vehicle: 0, tour: &[1] }),
        ConstraintViolation::fail(DISTANCE_LIMIT_CONSTRAINT_CODE)
    );
    assert_eq!(
        feature.constraint.evaluate(&MoveContext::Assignment { node: 1, vehicle: 0 }),
        ConstraintViolation::fail(DISTANCE_LIMIT_CONSTRAINT_CODE)
    );
}
