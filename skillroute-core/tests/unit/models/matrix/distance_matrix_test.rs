use super::*;

#[test]
fn can_build_matrix_from_coordinates() {
    let coordinates = vec![Coordinate::new(0., 0.), Coordinate::new(10., 0.), Coordinate::new(0., 10.)];

    let matrix = DistanceMatrix::from_coordinates(coordinates.as_slice()).unwrap();

    assert_eq!(matrix.size(), 3);
    assert_eq!(matrix.distance(0, 1), 1000);
    assert_eq!(matrix.distance(0, 2), 1000);
    assert_eq!(matrix.distance(1, 2), 1414);
    assert_eq!(matrix.distance(2, 1), 1414);
    assert!(matrix.is_symmetric());
}

#[test]
fn can_build_empty_and_single_node_matrix() {
    assert_eq!(DistanceMatrix::from_coordinates(&[]).unwrap().size(), 0);

    let matrix = DistanceMatrix::from_coordinates(&[Coordinate::new(3., 4.)]).unwrap();
    assert_eq!(matrix.distance(0, 0), 0);
}

parameterized_test! {can_reject_non_finite_coordinates, coordinate, {
    let result = DistanceMatrix::from_coordinates(&[Coordinate::new(0., 0.), coordinate]);

    assert_eq!(result.unwrap_err().message(), "coordinate at index 1 is not a finite number");
}}

can_reject_non_finite_coordinates! {
    case01_nan_x: Coordinate::new(Float::NAN, 0.),
    case02_inf_y: Coordinate::new(0., Float::INFINITY),
}

#[test]
fn can_calculate_path_distance() {
    let matrix = DistanceMatrix::from_values(3, vec![0, 1, 2, 1, 0, 3, 2, 3, 0]).unwrap();

    assert_eq!(matrix.path_distance(&[0, 1, 2, 0]), 6);
    assert_eq!(matrix.path_distance(&[0]), 0);
    assert_eq!(matrix.path_distance(&[]), 0);
}

#[test]
fn can_validate_raw_values_size() {
    assert!(DistanceMatrix::from_values(2, vec![0, 1, 1]).is_err());
}

#[test]
fn can_detect_asymmetric_matrix() {
    let matrix = DistanceMatrix::from_values(2, vec![0, 1, 2, 0]).unwrap();

    assert!(!matrix.is_symmetric());
}

parameterized_test! {can_reject_too_large_distances, coordinate, {
    let result = DistanceMatrix::from_coordinates(&[Coordinate::new(0., 0.), coordinate]);

    assert_eq!(result.unwrap_err().message(), "distance between nodes at 0 and 1 is out of range");
}}

can_reject_too_large_distances! {
    case01_huge_x: Coordinate::new(4.62e16, 0.),
    case02_huge_y: Coordinate::new(0., -1e15),
    case03_overflow: Coordinate::new(Float::MAX, Float::MAX),
}

#[test]
fn can_accept_large_but_supported_distances() {
    let matrix = DistanceMatrix::from_coordinates(&[Coordinate::new(0., 0.), Coordinate::new(1e9, 0.)]).unwrap();

    assert_eq!(matrix.distance(0, 1), 100_000_000_000);
    assert!(matrix.distance(0, 1) <= MAX_ARC_DISTANCE);
}

#[test]
fn can_saturate_path_distance() {
    let matrix = DistanceMatrix::from_values(2, vec![0, Distance::MAX / 2 + 1, Distance::MAX / 2 + 1, 0]).unwrap();

    assert_eq!(matrix.path_distance(&[0, 1, 0]), Distance::MAX);
}
