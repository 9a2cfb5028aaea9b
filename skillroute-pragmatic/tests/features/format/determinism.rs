use crate::helpers::*;
use crate::solve_request;

#[test]
fn can_produce_same_response_for_same_request() {
    let request = r#"{
      "nodes": [
        { "id": 0, "x": 0, "y": 0, "is_depot": true },
        { "id": 1, "x": 12, "y": 3 },
        { "id": 2, "x": -4, "y": 9, "required_skills": ["lift"] },
        { "id": 3, "x": 7, "y": -11, "time_window": [0, 40] },
        { "id": 4, "x": -15, "y": -2 },
        { "id": 5, "x": 3, "y": 18 },
        { "id": 6, "x": 20, "y": -6 },
        { "id": 7, "x": -9, "y": 14 }
      ],
      "num_vehicles": 3,
      "vehicle_skills": { "1": ["lift"] },
      "available_skills": ["lift"]
    }"#;
    let settings = create_test_settings();

    let first = solve_request(request, &settings);
    let second = solve_request(request, &settings);

    assert!(first.is_success());
    assert_eq!(first, second);
}
