use super::*;

#[test]
fn can_join_many_errors() {
    let errors = vec![GenericError::from("first"), GenericError::from("second".to_string())];

    assert_eq!(GenericError::join_many(errors.as_slice(), ", "), "first, second");
}

#[test]
fn can_display_solve_error_without_kind() {
    let errors = [
        SolveError::validation("First node must be the depot."),
        SolveError::infeasible("First node must be the depot."),
        SolveError::unexpected("First node must be the depot."),
    ];

    errors.iter().for_each(|error| {
        assert_eq!(error.to_string(), "First node must be the depot.");
        assert_eq!(error.message(), "First node must be the depot.");
    });
}

#[test]
fn can_distinguish_solve_error_kinds() {
    assert!(matches!(SolveError::validation("msg"), SolveError::Validation(_)));
    assert!(matches!(SolveError::infeasible("msg"), SolveError::Infeasible(_)));
    assert!(matches!(SolveError::unexpected("msg"), SolveError::Unexpected(_)));
}

#[test]
fn can_convert_io_error() {
    let error: GenericError = std::io::Error::other("disk is full").into();

    assert_eq!(error.message(), "disk is full");
}
