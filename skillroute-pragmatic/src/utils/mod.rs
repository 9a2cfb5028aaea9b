//! Various helpers.

#[cfg(test)]
#[path = "../../tests/unit/utils/collections_test.rs"]
mod collections_test;

/// Combines error results into one, keeping all errors.
pub fn combine_error_results<T: Clone>(results: &[Result<(), T>]) -> Result<(), Vec<T>> {
    let errors = results.iter().cloned().flat_map(|result| result.err().into_iter()).collect::<Vec<T>>();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
