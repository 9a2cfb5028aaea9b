#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use std::fmt;

/// A basic error type which is, essentially, a wrapper on String type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GenericError(String);

/// A type alias for result type with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl GenericError {
    /// Returns error message.
    pub fn message(&self) -> &str {
        self.0.as_str()
    }

    /// Joins many errors with separator.
    pub fn join_many(errs: &[GenericError], separator: &str) -> String {
        errs.iter().map(|err| err.message()).collect::<Vec<_>>().join(separator)
    }
}

impl fmt::Display for GenericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl<'a> From<&'a str> for GenericError {
    fn from(value: &'a str) -> Self {
        Self(value.to_string())
    }
}

impl From<std::io::Error> for GenericError {
    fn from(value: std::io::Error) -> Self {
        Self(value.to_string())
    }
}

/// Classifies a failed solve request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveError {
    /// Input data is malformed or breaks a precondition, detected before any search.
    Validation(GenericError),
    /// No vehicle can serve some node or no feasible tour exists.
    Infeasible(GenericError),
    /// Anything else which was not anticipated.
    Unexpected(GenericError),
}

impl SolveError {
    /// Creates a validation error.
    pub fn validation(msg: impl Into<GenericError>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates an infeasibility error.
    pub fn infeasible(msg: impl Into<GenericError>) -> Self {
        Self::Infeasible(msg.into())
    }

    /// Creates an unexpected error.
    pub fn unexpected(msg: impl Into<GenericError>) -> Self {
        Self::Unexpected(msg.into())
    }

    /// Returns error message as is, without kind.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(err) | Self::Infeasible(err) | Self::Unexpected(err) => err.message(),
        }
    }
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SolveError {}
