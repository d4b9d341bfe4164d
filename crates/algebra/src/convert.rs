//! Interop with the standard library's `Result`.
//!
//! `Outcome` and `Result` carry the same information, so conversions are
//! lossless in both directions. They exist so outcome-based pipelines can
//! sit inside `?`-based code (and the other way around) without ceremony.

use crate::Outcome;

impl<S, F> From<Result<S, F>> for Outcome<S, F> {
    fn from(result: Result<S, F>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<S, F> From<Outcome<S, F>> for Result<S, F> {
    fn from(outcome: Outcome<S, F>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(failure) => Err(failure),
        }
    }
}

impl<S, F> Outcome<S, F> {
    /// Convert into the standard library's `Result`, success becoming `Ok`.
    pub fn into_result(self) -> Result<S, F> {
        self.into()
    }
}
