//! The two-channel outcome type and its combinator set.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a computation that either succeeded with a value of type `S`
/// or failed with a value of the independently chosen type `F`.
///
/// Exactly one channel is ever occupied, and the occupied channel never
/// changes for the lifetime of an instance. Every combinator consumes the
/// outcome and returns a new one; nothing is mutated in place.
///
/// [`success`](Self::success) and [`failure`](Self::failure) are the
/// construction surface. Rust has no null: any sized value is a legal
/// payload for either channel, and absence is expressed by an explicit
/// `Option` payload where a caller wants one.
///
/// The only operations that leave the type are [`reduce`](Self::reduce) and
/// [`conclude`](Self::conclude), both of which demand a handler for each
/// channel, so a failure can never be dropped without the caller naming
/// what happens to it.
#[must_use = "an `Outcome` may carry a failure that has to be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome<S, F> {
    /// The computation produced a value.
    Success(S),
    /// The computation failed with a description of the failure.
    Failure(F),
}

impl<S, F> Outcome<S, F> {
    /// Create a successful outcome.
    pub const fn success(value: S) -> Self {
        Self::Success(value)
    }

    /// Create a failed outcome.
    pub const fn failure(value: F) -> Self {
        Self::Failure(value)
    }

    /// Returns true when the success channel is occupied.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns true when the failure channel is occupied.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Apply a mapping to the success value, leaving a failure untouched.
    pub fn transform_success<Z, M>(self, mapping: M) -> Outcome<Z, F>
    where
        M: FnOnce(S) -> Z,
    {
        match self {
            Self::Success(value) => Outcome::Success(mapping(value)),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Apply a mapping to the failure value, leaving a success untouched.
    pub fn transform_failure<G, M>(self, mapping: M) -> Outcome<S, G>
    where
        M: FnOnce(F) -> G,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(failure) => Outcome::Failure(mapping(failure)),
        }
    }

    /// Sequence a further fallible step after a success.
    ///
    /// The first failure in a chain propagates to the end without invoking
    /// any later step; the mapping is only called while the success channel
    /// is active.
    ///
    /// ```
    /// use upshot_algebra::Outcome;
    ///
    /// let square = |x: i32| Outcome::<i32, i32>::success(x * x);
    ///
    /// assert_eq!(
    ///     Outcome::<i32, i32>::success(2).and_then(square).and_then(square),
    ///     Outcome::success(16),
    /// );
    /// assert_eq!(
    ///     Outcome::<i32, i32>::failure(3).and_then(square),
    ///     Outcome::failure(3),
    /// );
    /// ```
    pub fn and_then<Z, M>(self, mapping: M) -> Outcome<Z, F>
    where
        M: FnOnce(S) -> Outcome<Z, F>,
    {
        match self {
            Self::Success(value) => mapping(value),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Combine with a subsequent outcome, keeping the first failure and the
    /// last success.
    ///
    /// Not commutative:
    ///
    /// ```text
    /// success(x).and(success(y)) == success(y)
    /// success(x).and(failure(y)) == failure(y)
    /// failure(x).and(success(y)) == failure(x)
    /// failure(x).and(failure(y)) == failure(x)
    /// ```
    ///
    /// The argument is an already-constructed outcome, so the caller always
    /// evaluates it before this method runs, even when `self` is a failure
    /// and the argument ends up discarded. Use [`and_then`](Self::and_then)
    /// when the second step should only run after a success.
    pub fn and<Z>(self, other: Outcome<Z, F>) -> Outcome<Z, F> {
        match self {
            Self::Success(_) => other,
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Attempt to recover from a failure with a further fallible step.
    ///
    /// The first success in a chain propagates to the end without invoking
    /// any later step; the mapping is only called while the failure channel
    /// is active.
    ///
    /// ```
    /// use upshot_algebra::Outcome;
    ///
    /// let bump = |x: i32| Outcome::<i32, i32>::success(x + 1);
    ///
    /// assert_eq!(
    ///     Outcome::<i32, i32>::failure(3).or_else(bump).or_else(bump),
    ///     Outcome::success(4),
    /// );
    /// ```
    pub fn or_else<G, M>(self, mapping: M) -> Outcome<S, G>
    where
        M: FnOnce(F) -> Outcome<S, G>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(failure) => mapping(failure),
        }
    }

    /// Combine with an alternative outcome, keeping the first success and
    /// the last failure.
    ///
    /// Not commutative:
    ///
    /// ```text
    /// success(x).or(success(y)) == success(x)
    /// success(x).or(failure(y)) == success(x)
    /// failure(x).or(success(y)) == success(y)
    /// failure(x).or(failure(y)) == failure(y)
    /// ```
    ///
    /// As with [`and`](Self::and), the alternative is constructed eagerly by
    /// the caller regardless of which branch is kept; reach for
    /// [`or_else`](Self::or_else) to defer the alternative.
    pub fn or<G>(self, other: Outcome<S, G>) -> Outcome<S, G> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(_) => other,
        }
    }

    /// Collapse both channels into a single value.
    ///
    /// Exactly one of the two handlers runs, chosen by the occupied channel.
    /// Requiring both handlers is what makes ignoring a failure impossible.
    pub fn reduce<R, SM, FM>(self, on_success: SM, on_failure: FM) -> R
    where
        SM: FnOnce(S) -> R,
        FM: FnOnce(F) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(failure) => on_failure(failure),
        }
    }

    /// Finish a chain by consuming whichever channel is occupied.
    ///
    /// The side-effecting sibling of [`reduce`](Self::reduce): exactly one
    /// consumer runs and the outcome is spent.
    pub fn conclude<SC, FC>(self, on_success: SC, on_failure: FC)
    where
        SC: FnOnce(S),
        FC: FnOnce(F),
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(failure) => on_failure(failure),
        }
    }

    /// Borrow both channels, producing an outcome of references.
    #[must_use]
    pub const fn as_ref(&self) -> Outcome<&S, &F> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }
}

impl<S: fmt::Display, F: fmt::Display> fmt::Display for Outcome<S, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(formatter, "Success[{value}]"),
            Self::Failure(failure) => write!(formatter, "Failure[{failure}]"),
        }
    }
}
