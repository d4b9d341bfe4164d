//! Boundary adapters converting ordinary computations into outcomes.
//!
//! Each adapter invokes its computation exactly once, synchronously, inside
//! a capturing scope. A normal return wraps as a success; a panic unwinding
//! out of the computation is captured and wrapped as a failure, and never
//! propagates to the adapter's caller. The computation's own side effects
//! happen exactly as if it had been called directly.
//!
//! Two families cover the five computation shapes:
//!
//! - the plain adapters accept computations returning bare values, and the
//!   only failure signal they capture is a panic ([`PanicPayload`]);
//! - the `try_` adapters additionally accept the computation's own error
//!   channel: shapes returning [`Result`], whose `Err` lands in
//!   [`Captured::Declared`] while a panic lands in [`Captured::Panicked`].
//!
//! Both families share the same capture-and-convert behavior; they differ
//! only in which failure signals the scope is declared to accept.

use crate::{Captured, PanicPayload};
use std::panic::{self, UnwindSafe};
use upshot_algebra::Outcome;
use upshot_core::{Apply, Combine, Decide, Produce, Relate};

/// Run a computation under the capturing scope shared by every adapter.
fn capture<R>(computation: impl FnOnce() -> R + UnwindSafe) -> Outcome<R, PanicPayload> {
    match panic::catch_unwind(computation) {
        Ok(value) => Outcome::success(value),
        Err(raw) => {
            let payload = PanicPayload::new(raw);
            tracing::debug!(payload = %payload, "captured panic at wrap boundary");
            Outcome::failure(payload)
        },
    }
}

/// Capture a fallible computation, folding its error channel into
/// [`Captured`].
fn capture_declared<R, E>(
    computation: impl FnOnce() -> Result<R, E> + UnwindSafe,
) -> Outcome<R, Captured<E>> {
    capture(computation)
        .transform_failure(Captured::Panicked)
        .and_then(|returned| match returned {
            Ok(value) => Outcome::success(value),
            Err(error) => Outcome::failure(Captured::Declared(error)),
        })
}

/// Execute a zero-argument computation and wrap its outcome.
pub fn supplier<R, P>(supplier: P) -> Outcome<R, PanicPayload>
where
    P: Produce<R> + UnwindSafe,
{
    capture(move || supplier.produce())
}

/// Apply a one-argument computation and wrap its outcome.
pub fn unary<A, R, M>(argument: A, function: M) -> Outcome<R, PanicPayload>
where
    A: UnwindSafe,
    M: Apply<A, R> + UnwindSafe,
{
    capture(move || function.apply(argument))
}

/// Apply a two-argument computation and wrap its outcome.
pub fn binary<A, B, R, M>(first: A, second: B, function: M) -> Outcome<R, PanicPayload>
where
    A: UnwindSafe,
    B: UnwindSafe,
    M: Combine<A, B, R> + UnwindSafe,
{
    capture(move || function.combine(first, second))
}

/// Test a value with a predicate and wrap the decision.
pub fn predicate<A, P>(argument: A, predicate: P) -> Outcome<bool, PanicPayload>
where
    A: UnwindSafe,
    P: Decide<A> + UnwindSafe,
{
    capture(move || predicate.decide(argument))
}

/// Test a pair of values with a predicate and wrap the decision.
pub fn relation<A, B, P>(first: A, second: B, predicate: P) -> Outcome<bool, PanicPayload>
where
    A: UnwindSafe,
    B: UnwindSafe,
    P: Relate<A, B> + UnwindSafe,
{
    capture(move || predicate.relate(first, second))
}

/// Execute a zero-argument fallible computation and wrap its outcome.
///
/// A returned `Err` becomes [`Captured::Declared`]; a panic becomes
/// [`Captured::Panicked`].
pub fn try_supplier<R, E, P>(supplier: P) -> Outcome<R, Captured<E>>
where
    P: Produce<Result<R, E>> + UnwindSafe,
{
    capture_declared(move || supplier.produce())
}

/// Apply a one-argument fallible computation and wrap its outcome.
pub fn try_unary<A, R, E, M>(argument: A, function: M) -> Outcome<R, Captured<E>>
where
    A: UnwindSafe,
    M: Apply<A, Result<R, E>> + UnwindSafe,
{
    capture_declared(move || function.apply(argument))
}

/// Apply a two-argument fallible computation and wrap its outcome.
pub fn try_binary<A, B, R, E, M>(first: A, second: B, function: M) -> Outcome<R, Captured<E>>
where
    A: UnwindSafe,
    B: UnwindSafe,
    M: Combine<A, B, Result<R, E>> + UnwindSafe,
{
    capture_declared(move || function.combine(first, second))
}

/// Test a value with a fallible predicate and wrap the decision.
///
/// A fallible decision is a mapping to `Result<bool, E>`, so the predicate
/// here is [`Apply`]-shaped rather than [`Decide`]-shaped.
pub fn try_predicate<A, E, M>(argument: A, predicate: M) -> Outcome<bool, Captured<E>>
where
    A: UnwindSafe,
    M: Apply<A, Result<bool, E>> + UnwindSafe,
{
    capture_declared(move || predicate.apply(argument))
}

/// Test a pair of values with a fallible predicate and wrap the decision.
pub fn try_relation<A, B, E, M>(first: A, second: B, predicate: M) -> Outcome<bool, Captured<E>>
where
    A: UnwindSafe,
    B: UnwindSafe,
    M: Combine<A, B, Result<bool, E>> + UnwindSafe,
{
    capture_declared(move || predicate.combine(first, second))
}

#[cfg(test)]
#[allow(
    clippy::panic,
    reason = "adapters are exercised with deliberately panicking computations"
)]
mod tests {
    use super::*;
    use upshot_testkit::silence_panic_hook;

    #[test]
    fn supplier_wraps_the_returned_value() {
        let outcome = supplier(|| 42);
        assert!(matches!(outcome, Outcome::Success(42)));
    }

    #[test]
    fn unary_wraps_the_mapped_value() {
        let outcome = unary(21, |x: i32| x * 2);
        assert!(matches!(outcome, Outcome::Success(42)));
    }

    #[test]
    fn unary_captures_a_panic_as_failure() {
        silence_panic_hook();

        let reciprocal = |x: u32| {
            if x == 0 {
                panic!("zero has no reciprocal");
            }
            1.0 / f64::from(x)
        };

        let outcome = unary(0u32, reciprocal);
        let message = outcome.reduce(|_| None, |payload| payload.message().map(str::to_owned));
        assert_eq!(message.as_deref(), Some("zero has no reciprocal"));
    }

    #[test]
    fn binary_and_relation_cover_two_argument_shapes() {
        let sum = binary(2, 3, |a: i32, b: i32| a + b);
        assert!(matches!(sum, Outcome::Success(5)));

        let related = relation("a", "a", |a: &str, b: &str| a == b);
        assert!(matches!(related, Outcome::Success(true)));
    }

    #[test]
    fn predicate_wraps_the_decision() {
        let decided = predicate(7, |x: i32| x > 0);
        assert!(matches!(decided, Outcome::Success(true)));
    }

    #[test]
    fn try_family_separates_declared_errors_from_panics() {
        silence_panic_hook();

        let parse = |raw: &str| raw.parse::<u32>();
        let parsed = try_unary("17", parse);
        assert!(matches!(parsed, Outcome::Success(17)));

        let failed = try_unary("not a number", parse);
        let declared = failed.reduce(|_| false, |captured| captured.is_declared());
        assert!(declared);

        let exploding = try_supplier(|| -> Result<u32, String> { panic!("wires crossed") });
        let panicked = exploding.reduce(|_| false, |captured| captured.is_panic());
        assert!(panicked);
    }
}
