//! Contract coverage for the wrap adapters.
//!
//! Every adapter invokes its computation exactly once, lets the
//! computation's side effects happen as if it were called directly, stores
//! a captured panic payload verbatim, and never re-raises.

#![allow(
    clippy::panic,
    reason = "the capture contract is exercised with deliberately panicking computations"
)]

use std::panic::panic_any;
use upshot_algebra::Outcome;
use upshot_boundary::wrap;
use upshot_testkit::{CallCounter, EventLog, silence_panic_hook};

#[test]
fn every_shape_wraps_a_normal_return_as_success() {
    assert!(matches!(wrap::supplier(|| 42), Outcome::Success(42)));
    assert!(matches!(
        wrap::unary(2, |x: i32| x + 40),
        Outcome::Success(42)
    ));
    assert!(matches!(
        wrap::binary(40, 2, |a: i32, b: i32| a + b),
        Outcome::Success(42)
    ));
    assert!(matches!(
        wrap::predicate(42, |x: i32| x % 2 == 0),
        Outcome::Success(true)
    ));
    assert!(matches!(
        wrap::relation(6, 7, |a: i32, b: i32| a * b == 42),
        Outcome::Success(true)
    ));
}

#[test]
fn every_shape_captures_a_panic_as_failure() {
    silence_panic_hook();

    assert!(wrap::supplier(|| -> u8 { panic!("s") }).is_failure());
    assert!(wrap::unary(0, |_: i32| -> u8 { panic!("u") }).is_failure());
    assert!(wrap::binary(0, 0, |_: i32, _: i32| -> u8 { panic!("b") }).is_failure());
    assert!(wrap::predicate(0, |_: i32| -> bool { panic!("p") }).is_failure());
    assert!(wrap::relation(0, 0, |_: i32, _: i32| -> bool { panic!("r") }).is_failure());
}

#[test]
fn computations_run_exactly_once() {
    silence_panic_hook();

    let counter = CallCounter::new();
    let probe = counter.clone();
    let outcome = wrap::supplier(move || {
        probe.bump();
        "done"
    });
    assert!(outcome.is_success());
    assert_eq!(counter.count(), 1);

    let counter = CallCounter::new();
    let probe = counter.clone();
    let outcome = wrap::supplier(move || -> &'static str {
        probe.bump();
        panic!("after the side effect");
    });
    assert!(outcome.is_failure());
    assert_eq!(counter.count(), 1);
}

#[test]
fn side_effects_survive_a_captured_panic() {
    silence_panic_hook();

    let log = EventLog::new();
    let probe = log.clone();
    let outcome = wrap::unary("order-7", move |order: &str| -> bool {
        probe.record(format!("charged {order}"));
        panic!("receipt printer on fire");
    });

    assert!(outcome.is_failure());
    assert_eq!(log.events(), vec!["charged order-7".to_string()]);
}

#[test]
fn panic_payloads_are_stored_verbatim() {
    silence_panic_hook();

    let outcome = wrap::supplier(|| -> u8 { panic_any(0xABCDu32) });
    let payload = outcome.reduce(|_| None, |payload| Some(payload));
    let raw = payload.map(upshot_boundary::PanicPayload::into_inner);

    let code = raw.as_ref().and_then(|boxed| boxed.downcast_ref::<u32>());
    assert_eq!(code, Some(&0xABCD));
}

#[test]
fn wrapping_an_input_sweep_partitions_by_panic() {
    silence_panic_hook();

    let half = |x: u32| {
        assert!(x % 2 == 0, "odd input");
        x / 2
    };

    let halved: Vec<Outcome<u32, _>> = (0..4).map(|x| wrap::unary(x, half)).collect();
    let verdicts: Vec<bool> = halved.iter().map(Outcome::is_success).collect();

    assert_eq!(verdicts, vec![true, false, true, false]);
}

#[test]
fn try_adapters_cover_both_failure_signals() {
    silence_panic_hook();

    let quota = |used: u32, limit: u32| -> Result<u32, String> {
        if limit == 0 {
            panic!("limit misconfigured");
        }
        if used > limit {
            return Err(format!("over quota by {}", used - limit));
        }
        Ok(limit - used)
    };

    let remaining = wrap::try_binary(3, 10, quota);
    assert!(matches!(remaining, Outcome::Success(7)));

    let over = wrap::try_binary(12, 10, quota);
    let declared = over.reduce(|_| None, |captured| captured.declared().cloned());
    assert_eq!(declared.as_deref(), Some("over quota by 2"));

    let broken = wrap::try_binary(1, 0, quota);
    let panicked = broken.reduce(|_| false, |captured| captured.is_panic());
    assert!(panicked);
}

#[test]
fn try_predicate_and_try_relation_wrap_fallible_decisions() {
    let confirm = |raw: &str| -> Result<bool, String> {
        match raw {
            "yes" => Ok(true),
            "no" => Ok(false),
            other => Err(format!("unrecognized answer: {other}")),
        }
    };

    assert!(matches!(
        wrap::try_predicate("yes", confirm),
        Outcome::Success(true)
    ));
    let unrecognized = wrap::try_predicate("maybe", confirm);
    assert!(unrecognized.is_failure());

    let same_parity = |a: u32, b: u32| -> Result<bool, String> { Ok(a % 2 == b % 2) };
    assert!(matches!(
        wrap::try_relation(2, 4, same_parity),
        Outcome::Success(true)
    ));
}

#[test]
fn captured_outcomes_flow_through_the_algebra() {
    silence_panic_hook();

    let parsed = wrap::try_unary("21", |raw: &str| raw.parse::<u32>())
        .transform_success(|n| n * 2)
        .transform_failure(|captured| captured.to_string());

    assert_eq!(parsed, Outcome::success(42));

    let report = wrap::supplier(|| -> u32 { panic!("backend offline") })
        .transform_failure(|payload| payload.to_string())
        .or(Outcome::success(0))
        .reduce(|value| format!("got {value}"), |failure| failure);

    assert_eq!(report, "got 0");
}
