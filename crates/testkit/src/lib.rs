//! # upshot-testkit
//!
//! Test helpers for the upshot workspace: invocation counters, ordered event
//! logs, and panic-hook management for suites that panic on purpose.
//! Intended as a dev-dependency only.

pub mod panics;
pub mod probe;

pub use panics::silence_panic_hook;
pub use probe::{CallCounter, EventLog};

/// Returns the testkit crate version.
#[must_use]
pub const fn testkit_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
