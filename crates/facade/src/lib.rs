//! # upshot
//!
//! Facade crate for the upshot workspace: an explicit two-channel outcome
//! type, its combinator set, and panic-capturing boundary adapters.
//!
//! An [`Outcome<S, F>`](Outcome) succeeds with a value of type `S` or fails
//! with a value of the independently chosen type `F`. Pipelines chain
//! combinators and finish with [`reduce`](Outcome::reduce) or
//! [`conclude`](Outcome::conclude), which force both channels to be
//! handled:
//!
//! ```
//! use upshot::Outcome;
//!
//! fn lookup(key: &str) -> Outcome<u32, String> {
//!     match key {
//!         "answer" => Outcome::success(42),
//!         other => Outcome::failure(format!("no entry for {other}")),
//!     }
//! }
//!
//! let report = lookup("answer")
//!     .transform_success(|value| value + 1)
//!     .reduce(|value| format!("found {value}"), |failure| failure);
//!
//! assert_eq!(report, "found 43");
//! ```
//!
//! The [`wrap`] adapters sit at the boundary with ordinary code: they run a
//! computation once, turn a normal return into a success, and capture a
//! panic as a typed failure instead of letting it unwind:
//!
//! ```
//! use upshot::{Outcome, wrap};
//!
//! let doubled = wrap::try_unary("21", |raw: &str| raw.parse::<u32>())
//!     .transform_success(|value| value * 2)
//!     .transform_failure(|captured| captured.to_string());
//!
//! assert_eq!(doubled, Outcome::success(42));
//! ```

pub use upshot_algebra::Outcome;
pub use upshot_boundary::{Captured, PanicPayload, wrap};
pub use upshot_core::{Apply, Combine, Decide, Produce, Relate};

/// Convenience re-exports for glob imports.
pub mod prelude {
    pub use upshot_algebra::Outcome;
    pub use upshot_boundary::{Captured, PanicPayload, wrap};
}

/// Returns the facade crate version.
#[must_use]
pub const fn crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// =============================================================================
// TESTS
// =============================================================================
