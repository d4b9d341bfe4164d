//! Channel type for the wrap family that accepts declared errors.

use crate::PanicPayload;
use thiserror::Error;

/// Failure signal captured by the declared-failure wrap adapters.
///
/// Computations handed to that family report failure two ways: by returning
/// `Err` through their own error channel, or by panicking. Both end up here
/// so the rest of a pipeline sees a single failure type.
#[derive(Debug, Error)]
pub enum Captured<E> {
    /// Error the computation returned through its own error channel.
    #[error("declared failure: {0}")]
    Declared(E),
    /// Panic that unwound out of the computation.
    #[error("captured panic: {0}")]
    Panicked(PanicPayload),
}

impl<E> Captured<E> {
    /// Returns true when the signal is the computation's own declared error.
    #[must_use]
    pub const fn is_declared(&self) -> bool {
        matches!(self, Self::Declared(_))
    }

    /// Returns true when the signal is a captured panic.
    #[must_use]
    pub const fn is_panic(&self) -> bool {
        matches!(self, Self::Panicked(_))
    }

    /// Borrow the declared error, when present.
    #[must_use]
    pub const fn declared(&self) -> Option<&E> {
        match self {
            Self::Declared(error) => Some(error),
            Self::Panicked(_) => None,
        }
    }

    /// Map the declared error type, passing captured panics through.
    pub fn map_declared<G, M>(self, mapping: M) -> Captured<G>
    where
        M: FnOnce(E) -> G,
    {
        match self {
            Self::Declared(error) => Captured::Declared(mapping(error)),
            Self::Panicked(payload) => Captured::Panicked(payload),
        }
    }
}
